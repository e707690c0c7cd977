use thiserror::Error;

/// Errors raised while loading the CSV series or writing a chart.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("no input csv file given")]
    NoInput,

    #[error("{file} has {found} column(s), at least 2 are required")]
    TooFewColumns { file: String, found: usize },

    #[error(
        "Column names in {file} do not match the first file \
        (expected `{expected_x}`, `{expected_y}`; found `{found_x}`, `{found_y}`)."
    )]
    HeaderMismatch {
        file: String,
        expected_x: String,
        expected_y: String,
        found_x: String,
        found_y: String,
    },

    #[error("could not read {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("{file} line {line}: expected {expected} fields, found {found}")]
    TooManyFields {
        file: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("column `{column}` in {file} is not numeric, it cannot be drawn on a static plot")]
    NonNumericColumn { file: String, column: String },

    #[error("could not render {output}: {message}")]
    Render { output: String, message: String },

    #[error("could not write {output}: {source}")]
    Io {
        output: String,
        #[source]
        source: std::io::Error,
    },
}
