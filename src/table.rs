use super::error::PlotError;
use super::values::Values;
use std::path::Path;

/// The first two columns of a csv file with header row.
#[derive(Debug, Clone)]
pub struct Table {
    pub x_name: String,
    pub y_name: String,
    pub x: Values,
    pub y: Values,
}

impl Table {
    /// Reads the csv at `path`, keeping only the first two columns.
    /// Short rows get empty (missing) cells, rows longer than the header are rejected.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Table, PlotError> {
        let path = path.as_ref();
        let file = path.display().to_string();
        let csv_err = |source: csv::Error| PlotError::Csv {
            file: file.clone(),
            source,
        };
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(csv_err)?;
        let headers = reader.headers().map_err(csv_err)?.clone();
        if headers.len() < 2 {
            return Err(PlotError::TooFewColumns {
                file: file.clone(),
                found: headers.len(),
            });
        }

        let mut xcells: Vec<String> = Vec::new();
        let mut ycells: Vec<String> = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            if record.len() > headers.len() {
                return Err(PlotError::TooManyFields {
                    file: file.clone(),
                    line: record.position().map(|p| p.line()).unwrap_or_default(),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            xcells.push(record.get(0).unwrap_or_default().to_string());
            ycells.push(record.get(1).unwrap_or_default().to_string());
        }
        log::debug!("read {} rows from {}", xcells.len(), file);

        Ok(Table {
            x_name: headers[0].to_string(),
            y_name: headers[1].to_string(),
            x: Values::infer(&xcells),
            y: Values::infer(&ycells),
        })
    }

    pub fn rows(&self) -> usize {
        self.x.len()
    }
}
