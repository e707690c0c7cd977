use std::path::{Path, PathBuf};
pub mod cli;
pub mod error;
pub mod html;
pub mod plot;
pub mod table;
pub mod theme;
pub mod values;

pub use error::PlotError;
use table::Table;
use values::Values;

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

pub const DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// fixed output of the multi-file static plotter, overwritten at each run
pub const OVERLAY_PNG: &str = "plot.png";
/// fixed output of the multi-file interactive plotter, overwritten at each run
pub const OVERLAY_HTML: &str = "plot.html";
pub const SINGLE_SUFFIX: &str = "_plot.png";

/// One csv file drawn as one line: (x, y) as read and the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub x: Values,
    pub y: Values,
    pub label: String,
}

impl Series {
    pub fn points(&self) -> usize {
        self.y.len()
    }
}

/// The series of one invocation, all sharing the same x and y column names.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Chart {
    /// Loads every csv in input order.
    /// The first file sets the x and y labels from its first two column names,
    /// any later file with different names is rejected naming that file.
    pub fn from_csv_files<P: AsRef<Path>>(files: &[P]) -> Result<Chart, PlotError> {
        let mut labels: Option<(String, String)> = None;
        let mut series: Vec<Series> = Vec::with_capacity(files.len());
        for f in files {
            let file = f.as_ref().display().to_string();
            let table = Table::from_csv(f)?;
            let (x, y) =
                labels.get_or_insert_with(|| (table.x_name.clone(), table.y_name.clone()));
            if *x != table.x_name || *y != table.y_name {
                return Err(PlotError::HeaderMismatch {
                    file,
                    expected_x: x.clone(),
                    expected_y: y.clone(),
                    found_x: table.x_name,
                    found_y: table.y_name,
                });
            }
            let missing = table.x.missing() + table.y.missing();
            if missing > 0 {
                log::warn!("{} has {} missing value(s), drawn as gaps", file, missing);
            }
            log::debug!(
                "loaded {} points from {} (x: {:?}, y: {:?})",
                table.rows(),
                file,
                table.x.kind(),
                table.y.kind()
            );
            series.push(Series {
                x: table.x,
                y: table.y,
                label: file,
            });
        }
        let (x_label, y_label) = labels.ok_or(PlotError::NoInput)?;
        Ok(Chart {
            x_label,
            y_label,
            series,
        })
    }

    pub fn title(&self) -> String {
        chart_title(&self.x_label, &self.y_label)
    }
}

impl std::fmt::Display for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n", self.title())?;
        for s in self.series.iter() {
            write!(f, "{}, {} points\n", s.label, s.points())?
        }
        Ok(())
    }
}

pub fn chart_title(x_label: &str, y_label: &str) -> String {
    format!("{} vs. {}", y_label, x_label)
}

/// output of the single-file plotter: every ".csv" in the path replaced by "_plot.png",
/// or "_plot.png" appended when there is none so the input is never overwritten
pub fn single_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let s = input.to_string_lossy();
    if s.contains(".csv") {
        PathBuf::from(s.replace(".csv", SINGLE_SUFFIX))
    } else {
        let mut out = input.as_os_str().to_owned();
        out.push(SINGLE_SUFFIX);
        PathBuf::from(out)
    }
}

/// min and max of the comparable values, NAN and the like are skipped
pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> Option<(T, T)> {
    let mut self_iter = s.iter().filter(|v| v.partial_cmp(v).is_some());
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => return None,
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    Some((min, max))
}

/// chrono format for time axis labels, coarser as the plotted span grows
pub fn suitable_xfmt(span: chrono::Duration) -> &'static str {
    match span {
        s if s > chrono::Duration::weeks(1) => "%y-%m-%d",
        s if s > chrono::Duration::days(1) => "%m-%d %H",
        s if s > chrono::Duration::hours(1) => "%d %H:%M",
        _ => "%H:%M:%S",
    }
}
