use seriesplot::values::{Kind, Values};
use seriesplot::{Chart, PlotError};
use std::fs;
use std::path::{Path, PathBuf};

fn write_csv(dir: &Path, name: &str, header: &str, rows: usize) -> PathBuf {
    let mut content = format!("{}\n", header);
    for i in 0..rows {
        content.push_str(&format!("{},{}\n", i + 1, (i as f64) * 1.5));
    }
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn n_files_give_n_series_of_k_points() {
    let dir = tempfile::tempdir().unwrap();
    let files: Vec<PathBuf> = ["a.csv", "b.csv", "c.csv"]
        .iter()
        .map(|n| write_csv(dir.path(), n, "threads,throughput", 5))
        .collect();
    let chart = Chart::from_csv_files(&files).unwrap();
    assert_eq!(chart.series.len(), 3);
    for (s, f) in chart.series.iter().zip(files.iter()) {
        assert_eq!(s.points(), 5);
        assert_eq!(s.x.len(), 5);
        assert_eq!(s.label, f.display().to_string());
        assert_eq!(s.x.kind(), Kind::Numeric);
    }
    assert_eq!(chart.title(), "throughput vs. threads");
}

#[test]
fn labels_keep_the_given_path() {
    let dir = tempfile::tempdir().unwrap();
    let f = write_csv(dir.path(), "run.csv", "x,y", 2);
    let chart = Chart::from_csv_files(&[f.clone()]).unwrap();
    assert_eq!(chart.series[0].label, f.display().to_string());
}

#[test]
fn second_header_differs_in_first_column() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_csv(dir.path(), "a.csv", "threads,throughput", 3);
    let b = write_csv(dir.path(), "b.csv", "size,throughput", 3);
    let err = Chart::from_csv_files(&[a, b.clone()]).unwrap_err();
    match &err {
        PlotError::HeaderMismatch { file, found_x, .. } => {
            assert_eq!(*file, b.display().to_string());
            assert_eq!(found_x, "size");
        }
        other => panic!("unexpected error {:?}", other),
    }
    let msg = err.to_string();
    assert!(msg.starts_with(&format!(
        "Column names in {} do not match the first file",
        b.display()
    )));
}

#[test]
fn second_header_differs_in_second_column() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_csv(dir.path(), "a.csv", "threads,throughput", 3);
    let b = write_csv(dir.path(), "b.csv", "threads,latency", 3);
    let c = write_csv(dir.path(), "c.csv", "threads,throughput", 3);
    let err = Chart::from_csv_files(&[a, b.clone(), c]).unwrap_err();
    assert!(err.to_string().contains(&b.display().to_string()));
}

#[test]
fn extra_columns_are_ignored_for_validation() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_csv(dir.path(), "a.csv", "x,y,z", 2);
    let b = write_csv(dir.path(), "b.csv", "x,y,w", 4);
    let chart = Chart::from_csv_files(&[a, b]).unwrap();
    assert_eq!(chart.series[1].points(), 4);
}

#[test]
fn no_files_is_an_error() {
    let files: Vec<PathBuf> = Vec::new();
    assert!(matches!(
        Chart::from_csv_files(&files),
        Err(PlotError::NoInput)
    ));
}

#[test]
fn reload_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let files = vec![
        write_csv(dir.path(), "a.csv", "x,y", 4),
        write_csv(dir.path(), "b.csv", "x,y", 6),
    ];
    let first = Chart::from_csv_files(&files).unwrap();
    let second = Chart::from_csv_files(&files).unwrap();
    assert_eq!(first, second);
}

#[test]
fn values_are_plotted_as_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.csv");
    fs::write(
        &path,
        "datetime,weight_kg\n2025-02-15 17:00:00,13.5\n2025-02-15 17:02:00,\n",
    )
    .unwrap();
    let chart = Chart::from_csv_files(&[path]).unwrap();
    let s = &chart.series[0];
    assert_eq!(s.x.kind(), Kind::DateTime);
    match &s.y {
        Values::Numeric(v) => {
            assert_eq!(v[0], 13.5);
            assert!(v[1].is_nan());
        }
        other => panic!("unexpected values {:?}", other),
    }
}
