use super::{Chart, PlotError};
use plotly::common::{Anchor, Mode, Orientation};
use plotly::layout::themes::PLOTLY_DARK;
use plotly::layout::{Axis, Legend};
use plotly::{Layout, Plot, Scatter};
use std::path::Path;

/// One lines+markers trace per series, named after its file, on the plotly_dark template.
pub fn build_plot(chart: &Chart) -> Plot {
    let mut plot = Plot::new();
    for s in chart.series.iter() {
        let trace = Scatter::new(s.x.to_json(), s.y.to_json())
            .mode(Mode::LinesMarkers)
            .name(s.label.as_str());
        plot.add_trace(trace);
    }
    let layout = Layout::new()
        .template(PLOTLY_DARK.clone())
        .title(chart.title().as_str())
        .x_axis(Axis::new().title(chart.x_label.as_str()))
        .y_axis(Axis::new().title(chart.y_label.as_str()))
        .legend(
            Legend::new()
                .orientation(Orientation::Horizontal)
                .x_anchor(Anchor::Center)
                .x(0.5)
                .y_anchor(Anchor::Bottom)
                .y(-0.3),
        );
    plot.set_layout(layout);
    plot
}

/// Writes the chart as a standalone html page, plotly.js included.
pub fn write_html<P: AsRef<Path>>(chart: &Chart, fout: P) -> Result<(), PlotError> {
    let fout = fout.as_ref();
    let plot = build_plot(chart);
    std::fs::write(fout, plot.to_html()).map_err(|source| PlotError::Io {
        output: fout.display().to_string(),
        source,
    })?;
    log::debug!("wrote {} traces to {}", chart.series.len(), fout.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Values;
    use crate::Series;

    fn chart() -> Chart {
        let series = ["run_a.csv", "run_b.csv"]
            .iter()
            .map(|l| Series {
                x: Values::Numeric(vec![1., 2., 4.]),
                y: Values::Numeric(vec![10., 20., f64::NAN]),
                label: l.to_string(),
            })
            .collect();
        Chart {
            x_label: "threads".to_string(),
            y_label: "ops/s".to_string(),
            series,
        }
    }

    #[test]
    fn one_named_trace_per_series() {
        let json = build_plot(&chart()).to_json();
        assert_eq!(json.matches("\"name\":\"run_").count(), 2);
        assert!(json.contains("\"name\":\"run_a.csv\""));
        assert!(json.contains("\"name\":\"run_b.csv\""));
        assert!(json.contains("\"mode\":\"lines+markers\""));
        assert!(json.contains("ops/s vs. threads"));
    }

    #[test]
    fn missing_values_are_null() {
        let json = build_plot(&chart()).to_json();
        assert!(json.contains("[10.0,20.0,null]"));
    }

    #[test]
    fn writes_html_page() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plot.html");
        write_html(&chart(), &out).unwrap();
        let page = std::fs::read_to_string(&out).unwrap();
        assert!(page.contains("<html"));
        // plotly.js itself is inlined
        assert!(page.len() > 1_000_000);
        assert!(page.contains("\"template\""));
        assert!(page.contains("run_b.csv"));
    }

    #[test]
    fn unwritable_output_is_reported() {
        let err = write_html(&chart(), "/nonexistent/dir/plot.html").unwrap_err();
        assert!(matches!(err, PlotError::Io { .. }));
    }
}
