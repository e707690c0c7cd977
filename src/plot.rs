use super::theme::{Theme, FONT};
use super::values::Values;
use super::{min_and_max, suitable_xfmt, Chart, PlotError, Series};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::collections::HashMap;
use std::path::Path;

const LEGEND_MARGIN: u32 = 20;
const LEGEND_ROW: u32 = 28;
const LEGEND_GAP: u32 = 24;
const LEGEND_SWATCH: u32 = 30;
const LEGEND_PAD: u32 = 6;

/// How the x cells of all the series are placed on the horizontal axis.
#[derive(Debug, Clone, PartialEq)]
pub enum XScale {
    Numeric,
    /// seconds since the epoch, labelled with a chrono format
    Time { fmt: &'static str },
    /// categories in first-seen order, placed at their index
    Category {
        names: Vec<String>,
        index: HashMap<String, usize>,
    },
}

impl XScale {
    pub fn for_chart(chart: &Chart) -> XScale {
        if chart.series.iter().all(|s| matches!(s.x, Values::Numeric(_))) {
            return XScale::Numeric;
        }
        let mut times = Vec::new();
        for s in chart.series.iter() {
            match &s.x {
                Values::DateTime(v) => times.extend_from_slice(v),
                _ => {
                    times.clear();
                    break;
                }
            }
        }
        if let Some((first, last)) = min_and_max(&times[..]) {
            return XScale::Time {
                fmt: suitable_xfmt(last - first),
            };
        }
        let mut names: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for s in chart.series.iter() {
            for c in s.x.to_text() {
                if !index.contains_key(&c) {
                    index.insert(c.clone(), names.len());
                    names.push(c);
                }
            }
        }
        XScale::Category { names, index }
    }

    /// x coordinates of the cells, NAN where a cell cannot be placed
    pub fn positions(&self, x: &Values) -> Vec<f64> {
        match (self, x) {
            (XScale::Numeric, Values::Numeric(v)) => v.clone(),
            (XScale::Time { .. }, Values::DateTime(v)) => v
                .iter()
                .map(|t| t.and_utc().timestamp() as f64)
                .collect(),
            (XScale::Category { index, .. }, x) => x
                .to_text()
                .iter()
                .map(|c| index.get(c).map(|&i| i as f64).unwrap_or(f64::NAN))
                .collect(),
            _ => vec![f64::NAN; x.len()],
        }
    }

    pub fn label(&self, v: f64) -> String {
        match self {
            XScale::Numeric => {
                let s = format!("{:.6}", v);
                let s = s.trim_end_matches('0').trim_end_matches('.');
                if s == "-0" {
                    "0".to_string()
                } else {
                    s.to_string()
                }
            }
            XScale::Time { fmt } => chrono::DateTime::from_timestamp(v.round() as i64, 0)
                .map(|t| t.naive_utc().format(fmt).to_string())
                .unwrap_or_default(),
            XScale::Category { names, .. } => {
                let i = v.round();
                if (v - i).abs() > 1e-6 || i < 0. {
                    return String::new();
                }
                names.get(i as usize).cloned().unwrap_or_default()
            }
        }
    }

    pub fn max_labels(&self) -> usize {
        match self {
            XScale::Category { names, .. } => names.len().max(1).min(20),
            _ => 12,
        }
    }
}

/// Splits the points at every missing (non finite) x or y,
/// each chunk is drawn as a separate line.
pub fn segments(xs: &[f64], ys: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut chunks = Vec::new();
    let mut current = Vec::new();
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Axis range covering the values with span/divisor margins on both sides.
pub fn padded_range<I: Iterator<Item = f64>>(values: I, divisor: f64) -> (f64, f64) {
    let values: Vec<f64> = values.collect();
    let (min, max) = match min_and_max(&values[..]) {
        Some(mm) => mm,
        None => return (0., 1.),
    };
    let span = max - min;
    let margin = if span > 0. {
        span / divisor
    } else if min != 0. {
        min.abs() / divisor
    } else {
        1.
    };
    (min - margin, max + margin)
}

/// Packs the legend entries into rows no wider than `max_width`
/// and centers each row; returns (entry index, x offset) per row.
pub fn legend_rows(widths: &[u32], max_width: u32, gap: u32) -> Vec<Vec<(usize, i32)>> {
    let mut rows: Vec<(Vec<usize>, u32)> = Vec::new();
    for (i, &w) in widths.iter().enumerate() {
        match rows.last_mut() {
            Some((items, width)) if *width + gap + w <= max_width => {
                items.push(i);
                *width += gap + w;
            }
            _ => rows.push((vec![i], w)),
        }
    }
    rows.into_iter()
        .map(|(items, width)| {
            let mut x = (max_width.saturating_sub(width) / 2) as i32;
            items
                .into_iter()
                .map(|i| {
                    let at = x;
                    x += (widths[i] + gap) as i32;
                    (i, at)
                })
                .collect()
        })
        .collect()
}

fn y_numbers<'a>(s: &'a Series, y_label: &str) -> Result<&'a [f64], PlotError> {
    match &s.y {
        Values::Numeric(v) => Ok(&v[..]),
        _ => Err(PlotError::NonNumericColumn {
            file: s.label.clone(),
            column: y_label.to_string(),
        }),
    }
}

/// Renders the chart as a png image at the given path.
pub fn render_png<P: AsRef<Path>>(chart: &Chart, theme: &Theme, fout: P) -> Result<(), PlotError> {
    let fout = fout.as_ref();
    let scale = XScale::for_chart(chart);
    let lines = chart
        .series
        .iter()
        .map(|s| Ok(segments(&scale.positions(&s.x), y_numbers(s, &chart.y_label)?)))
        .collect::<Result<Vec<_>, PlotError>>()?;
    let root = BitMapBackend::new(fout, (theme.width, theme.height)).into_drawing_area();
    draw(&root, chart, theme, &scale, &lines).map_err(|e| PlotError::Render {
        output: fout.display().to_string(),
        message: e.to_string(),
    })?;
    log::debug!(
        "drew {} series on a {}x{} canvas",
        lines.len(),
        theme.width,
        theme.height
    );
    Ok(())
}

/// draws title, axes, lines and (optionally) the legend on any plotters backend
pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &Chart,
    theme: &Theme,
    scale: &XScale,
    lines: &[Vec<Vec<(f64, f64)>>],
) -> Result<(), Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&theme.background)?;
    let label_style = (FONT, theme.label_size).into_font().color(&theme.foreground);

    let plot_area = if theme.legend {
        let widths = chart
            .series
            .iter()
            .map(|s| {
                root.estimate_text_size(&s.label, &label_style)
                    .map(|(w, _)| w + LEGEND_SWATCH + LEGEND_PAD)
            })
            .collect::<Result<Vec<u32>, _>>()?;
        let rows = legend_rows(
            &widths,
            theme.width.saturating_sub(2 * LEGEND_MARGIN),
            LEGEND_GAP,
        );
        let legend_height = rows.len() as u32 * LEGEND_ROW + LEGEND_MARGIN;
        let (upper, lower) = root.split_vertically(theme.height.saturating_sub(legend_height));
        for (r, row) in rows.iter().enumerate() {
            let yc = (r as u32 * LEGEND_ROW + LEGEND_ROW / 2) as i32;
            for &(i, offset) in row.iter() {
                let color = theme.color(i);
                let x0 = LEGEND_MARGIN as i32 + offset;
                let x1 = x0 + LEGEND_SWATCH as i32;
                lower.draw(&PathElement::new(
                    vec![(x0, yc), (x1, yc)],
                    color.stroke_width(theme.line_width),
                ))?;
                lower.draw(&Circle::new(
                    ((x0 + x1) / 2, yc),
                    theme.marker_size,
                    color.filled(),
                ))?;
                lower.draw(&Text::new(
                    chart.series[i].label.as_str(),
                    (x1 + LEGEND_PAD as i32, yc),
                    label_style.pos(Pos::new(HPos::Left, VPos::Center)),
                ))?;
            }
        }
        upper
    } else {
        root.clone()
    };

    let (xmin, xmax) = padded_range(lines.iter().flatten().flatten().map(|p| p.0), 20.);
    let (ymin, ymax) = padded_range(lines.iter().flatten().flatten().map(|p| p.1), 10.);
    let mut cc = ChartBuilder::on(&plot_area)
        .caption(
            chart.title(),
            (FONT, theme.title_size).into_font().color(&theme.foreground),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(xmin..xmax, ymin..ymax)?;

    let xfmt = |x: &f64| scale.label(*x);
    let mut mesh = cc.configure_mesh();
    mesh.x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .axis_style(&theme.foreground)
        .label_style(label_style.clone())
        .axis_desc_style(label_style.clone())
        .x_labels(scale.max_labels())
        .x_label_formatter(&xfmt);
    match theme.grid {
        Some(grid) => {
            mesh.bold_line_style(&grid).light_line_style(&TRANSPARENT);
        }
        None => {
            mesh.disable_mesh();
        }
    }
    mesh.draw()?;

    for (i, chunks) in lines.iter().enumerate() {
        let color = theme.color(i);
        for chunk in chunks.iter() {
            cc.draw_series(LineSeries::new(
                chunk.iter().copied(),
                color.stroke_width(theme.line_width),
            ))?;
            cc.draw_series(
                chunk
                    .iter()
                    .map(|&p| Circle::new(p, theme.marker_size, color.filled())),
            )?;
        }
    }
    root.present()?;
    Ok(())
}
