use plotters::style::RGBColor;

pub const FONT: &str = "sans-serif";

/// plotly default colorway
pub const PLOTLY_COLORWAY: [RGBColor; 10] = [
    RGBColor(99, 110, 250),
    RGBColor(239, 85, 59),
    RGBColor(0, 204, 150),
    RGBColor(171, 99, 250),
    RGBColor(255, 161, 90),
    RGBColor(25, 211, 243),
    RGBColor(255, 102, 146),
    RGBColor(182, 232, 128),
    RGBColor(255, 151, 255),
    RGBColor(254, 203, 82),
];

const SINGLE_LINE: [RGBColor; 1] = [RGBColor(255, 0, 0)];

/// Look of a static chart.
#[derive(Debug, Clone)]
pub struct Theme {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub foreground: RGBColor,
    pub grid: Option<RGBColor>,
    pub palette: &'static [RGBColor],
    pub marker_size: u32,
    pub line_width: u32,
    pub title_size: f64,
    pub label_size: f64,
    /// horizontal legend centered below the plot area
    pub legend: bool,
}

impl Theme {
    /// white 800x500 canvas, one red line with circle markers and a grid
    pub fn light() -> Theme {
        Theme {
            width: 800,
            height: 500,
            background: RGBColor(255, 255, 255),
            foreground: RGBColor(0, 0, 0),
            grid: Some(RGBColor(176, 176, 176)),
            palette: &SINGLE_LINE,
            marker_size: 4,
            line_width: 2,
            title_size: 22.,
            label_size: 16.,
            legend: false,
        }
    }

    /// plotly-dark look on a fixed 1280x720 canvas, legend below the plot
    pub fn dark() -> Theme {
        Theme {
            width: 1280,
            height: 720,
            background: RGBColor(17, 17, 17),
            foreground: RGBColor(242, 245, 250),
            grid: Some(RGBColor(40, 52, 66)),
            palette: &PLOTLY_COLORWAY,
            marker_size: 3,
            line_width: 2,
            title_size: 24.,
            label_size: 16.,
            legend: true,
        }
    }

    /// color of the i-th series, cycling over the palette
    pub fn color(&self, i: usize) -> RGBColor {
        self.palette[i % self.palette.len()]
    }
}
