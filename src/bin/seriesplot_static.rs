use seriesplot::cli::parse_cli_multi;
use seriesplot::plot::render_png;
use seriesplot::theme::Theme;
use seriesplot::{Chart, OVERLAY_PNG};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let csvin = parse_cli_multi(
        "seriesplot_static",
        "Overlay the series of several CSV files sharing the same columns, saved as plot.png",
    );
    let chart = Chart::from_csv_files(&csvin)?;
    log::debug!("{}", chart);
    render_png(&chart, &Theme::dark(), OVERLAY_PNG)?;
    println!("Static plot saved as {}", OVERLAY_PNG);
    Ok(())
}
