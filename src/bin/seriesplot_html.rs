use seriesplot::cli::parse_cli_multi;
use seriesplot::html::write_html;
use seriesplot::{Chart, OVERLAY_HTML};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let csvin = parse_cli_multi(
        "seriesplot_html",
        "Overlay the series of several CSV files sharing the same columns, saved as plot.html",
    );
    let chart = Chart::from_csv_files(&csvin)?;
    log::debug!("{}", chart);
    write_html(&chart, OVERLAY_HTML)?;
    println!("Interactive plot saved as {}", OVERLAY_HTML);
    Ok(())
}
