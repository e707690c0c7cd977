use seriesplot::cli::parse_cli_single;
use seriesplot::plot::render_png;
use seriesplot::theme::Theme;
use seriesplot::{single_output_path, Chart};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let csvin = parse_cli_single();
    let pngout = single_output_path(&csvin);
    log::info!("read data from {} and plot to {}", csvin.display(), pngout.display());
    let chart = Chart::from_csv_files(&[csvin])?;
    render_png(&chart, &Theme::light(), &pngout)?;
    println!("Plot saved as {}", pngout.display());
    Ok(())
}
