use super::VERSION;
use clap::{App, Arg};
use std::ffi::OsString;
use std::path::PathBuf;

fn single_app() -> App<'static, 'static> {
    let arg_csvin = Arg::with_name("file")
        .help("Path to the CSV file")
        .required(true)
        .index(1);
    App::new("seriesplot_single")
        .version(VERSION.unwrap_or("unknown"))
        .about("Plot the second column against the first of a CSV file, saved as <file>_plot.png")
        .arg(arg_csvin)
}

fn multi_app(name: &'static str, about: &'static str) -> App<'static, 'static> {
    let arg_csvin = Arg::with_name("files")
        .help("Paths to the CSV files")
        .required(true)
        .multiple(true)
        .index(1);
    App::new(name)
        .version(VERSION.unwrap_or("unknown"))
        .about(about)
        .arg(arg_csvin)
}

/// Takes the single csv file to plot.
pub fn parse_cli_single() -> PathBuf {
    let cli_args = single_app().get_matches();
    PathBuf::from(cli_args.value_of_os("file").unwrap_or_default())
}

/// Takes the csv files to overlay, in the given order.
pub fn parse_cli_multi(name: &'static str, about: &'static str) -> Vec<PathBuf> {
    let cli_args = multi_app(name, about).get_matches();
    files_of(&cli_args)
}

/// same as [`parse_cli_single`] but from explicit arguments, errors are returned
pub fn parse_single_from<I, T>(args: I) -> Result<PathBuf, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli_args = single_app().get_matches_from_safe(args)?;
    Ok(PathBuf::from(cli_args.value_of_os("file").unwrap_or_default()))
}

/// same as [`parse_cli_multi`] but from explicit arguments, errors are returned
pub fn parse_multi_from<I, T>(
    name: &'static str,
    about: &'static str,
    args: I,
) -> Result<Vec<PathBuf>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli_args = multi_app(name, about).get_matches_from_safe(args)?;
    Ok(files_of(&cli_args))
}

fn files_of(cli_args: &clap::ArgMatches) -> Vec<PathBuf> {
    cli_args
        .values_of_os("files")
        .map(|v| v.map(PathBuf::from).collect())
        .unwrap_or_default()
}
