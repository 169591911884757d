//! # prodexport
//!
//! A CLI tool for exporting product lists as text tables.
//!
//! ## Overview
//!
//! prodexport is built on top of prodexportlib. It reads a JSON array of
//! products, renders them through one of the library's table formats and
//! writes the result to stdout or a file.
//!
//! ## Usage
//!
//! ```bash
//! # Markdown table on stdout
//! prodexport products.json
//!
//! # Add the brand and model columns
//! prodexport products.json --column brand,model
//!
//! # HTML, format picked from the output extension
//! prodexport products.json --output products.html
//!
//! # Read from stdin
//! cat products.json | prodexport --format md
//! ```

mod render;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use log::LevelFilter;
use prodexportlib::{read_products, read_products_from, ExportOptions, Product, ProductField};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("prodexport")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Export product lists as Markdown or HTML tables")
        .arg(
            Arg::new("input")
                .help("JSON file with an array of products ('-' or absent reads stdin)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format: md, markdown, html, htm (defaults to the output extension, else md)"),
        )
        .arg(
            Arg::new("column")
                .short('c')
                .long("column")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .help("Extra column after ID, Description, Stock (id, description, brand, model, stock)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the table to this file instead of stdout"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .action(ArgAction::SetTrue)
                .help("List supported output formats and exit"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (repeatable)"),
        )
}

/// Map -v occurrences to a log level
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize env_logger; RUST_LOG takes precedence over -v
fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbosity));
    builder.parse_default_env();
    let _ = builder.try_init();
}

/// Extract extra columns from matches
fn extract_fields(matches: &ArgMatches) -> Result<Vec<ProductField>, anyhow::Error> {
    let mut fields = Vec::new();
    if let Some(names) = matches.get_many::<String>("column") {
        for name in names {
            fields.push(name.parse()?);
        }
    }
    Ok(fields)
}

/// Build export options from matches
fn build_options(matches: &ArgMatches) -> Result<ExportOptions, anyhow::Error> {
    let format = render::resolve_format(
        matches.get_one::<String>("format").map(|s| s.as_str()),
        matches.get_one::<String>("output").map(|s| s.as_str()),
    )?;
    Ok(ExportOptions::new()
        .format(format)
        .fields(extract_fields(matches)?))
}

/// Load products from the input argument or stdin
fn load_products(input: Option<&str>) -> Result<Vec<Product>, anyhow::Error> {
    match input {
        None | Some("-") => {
            log::info!("reading products from stdin");
            read_products_from(std::io::stdin().lock()).context("failed to read products from stdin")
        }
        Some(path) => {
            log::info!("reading products from {}", path);
            Ok(read_products(path)?)
        }
    }
}

/// Write rendered text to `out`, reporting failures such as a closed pipe
fn write_output<W: Write>(mut out: W, text: &str) -> Result<(), anyhow::Error> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write to stdout")
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    if matches.get_flag("list-formats") {
        return write_output(std::io::stdout().lock(), &render::format_list());
    }

    let options = build_options(matches)?;
    let products = load_products(matches.get_one::<String>("input").map(|s| s.as_str()))?;
    let table = render::render_table(&products, &options);

    match matches.get_one::<String>("output") {
        Some(path) => {
            std::fs::write(path, &table).with_context(|| format!("failed to write '{}'", path))?;
            log::info!("wrote {} products to {}", products.len(), path);
        }
        None => write_output(std::io::stdout().lock(), &table)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", Style::new().for_stderr().red().bold().apply_to("Error:"), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_for(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["prodexport"];
        argv.extend(args);
        build_command().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn test_extract_fields_comma_and_repeat() {
        let matches = matches_for(&["-c", "brand,model", "--column", "id"]);
        let fields = extract_fields(&matches).unwrap();
        assert_eq!(
            fields,
            vec![ProductField::Brand, ProductField::Model, ProductField::Id]
        );
    }

    #[test]
    fn test_extract_fields_unknown() {
        let matches = matches_for(&["--column", "price"]);
        assert!(extract_fields(&matches).is_err());
    }

    #[test]
    fn test_build_options_defaults_to_markdown() {
        let options = build_options(&matches_for(&["products.json"])).unwrap();
        assert_eq!(options, ExportOptions::new());
    }

    /// Writer whose reader has gone away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_output_closed_pipe_is_an_error() {
        let err = write_output(ClosedPipe, "|ID|Description|Stock\n").unwrap_err();
        assert!(format!("{:#}", err).contains("failed to write to stdout"));
    }

    #[test]
    fn test_write_output() {
        let mut buf = Vec::new();
        write_output(&mut buf, "|7|Widget|3\n").unwrap();
        assert_eq!(buf, b"|7|Widget|3\n");
    }

    #[test]
    fn test_verbose_counts() {
        let matches = matches_for(&["-vv"]);
        assert_eq!(matches.get_count("verbose"), 2);
    }
}
