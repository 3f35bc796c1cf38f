//! Command-line interface for itemfilter
//!
//! Usage:
//!   itemfilter execute `<path>` [--format `<spec>`] [--width `<n>`]  - Parse a filter and print it
//!   itemfilter check `<path>`                                     - Report parse errors
//!   itemfilter list-formats                                      - List processing specs
//!
//! Every subcommand accepts `--config <file>` to layer settings over the built-in defaults
//! and `--verbose` for debug logging.

use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};

use itemfilter::filter::config::{FilterConfig, Loader};
use itemfilter::filter::formats::{render_error, RenderOptions};
use itemfilter::filter::processor::{available_formats, process_file, ProcessingSpec};
use itemfilter::{parse_reader, FilterError};

fn cli() -> Command {
    Command::new("itemfilter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and checking item filter files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("execute")
                .about("Parse a filter and print it in the given format")
                .arg(
                    Arg::new("path")
                        .help("Path to the filter file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Processing spec, e.g. 'blocks-text' (defaults to output.format)"),
                )
                .arg(
                    Arg::new("width")
                        .long("width")
                        .short('w')
                        .value_parser(clap::value_parser!(u32))
                        .help("Truncate text output to this many characters (0 for no limit)"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report parse errors, exiting with status 1 when there are any")
                .arg(
                    Arg::new("path")
                        .help("Path to the filter file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available processing specs"))
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let verbose = matches.get_flag("verbose")
        || matches
            .subcommand()
            .is_some_and(|(_, sub)| sub.get_flag("verbose"));
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    match run(&matches) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<ExitCode, FilterError> {
    match matches.subcommand() {
        Some(("execute", execute_matches)) => {
            let mut loader = load_config(matches);
            if let Some(width) = execute_matches.get_one::<u32>("width") {
                loader = loader.set_override("output.max_width", i64::from(*width))?;
            }
            let config = loader.build()?;
            handle_execute_command(required(execute_matches, "path"), execute_matches, &config)
        }
        Some(("check", check_matches)) => {
            let config = load_config(matches).build()?;
            handle_check_command(required(check_matches, "path"), &config)
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(ExitCode::SUCCESS)
        }
        _ => Ok(ExitCode::FAILURE),
    }
}

fn load_config(matches: &ArgMatches) -> Loader {
    let path = matches
        .subcommand()
        .and_then(|(_, sub)| sub.get_one::<String>("config"))
        .or_else(|| matches.get_one::<String>("config"));
    match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    }
}

/// Value of an argument clap already enforces as required
fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_default()
}

/// Handle the execute command
fn handle_execute_command(
    path: &str,
    matches: &ArgMatches,
    config: &FilterConfig,
) -> Result<ExitCode, FilterError> {
    let format = matches
        .get_one::<String>("format")
        .unwrap_or(&config.output.format);
    let spec = ProcessingSpec::from_string(format)?;
    let options = RenderOptions::from(&config.output);
    let output = process_file(path, &spec, &options)?;
    println!("{}", output.trim_end());
    Ok(ExitCode::SUCCESS)
}

/// Handle the check command
fn handle_check_command(path: &str, config: &FilterConfig) -> Result<ExitCode, FilterError> {
    let reader = BufReader::new(File::open(path)?);
    let document = parse_reader(reader)?;

    let errors: Vec<_> = document.parse_errors().collect();
    for error in &errors {
        println!("{}", render_error(error, config.check.show_source));
    }
    log::info!(
        "{}: {} blocks ({} disabled), {} errors",
        path,
        document.blocks.len(),
        document.disabled_blocks().count(),
        errors.len()
    );

    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available processing specs:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
