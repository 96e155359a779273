use crate::cfg::HjConfig;
use crate::driver::{CompileOptions, Driver};
use crate::output;
use crate::pathlib::FilePath;

use clap::AppSettings;
use colored::{Color, ColoredString, Colorize};
use log::Level;
use std::io;
use structopt::StructOpt;

mod compile;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "hj",
    about = "Compiler front end for the hj language",
    global_settings = &[AppSettings::ColoredHelp, AppSettings::ArgRequiredElseHelp]
)]
pub struct Cli {
    #[structopt(
        name = "root-path",
        long = "root-path",
        env = "HJ_PATH",
        help = "root path for hj configuration",
        long_help = "If not provided, it will default to `$HOME/.hj`. If that path is inaccessible, then /opt/hj will be used."
    )]
    root_path: Option<FilePath>,

    #[structopt(
        long,
        env = "HJ_LOG_LEVEL",
        help = "Sets the log level",
        possible_values = &["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: Option<log::LevelFilter>,

    #[structopt(flatten)]
    options: CompileOptions,
}

fn get_root_path(root_path: Option<FilePath>) -> FilePath {
    if let Some(p) = root_path {
        return p;
    }

    match home::home_dir() {
        Some(h) => FilePath::from(h) / ".hj",
        None => FilePath::from("/opt/hj"),
    }
}

fn setup_logging(level: log::LevelFilter) {
    let res = fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = record.level();
            let color = match level {
                Level::Error => Color::Red,
                Level::Warn => Color::Yellow,
                Level::Info => Color::Blue,
                Level::Debug => Color::Magenta,
                Level::Trace => Color::Green,
            };
            out.finish(format_args!(
                "{} {}",
                ColoredString::from((level.to_string().to_lowercase() + ":").as_str())
                    .color(color)
                    .to_string(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply();

    if let Err(err) = res {
        output::print_error(&format!("could not set up logging: {}", err));
    }
}

pub fn run() {
    let cli: Cli = Cli::from_args();
    let root_path = get_root_path(cli.root_path);

    // the config decides about colors and the log level, so it is read
    // before logging exists and its errors are printed after setup
    let (config, config_err) = match HjConfig::load(&root_path) {
        Ok(c) => (c, None),
        Err(err) => (HjConfig::default(), Some(err)),
    };

    if config.color == Some(false) {
        colored::control::set_override(false);
    }

    let (config_level, level_err) = match config.log_level() {
        Ok(l) => (l, None),
        Err(err) => (None, Some(err)),
    };
    let level = cli
        .log_level
        .or(config_level)
        .unwrap_or(log::LevelFilter::Info);
    setup_logging(level);

    let mut driver = Driver::new(root_path);
    let config_errs = config_err.into_iter().chain(level_err).collect::<Vec<_>>();
    if !config_errs.is_empty() {
        driver.emit_errors(config_errs, None);
        std::process::exit(1);
    }

    let mut options = cli.options;
    options.debug |= config.debug;
    compile::action(&mut driver, options);

    if driver.errors_emitted != 0 {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod cli_tests {
    use super::{get_root_path, Cli};
    use crate::pathlib::FilePath;
    use structopt::StructOpt;

    #[test]
    fn parses_flags() {
        let cli = Cli::from_iter_safe(&["hj", "-d", "-o", "out", "main.hj", "--log-level", "debug"]).unwrap();
        assert!(cli.options.debug);
        assert_eq!(cli.options.output_path, Some(FilePath::from("out")));
        assert_eq!(cli.options.input_path, FilePath::from("main.hj"));
        assert_eq!(cli.log_level, Some(log::LevelFilter::Debug));
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::from_iter_safe(&["hj", "-d"]).is_err());

        // no arguments at all prints the help
        let err = Cli::from_iter_safe(&["hj"]).unwrap_err();
        assert_eq!(err.kind, clap::ErrorKind::MissingArgumentOrSubcommand);
    }

    #[test]
    fn explicit_root_path_wins() {
        assert_eq!(
            get_root_path(Some(FilePath::from("/tmp/hj"))),
            FilePath::from("/tmp/hj")
        );
    }
}
