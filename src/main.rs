mod app;
mod command;
mod config;
mod consts;
mod game;
mod logo;
mod util;
use crate::app::App;
use crate::config::{Config, LogConfig};
use crate::game::{Game, Params};
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use lexopt::{Arg, Parser};
use simplelog::{ConfigBuilder, WriteLogger};
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match Arguments::from_parser(Parser::from_env()) {
        Ok(Arguments::Run { config, log_file }) => match run(config, log_file) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("cherrysnake: {e:?}");
                ExitCode::FAILURE
            }
        },
        Ok(Arguments::Help) => {
            println!("Usage: cherrysnake [-c|--config <file>] [--log-file <file>]");
            println!();
            println!("Play snake in the terminal.  Eat the cherries, avoid the walls.");
            println!();
            println!("Options:");
            println!("  -c, --config <file>    Read configuration from the given file");
            println!("      --log-file <file>  Write log messages to the given file");
            println!("  -h, --help             Show this help message and exit");
            println!("  -V, --version          Show the program version and exit");
            ExitCode::SUCCESS
        }
        Ok(Arguments::Version) => {
            println!("cherrysnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("cherrysnake: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<PathBuf>, log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(ref path) => Config::load(path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;
    let mut logging = config.logging.clone();
    if log_file.is_some() {
        logging.file = log_file;
    }
    init_logging(&logging)?;
    log::info!("Starting cherrysnake {}", env!("CARGO_PKG_VERSION"));
    match config_path {
        Some(path) => log::info!("Configuration read from {}", path.display()),
        None => log::debug!("Using default configuration location"),
    }

    let terminal = ratatui::init();
    let focus = if config.game.pause_on_focus_lost {
        FocusReporting::enable(io::stdout())
            .inspect_err(|e| log::warn!("Could not enable focus change reporting: {e}"))
            .ok()
    } else {
        None
    };
    let r = App::new(Game::new(Params::default()), config.game).run(terminal);
    drop(focus);
    ratatui::restore();
    r.context("terminal I/O failed")
}

fn init_logging(logging: &LogConfig) -> anyhow::Result<()> {
    let Some(ref path) = logging.file else {
        return Ok(());
    };
    let file = fs_err::File::create(path)?;
    let cfg = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(logging.level, cfg, file).context("failed to initialize logger")?;
    Ok(())
}

/// Keeps the terminal reporting focus changes for as long as it lives
#[derive(Debug)]
struct FocusReporting<W: Write> {
    writer: W,
}

impl<W: Write> FocusReporting<W> {
    fn enable(mut writer: W) -> io::Result<FocusReporting<W>> {
        execute!(writer, EnableFocusChange)?;
        Ok(FocusReporting { writer })
    }
}

impl<W: Write> Drop for FocusReporting<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.writer, DisableFocusChange) {
            log::warn!("Could not disable focus change reporting: {e}");
        }
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
    })
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Arguments {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Arguments {
    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run { config, log_file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Arguments, lexopt::Error> {
        Arguments::from_parser(Parser::from_iter(
            std::iter::once("cherrysnake").chain(args.iter().copied()),
        ))
    }

    #[rstest]
    #[case(&[], None, None)]
    #[case(&["-c", "snake.toml"], Some("snake.toml"), None)]
    #[case(&["--config=snake.toml"], Some("snake.toml"), None)]
    #[case(&["--log-file", "out.log"], None, Some("out.log"))]
    #[case(&["--log-file", "out.log", "--config", "a.toml"], Some("a.toml"), Some("out.log"))]
    fn test_run_args(
        #[case] args: &[&str],
        #[case] config: Option<&str>,
        #[case] log_file: Option<&str>,
    ) {
        assert_eq!(
            parse(args).unwrap(),
            Arguments::Run {
                config: config.map(PathBuf::from),
                log_file: log_file.map(PathBuf::from),
            }
        );
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse(&["--help"]).unwrap(), Arguments::Help);
        assert_eq!(parse(&["-V"]).unwrap(), Arguments::Version);
    }

    #[test]
    fn bad_args() {
        assert!(parse(&["--speed", "3"]).is_err());
        assert!(parse(&["extra"]).is_err());
        assert!(parse(&["--config"]).is_err());
    }

    #[test]
    fn focus_reporting_is_switched_off_on_drop() {
        let mut out = Vec::new();
        {
            let _focus = FocusReporting::enable(&mut out).unwrap();
        }
        assert_eq!(out, b"\x1B[?1004h\x1B[?1004l");
    }

    #[test]
    fn no_log_file_means_no_logger() {
        assert!(init_logging(&LogConfig::default()).is_ok());
    }
}
