use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;

use tracefmt::cli::{Cli, ColorMode};
use tracefmt::config::Config;
use tracefmt::error::TracefmtError;
use tracefmt::formatter::{LineFormatter, Outcome};
use tracefmt::logging;
use tracefmt::source::{Input, LineReader};
use tracefmt::terminal;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so `tracefmt big.log | head` ends
    // quietly instead of reporting a write error.
    reset_sigpipe();

    let cli = Cli::parse();
    logging::init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(TracefmtError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tracefmt: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), TracefmtError> {
    let config = Config::from_cli(cli)?;
    let use_color = resolve_color_mode(config.color_mode);
    let width = terminal::resolve_width(config.width);
    tracing::debug!(width, use_color, "layout resolved");

    let mut formatter = LineFormatter::new(&config, width, use_color);

    // Stdout is line buffered: every rendered line is written out before the
    // next one is read, which keeps `tail -f | tracefmt` live.
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let mut line_buf = String::new();

    for input in Input::from_args(&cli.files) {
        let mut lines = LineReader::new(input.open()?);
        while let Some(line) = lines.next_line()? {
            line_buf.clear();
            match formatter.format_line(line.text(), &mut line_buf) {
                Outcome::Rendered => writeln!(writer, "{line_buf}")?,
                // Foreign lines go out byte for byte, invalid UTF-8 included.
                Outcome::Passthrough(tail) => {
                    writer.write_all(line.raw_suffix(tail))?;
                    writer.write_all(b"\n")?;
                }
                Outcome::Filtered => {}
            }
        }
        tracing::debug!(
            input = %input.name().display(),
            first = ?formatter.session().first(),
            last = ?formatter.session().last(),
            "input exhausted"
        );
    }

    writer.flush()?;
    Ok(())
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                return true;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a filter that is routinely piped into `head` or a pager, dying on
/// the signal is the expected behavior.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
