//! Logger setup. User-facing output goes through `log::info!`, so the
//! format keeps info lines bare and only decorates diagnostics.
//!
//! Info and debug records go to stdout; warnings and errors go to stderr so
//! machine-readable stdout is never interleaved with diagnostics.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream;

use crate::error::CliError;

/// Environment variable that refines the level filter (env_logger syntax).
const LOG_ENV: &str = "ARMDEX_LOG";

type LogFile = Arc<Mutex<strip_ansi_escapes::Writer<File>>>;

/// Writes to one console stream and copies everything into an optional log
/// file, with ANSI escapes stripped from the file copy.
struct TeeWriter {
    stream: Stream,
    file: Option<LogFile>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.stream {
            Stream::Stderr => io::stderr().write_all(buf)?,
            _ => io::stdout().write_all(buf)?,
        }
        if let Some(file) = &self.file {
            let mut file = file
                .lock()
                .map_err(|_| io::Error::other("log file lock poisoned"))?;
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.stream {
            Stream::Stderr => io::stderr().flush()?,
            _ => io::stdout().flush()?,
        }
        if let Some(file) = &self.file {
            let mut file = file
                .lock()
                .map_err(|_| io::Error::other("log file lock poisoned"))?;
            file.flush()?;
        }
        Ok(())
    }
}

/// Dispatches records to the stdout or stderr logger by level.
struct SplitLogger {
    out: env_logger::Logger,
    err: env_logger::Logger,
}

impl SplitLogger {
    fn route(&self, level: Level) -> &env_logger::Logger {
        if goes_to_stderr(level) {
            &self.err
        } else {
            &self.out
        }
    }
}

impl Log for SplitLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.route(metadata.level()).enabled(metadata)
    }

    fn log(&self, record: &Record) {
        self.route(record.level()).log(record);
    }

    fn flush(&self) {
        self.out.flush();
        self.err.flush();
    }
}

pub(crate) fn goes_to_stderr(level: Level) -> bool {
    level <= Level::Warn
}

pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

fn build_logger(level: LevelFilter, stream: Stream, file: Option<LogFile>) -> env_logger::Logger {
    let timestamps = level >= LevelFilter::Debug;

    env_logger::Builder::new()
        .filter_level(level)
        .parse_env(LOG_ENV)
        .format(move |buf, record| {
            let stamp = if timestamps {
                format!("{} ", chrono::Local::now().format("%H:%M:%S%.3f"))
            } else {
                String::new()
            };
            match record.level() {
                Level::Info => writeln!(buf, "{}{}", stamp, record.args()),
                Level::Warn => writeln!(
                    buf,
                    "{}{} {}",
                    stamp,
                    "warning:".if_supports_color(stream, |t| t.yellow()),
                    record.args()
                ),
                Level::Error => writeln!(
                    buf,
                    "{}{} {}",
                    stamp,
                    "error:".if_supports_color(stream, |t| t.red()),
                    record.args()
                ),
                Level::Debug | Level::Trace => writeln!(
                    buf,
                    "{}{} {}",
                    stamp,
                    format!("[{}]", record.target()).if_supports_color(stream, |t| t.dimmed()),
                    record.args()
                ),
            }
        })
        .target(env_logger::Target::Pipe(Box::new(TeeWriter { stream, file })))
        .build()
}

pub(crate) fn init(level: LevelFilter, logfile: Option<&Path>) -> Result<(), CliError> {
    let file: Option<LogFile> = match logfile {
        Some(path) => Some(Arc::new(Mutex::new(strip_ansi_escapes::Writer::new(
            File::create(path)?,
        )))),
        None => None,
    };

    let out = build_logger(level, Stream::Stdout, file.clone());
    let err = build_logger(level, Stream::Stderr, file);
    let max_level = out.filter().max(err.filter());

    log::set_boxed_logger(Box::new(SplitLogger { out, err }))
        .map_err(|e| CliError::logging(e.to_string()))?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(level_for(true, true), LevelFilter::Debug);
        assert_eq!(level_for(true, false), LevelFilter::Warn);
        assert_eq!(level_for(false, false), LevelFilter::Info);
    }

    #[test]
    fn diagnostics_are_routed_to_stderr() {
        assert!(goes_to_stderr(Level::Error));
        assert!(goes_to_stderr(Level::Warn));
        assert!(!goes_to_stderr(Level::Info));
        assert!(!goes_to_stderr(Level::Debug));
    }

    #[test]
    fn split_logger_routes_by_level() {
        let logger = SplitLogger {
            out: build_logger(LevelFilter::Info, Stream::Stdout, None),
            err: build_logger(LevelFilter::Warn, Stream::Stderr, None),
        };
        assert!(std::ptr::eq(logger.route(Level::Error), &logger.err));
        assert!(std::ptr::eq(logger.route(Level::Info), &logger.out));
    }

    #[test]
    fn both_streams_share_the_stripped_log_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let file: LogFile = Arc::new(Mutex::new(strip_ansi_escapes::Writer::new(
            tmp.reopen().unwrap(),
        )));
        {
            let mut out = TeeWriter {
                stream: Stream::Stdout,
                file: Some(file.clone()),
            };
            let mut err = TeeWriter {
                stream: Stream::Stderr,
                file: Some(file.clone()),
            };
            out.write_all(b"Zoom [Comm]\n").unwrap();
            err.write_all(b"\x1b[33mwarning:\x1b[0m slug collision\n").unwrap();
            out.flush().unwrap();
            err.flush().unwrap();
        }
        drop(file);
        let written = std::fs::read_to_string(tmp.path()).unwrap();
        assert_eq!(written, "Zoom [Comm]\nwarning: slug collision\n");
    }
}
