//! Terminal output.
//!
//! Progress lines go to stdout; warnings and errors go to stderr so that
//! they stay visible when stdout is redirected.

use std::io;

use console::Term;
use owo_colors::{AnsiColors, OwoColorize};

use crate::config::AppConfig;
use crate::error::CliError;

#[derive(Debug, Clone, Copy)]
enum Kind {
    Success,
    Info,
    Warning,
    Error,
    Header,
}

impl Kind {
    fn marker(self) -> Option<&'static str> {
        match self {
            Kind::Success => Some("\u{2713}"),
            Kind::Info => Some("\u{2139}"),
            Kind::Warning => Some("\u{26a0}"),
            Kind::Error => Some("\u{2717}"),
            Kind::Header => None,
        }
    }

    fn color(self) -> AnsiColors {
        match self {
            Kind::Success => AnsiColors::Green,
            Kind::Info => AnsiColors::Blue,
            Kind::Warning => AnsiColors::Yellow,
            Kind::Error => AnsiColors::Red,
            Kind::Header => AnsiColors::Cyan,
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Kind::Warning | Kind::Error)
    }
}

pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    verbose: bool,
    out: Term,
    err: Term,
}

impl OutputManager {
    pub fn new(config: &AppConfig) -> Self {
        let out = Term::stdout();
        let no_color = config.output.no_color
            || std::env::var_os("NO_COLOR").is_some()
            || !out.is_term();
        Self {
            quiet: config.output.quiet,
            no_color,
            verbose: crate::logging::is_verbose(config),
            out,
            err: Term::stderr(),
        }
    }

    /// Replace stdout, e.g. with a writer that always fails.
    #[cfg(all(test, unix))]
    pub(crate) fn with_stdout(mut self, out: Term) -> Self {
        self.out = out;
        self
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(Kind::Success, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(Kind::Info, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(Kind::Warning, msg)
    }

    /// Written even in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.emit(Kind::Error, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(Kind::Header, text)
    }

    /// Plain stdout line with no marker or color.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out.write_line(msg)
    }

    /// Render `err` the way it should appear on stderr.
    pub fn render_error(&self, err: &CliError) -> String {
        if self.no_color || !self.err.is_term() {
            err.format_plain(self.verbose)
        } else {
            err.format_colored(self.verbose)
        }
    }

    fn emit(&self, kind: Kind, msg: &str) -> io::Result<()> {
        if self.quiet && !matches!(kind, Kind::Error) {
            return Ok(());
        }
        let line = self.styled(kind, msg);
        if kind.to_stderr() {
            self.err.write_line(&line)
        } else {
            self.out.write_line(&line)
        }
    }

    fn styled(&self, kind: Kind, msg: &str) -> String {
        match (kind.marker(), self.no_color) {
            (Some(marker), true) => format!("{marker} {msg}"),
            (None, true) => msg.to_owned(),
            (Some(marker), false) => format!(
                "{} {}",
                marker.color(kind.color()).bold(),
                msg.color(kind.color())
            ),
            (None, false) => msg.color(kind.color()).bold().to_string(),
        }
    }
}
