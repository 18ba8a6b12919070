//! Top-level command routing.
//!
//! The first argument is matched exactly against a fixed [`CommandTable`];
//! there is no abbreviation or fuzzy matching. Every path ends in an
//! [`ExitOutcome`], which is the only thing `main` turns into process output.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{debug, instrument};

use cppstarter_core::domain::BuildTarget;

use crate::{commands, config::AppConfig, error::CliError, output::OutputManager};

/// What a command token does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    New,
    Passthrough(BuildTarget),
    MinimalPrompt,
    Help,
    Version,
}

/// One row of the command table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub token: &'static str,
    pub action: Action,
    /// Arguments shown after the token in usage text.
    pub synopsis: &'static str,
    pub summary: &'static str,
}

/// Immutable mapping from command token to action, in usage order.
#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    /// The commands this binary understands.
    pub fn standard() -> Self {
        let mut entries = vec![CommandEntry {
            token: "new",
            action: Action::New,
            synopsis: "<ProjectName> [--init-git]",
            summary: "Create a new C++ project",
        }];

        entries.extend(BuildTarget::ALL.into_iter().map(|target| CommandEntry {
            token: target.command(),
            action: Action::Passthrough(target),
            synopsis: "",
            summary: target.description(),
        }));

        entries.extend([
            CommandEntry {
                token: "min",
                action: Action::MinimalPrompt,
                synopsis: "",
                summary: "Create a minimal prompt script (min.sh)",
            },
            CommandEntry {
                token: "--help",
                action: Action::Help,
                synopsis: "",
                summary: "Show this help message",
            },
            CommandEntry {
                token: "--version",
                action: Action::Version,
                synopsis: "",
                summary: "Show version",
            },
        ]);

        Self { entries }
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Exact-match lookup.
    pub fn lookup(&self, token: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.token == token)
    }

    /// Usage text with `program` as the invoked name.
    pub fn usage(&self, program: &str) -> String {
        let rows: Vec<(String, &str)> = self
            .entries()
            .iter()
            .map(|e| {
                let head = if e.synopsis.is_empty() {
                    format!("{program} {}", e.token)
                } else {
                    format!("{program} {} {}", e.token, e.synopsis)
                };
                (head, e.summary)
            })
            .collect();
        let width = rows.iter().map(|(head, _)| head.len()).max().unwrap_or(0);

        let mut text = String::from("Usage:");
        for (head, summary) in rows {
            text.push_str(&format!("\n  {head:<width$}    {summary}"));
        }
        text
    }
}

/// Final result of one invocation.
///
/// `message` goes to stdout when `code` is 0 and to stderr otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitOutcome {
    pub code: i32,
    pub message: Option<String>,
}

impl ExitOutcome {
    pub fn success() -> Self {
        Self {
            code: 0,
            message: None,
        }
    }

    pub fn with_message(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
        }
    }

    /// Exit status as the OS sees it. Codes outside `0..=255` become 1.
    pub fn status(&self) -> u8 {
        u8::try_from(self.code).unwrap_or(1)
    }

    /// Print the message to the right stream and return the exit code.
    pub fn emit(self) -> ExitCode {
        if let Some(message) = &self.message {
            if self.code == 0 {
                println!("{message}");
            } else {
                eprintln!("{message}");
            }
        }
        ExitCode::from(self.status())
    }
}

/// Everything a command handler may read.
pub struct Session {
    pub config: AppConfig,
    pub output: OutputManager,
    /// Directory new projects and `min.sh` are created in, and where the
    /// build tool runs.
    pub cwd: PathBuf,
}

impl Session {
    /// Turn a handler error into an exit-1 outcome.
    pub fn fail(&self, err: &CliError) -> ExitOutcome {
        err.log();
        ExitOutcome::with_message(err.exit_code(), self.output.render_error(err))
    }
}

/// Route `args` (without the program name) to a command.
#[instrument(skip_all, fields(command = args.first().map(String::as_str).unwrap_or("")))]
pub fn dispatch(
    table: &CommandTable,
    session: &Session,
    program: &str,
    args: &[String],
) -> ExitOutcome {
    let Some((token, rest)) = args.split_first() else {
        debug!("No command given");
        return ExitOutcome::with_message(1, table.usage(program));
    };

    let Some(entry) = table.lookup(token) else {
        let err = CliError::UnknownCommand {
            token: token.clone(),
        };
        let outcome = session.fail(&err);
        let message = format!(
            "{}\n{}",
            outcome.message.unwrap_or_default(),
            table.usage(program)
        );
        return ExitOutcome::with_message(outcome.code, message);
    };

    debug!(action = ?entry.action, "Dispatching");
    match entry.action {
        Action::New => commands::new::execute(session, rest),
        Action::Passthrough(target) => commands::build::execute(session, target),
        Action::MinimalPrompt => commands::prompt::execute(session),
        Action::Help => ExitOutcome::with_message(0, table.usage(program)),
        Action::Version => ExitOutcome::with_message(0, version_text()),
    }
}

pub fn version_text() -> String {
    format!("cppstarter version v{}", cppstarter_core::VERSION)
}
