//! Implementation of the `cppstarter new` command.
//!
//! Responsibility: read the arguments after `new`, call the core scaffold
//! service, and display the report. No business logic lives here.

use std::io;

use tracing::{debug, info, instrument};

use cppstarter_adapters::{EmbeddedStore, LocalFilesystem, SystemRunner};
use cppstarter_core::{
    application::{
        ScaffoldReport, ScaffoldService, StepKind, StepStatus,
        ports::{CommandRunner, Filesystem},
    },
    domain::ProjectSpec,
    error::ScaffoldError,
};

use crate::{
    cli::NewArgs,
    dispatch::{ExitOutcome, Session},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `cppstarter new` against the local disk.
pub fn execute(session: &Session, tokens: &[String]) -> ExitOutcome {
    execute_with(
        session,
        tokens,
        Box::new(LocalFilesystem::new()),
        Box::new(SystemRunner::new()),
    )
}

/// Execute with explicit filesystem and process adapters.
#[instrument(skip_all)]
pub fn execute_with(
    session: &Session,
    tokens: &[String],
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
) -> ExitOutcome {
    if NewArgs::is_help_request(tokens) {
        return ExitOutcome::with_message(0, NewArgs::help_text().trim_end());
    }

    match run(session, NewArgs::from_tokens(tokens), filesystem, runner) {
        Ok(outcome) => outcome,
        Err(e) => session.fail(&e),
    }
}

fn run(
    session: &Session,
    args: NewArgs,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
) -> CliResult<ExitOutcome> {
    let Some(name) = args.name else {
        return Err(CliError::MissingProjectName);
    };
    if !args.extra.is_empty() {
        debug!(ignored = ?args.extra, "Ignoring extra arguments");
    }
    let spec = ProjectSpec::new(name, args.init_git).map_err(ScaffoldError::from)?;

    let service = ScaffoldService::new(Box::new(EmbeddedStore::new()), filesystem, runner)
        .with_policy(session.config.generate.on_failure);

    let out = &session.output;
    shown(out.header(&format!("Creating project '{}'...", spec.name())));
    info!(project = %spec.name(), policy = ?service.policy(), "Scaffold started");
    let report = service.generate(&spec, &session.cwd)?;

    let failed = report.failures().count();
    shown(show_report(out, &report));
    if failed > 0 {
        return Ok(ExitOutcome::with_message(
            1,
            format!(
                "Error: project '{}' is incomplete; {failed} file(s) could not be written.",
                spec.name()
            ),
        ));
    }

    shown(show_next_steps(out, spec.name().as_str()));
    Ok(ExitOutcome::success())
}

/// Progress output never decides the exit code; the project on disk does.
fn shown(result: io::Result<()>) {
    if let Err(e) = result {
        debug!(error = %e, "Could not write progress output");
    }
}

/// Print one line per step that needs the user's attention.
fn show_report(out: &OutputManager, report: &ScaffoldReport) -> io::Result<()> {
    for step in report.steps() {
        match (&step.status, step.kind) {
            (StepStatus::Done, StepKind::Git) => out.info("Git repository initialized.")?,
            (StepStatus::Done, _) => {}
            (StepStatus::Warning(reason), StepKind::Git) => {
                out.warning(&format!("Warning: failed to initialize git repository: {reason}"))?
            }
            (StepStatus::Warning(reason), _) => out.warning(&format!("Warning: {reason}"))?,
            (StepStatus::Failed(reason), _) => out.error(&format!("Error: {reason}"))?,
        }
    }
    Ok(())
}

fn show_next_steps(out: &OutputManager, name: &str) -> io::Result<()> {
    out.success(&format!("Project '{name}' created successfully."))?;
    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {name}"))?;
    out.print("  cppstarter build")?;
    out.print("  cppstarter run")
}
