//! Build passthrough: `build`, `run`, `run-release`, `test`, `valgrind`,
//! `clean`.

use tracing::instrument;

use cppstarter_adapters::SystemRunner;
use cppstarter_core::{
    application::{BuildService, ports::CommandRunner},
    domain::BuildTarget,
};

use crate::{
    dispatch::{ExitOutcome, Session},
    error::CliError,
};

/// Exit status reported when the build tool itself cannot be started.
pub const TOOL_NOT_FOUND: i32 = 127;

pub fn execute(session: &Session, target: BuildTarget) -> ExitOutcome {
    execute_with(session, target, Box::new(SystemRunner::new()))
}

/// Run `target` with the configured tool and relay its exit code.
#[instrument(skip(session, runner))]
pub fn execute_with(
    session: &Session,
    target: BuildTarget,
    runner: Box<dyn CommandRunner>,
) -> ExitOutcome {
    let service = BuildService::new(runner)
        .with_tool(&session.config.build.tool)
        .in_dir(&session.cwd);

    let banner = format!("Running {} via {}...", target.description(), service.tool());
    if let Err(e) = session.output.info(&banner) {
        return session.fail(&CliError::from(e));
    }

    match service.invoke(target) {
        Ok(0) => ExitOutcome::success(),
        Ok(code) => ExitOutcome::with_message(code, format!("Execution failed with code: {code}")),
        Err(e) => ExitOutcome {
            code: TOOL_NOT_FOUND,
            ..session.fail(&CliError::from(e))
        },
    }
}
