//! `cppstarter min`: write the minimal prompt script.

use tracing::instrument;

use cppstarter_adapters::{EmbeddedStore, LocalFilesystem};
use cppstarter_core::application::{PromptService, ports::Filesystem};

use crate::{
    dispatch::{ExitOutcome, Session},
    error::CliResult,
};

pub fn execute(session: &Session) -> ExitOutcome {
    execute_with(session, Box::new(LocalFilesystem::new()))
}

#[instrument(skip_all)]
pub fn execute_with(session: &Session, filesystem: Box<dyn Filesystem>) -> ExitOutcome {
    match run(session, filesystem) {
        Ok(outcome) => outcome,
        Err(e) => session.fail(&e),
    }
}

fn run(session: &Session, filesystem: Box<dyn Filesystem>) -> CliResult<ExitOutcome> {
    let service = PromptService::new(Box::new(EmbeddedStore::new()), filesystem);
    let path = service.write_minimal_prompt(&session.cwd)?;
    tracing::info!(path = %path.display(), "Prompt script written");

    let out = &session.output;
    out.success("Script 'min.sh' created. To activate the reduced prompt, run:")?;
    out.print("    source ./min.sh")?;
    Ok(ExitOutcome::success())
}
