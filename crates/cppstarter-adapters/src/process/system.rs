//! Child process adapter using std::process.

use std::process::{Command, ExitStatus};

use cppstarter_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::Invocation,
    error::ScaffoldResult,
};
use tracing::debug;

/// Runs programs as real child processes.
///
/// The child inherits stdin, stdout and stderr and runs until it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> ScaffoldResult<i32> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }

        debug!(command = %invocation.display(), "Spawning");
        let status = cmd.status().map_err(|e| ApplicationError::SpawnFailed {
            command: invocation.display(),
            reason: e.to_string(),
        })?;

        let code = exit_code(status);
        debug!(code, "Child exited");
        Ok(code)
    }
}

/// Shell convention: a child killed by signal N reports 128 + N.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
