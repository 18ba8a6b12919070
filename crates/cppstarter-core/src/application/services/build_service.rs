//! Build Service - forwards fixed targets to the external build tool.
//!
//! The service holds no logic of its own beyond choosing the argument vector;
//! the child inherits stdio and its exit code is handed back unchanged.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::CommandRunner,
    domain::{BuildTarget, Invocation},
    error::ScaffoldResult,
};

/// Build tool used when none is configured.
pub const DEFAULT_BUILD_TOOL: &str = "make";

/// Service for the build/run/test passthrough commands.
pub struct BuildService {
    runner: Box<dyn CommandRunner>,
    tool: String,
    workdir: Option<PathBuf>,
}

impl BuildService {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self {
            runner,
            tool: DEFAULT_BUILD_TOOL.to_string(),
            workdir: None,
        }
    }

    /// Use a different build tool executable.
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Run the tool in `dir` instead of the inherited working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// The exact invocation used for `target`.
    pub fn invocation(&self, target: BuildTarget) -> Invocation {
        let mut invocation = Invocation::new(&self.tool);
        if let Some(name) = target.make_target() {
            invocation = invocation.arg(name);
        }
        if let Some(dir) = &self.workdir {
            invocation = invocation.current_dir(dir);
        }
        invocation
    }

    /// Run `target` and return the child's exit code.
    ///
    /// `Err` only when the tool could not be started.
    #[instrument(skip(self), fields(tool = %self.tool))]
    pub fn invoke(&self, target: BuildTarget) -> ScaffoldResult<i32> {
        let invocation = self.invocation(target);
        info!(command = %invocation.display(), "Running build tool");

        let code = self.runner.run(&invocation)?;
        if code != 0 {
            warn!(code, "Build tool exited with a non-zero status");
        }
        Ok(code)
    }
}
