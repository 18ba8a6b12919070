//! Recording runner for tests.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use cppstarter_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::Invocation,
    error::ScaffoldResult,
};

/// A runner that never spawns anything.
///
/// Every invocation is recorded. Exit codes are taken from a queue filled
/// with [`ScriptedRunner::then_exit`]; once the queue is empty each call
/// exits with 0. [`ScriptedRunner::unavailable`] builds a runner whose
/// program can never be started.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    inner: Arc<Mutex<ScriptedInner>>,
}

#[derive(Debug, Default)]
struct ScriptedInner {
    calls: Vec<Invocation>,
    codes: VecDeque<i32>,
    unavailable: bool,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the program were not installed.
    pub fn unavailable() -> Self {
        let runner = Self::default();
        if let Ok(mut inner) = runner.inner.lock() {
            inner.unavailable = true;
        }
        runner
    }

    /// Queue the exit code for the next call.
    pub fn then_exit(self, code: i32) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.codes.push_back(code);
        }
        self
    }

    /// Invocations seen so far, in order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.inner
            .lock()
            .map(|inner| inner.calls.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> ScaffoldResult<i32> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.calls.push(invocation.clone());

        if inner.unavailable {
            return Err(ApplicationError::SpawnFailed {
                command: invocation.display(),
                reason: "No such file or directory".into(),
            }
            .into());
        }

        Ok(inner.codes.pop_front().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_consumed_in_order() {
        let runner = ScriptedRunner::new().then_exit(2).then_exit(3);
        let inv = Invocation::new("make");
        assert_eq!(runner.run(&inv).unwrap(), 2);
        assert_eq!(runner.run(&inv).unwrap(), 3);
        assert_eq!(runner.run(&inv).unwrap(), 0);
        assert_eq!(runner.calls().len(), 3);
    }

    #[test]
    fn unavailable_records_and_fails() {
        let runner = ScriptedRunner::unavailable();
        assert!(runner.run(&Invocation::new("git").arg("init")).is_err());
        assert_eq!(runner.calls()[0].display(), "git init");
    }
}
