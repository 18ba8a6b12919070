//! Value objects for the build passthrough and subprocess invocation.

use std::fmt;
use std::path::PathBuf;

/// A fixed target of the generated Makefile that the CLI can forward to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildTarget {
    /// Default target (`all`, the debug binary).
    Build,
    Run,
    RunRelease,
    Test,
    /// Valgrind leak check of the debug binary.
    MemCheck,
    Clean,
}

impl BuildTarget {
    pub const ALL: [BuildTarget; 6] = [
        BuildTarget::Build,
        BuildTarget::Run,
        BuildTarget::RunRelease,
        BuildTarget::Test,
        BuildTarget::MemCheck,
        BuildTarget::Clean,
    ];

    /// Target name passed to the build tool. `None` means the tool's
    /// default target.
    pub const fn make_target(self) -> Option<&'static str> {
        match self {
            Self::Build => None,
            Self::Run => Some("run"),
            Self::RunRelease => Some("run-release"),
            Self::Test => Some("test"),
            Self::MemCheck => Some("valgrind"),
            Self::Clean => Some("clean"),
        }
    }

    /// Command-line token that selects this target.
    pub const fn command(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Run => "run",
            Self::RunRelease => "run-release",
            Self::Test => "test",
            Self::MemCheck => "valgrind",
            Self::Clean => "clean",
        }
    }

    /// One-line summary for usage text.
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Build => "Build the debug binary",
            Self::Run => "Run debug build",
            Self::RunRelease => "Run release build",
            Self::Test => "Build and run the tests",
            Self::MemCheck => "Run the debug binary under valgrind",
            Self::Clean => "Remove build artifacts",
        }
    }

    /// Human description printed before the tool runs.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Build => "debug build",
            Self::Run => "debug run",
            Self::RunRelease => "release run",
            Self::Test => "tests",
            Self::MemCheck => "memory check",
            Self::Clean => "clean",
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.make_target().unwrap_or("all"))
    }
}

/// A subprocess to spawn: program plus argument vector, never a shell string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; `None` inherits the caller's.
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Command line for logs and messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_uses_default_target() {
        assert_eq!(BuildTarget::Build.make_target(), None);
        assert_eq!(BuildTarget::Build.to_string(), "all");
    }

    #[test]
    fn mem_check_maps_to_valgrind() {
        assert_eq!(BuildTarget::MemCheck.make_target(), Some("valgrind"));
    }

    #[test]
    fn run_release_keeps_hyphen() {
        assert_eq!(BuildTarget::RunRelease.make_target(), Some("run-release"));
    }

    #[test]
    fn command_tokens_match_cli_names() {
        let tokens: Vec<_> = BuildTarget::ALL.iter().map(|t| t.command()).collect();
        assert_eq!(
            tokens,
            ["build", "run", "run-release", "test", "valgrind", "clean"]
        );
    }

    #[test]
    fn invocation_builder_keeps_argument_boundaries() {
        let inv = Invocation::new("git").arg("init").current_dir("my project");
        assert_eq!(inv.args, vec!["init".to_string()]);
        assert_eq!(inv.cwd, Some(PathBuf::from("my project")));
        assert_eq!(inv.display(), "git init");
    }
}
