//! Command-line argument handling.
//!
//! Top-level routing is an exact-match table (see `dispatch`). The tokens
//! after `new` are read by position: the first is the project name, and
//! `--init-git` only counts as the second token. clap describes `new` so
//! that `new --help` prints proper help text.

use std::ffi::OsString;

use clap::{CommandFactory, Parser};

use crate::error::{CliError, CliResult};

/// The only flag `new` understands, and only directly after the name.
pub const INIT_GIT_FLAG: &str = "--init-git";

const HELP_FLAG: &str = "--help";

/// Arguments for `cppstarter new`.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "new",
    bin_name = "cppstarter new",
    about = "Create a new C++ project",
    disable_version_flag = true,
    after_help = "EXAMPLES:\n\
        \x20 cppstarter new Demo\n\
        \x20 cppstarter new Demo --init-git"
)]
pub struct NewArgs {
    /// Directory to create in the current working directory.
    #[arg(
        value_name = "ProjectName",
        help = "Name of the project to create",
        allow_hyphen_values = true
    )]
    pub name: Option<String>,

    /// Initialise a git repository inside the new project.
    #[arg(long = "init-git", help = "Run 'git init' inside the new project")]
    pub init_git: bool,

    /// Tokens after the name that are not the git flag. Ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub extra: Vec<String>,
}

impl NewArgs {
    /// Read the tokens that follow `new`. Never fails: a missing name is
    /// reported by the caller, and unknown tokens are kept in `extra`.
    pub fn from_tokens(tokens: &[String]) -> Self {
        let name = tokens.first().cloned();
        let rest = tokens.get(1..).unwrap_or_default();
        let init_git = rest.first().map(String::as_str) == Some(INIT_GIT_FLAG);
        let extra = rest[usize::from(init_git)..].to_vec();
        Self {
            name,
            init_git,
            extra,
        }
    }

    /// `new --help` asks for help instead of naming a project.
    pub fn is_help_request(tokens: &[String]) -> bool {
        tokens.first().map(String::as_str) == Some(HELP_FLAG)
    }

    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}

/// Convert raw process arguments, refusing any that are not UTF-8.
pub fn utf8_args<I>(args: I) -> CliResult<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|raw| CliError::InvalidArguments {
                message: format!(
                    "Argument '{}' is not valid UTF-8.",
                    raw.to_string_lossy()
                ),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(tokens: &[&str]) -> NewArgs {
        let owned: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        NewArgs::from_tokens(&owned)
    }

    #[test]
    fn new_args_structure_is_valid() {
        NewArgs::command().debug_assert();
    }

    #[test]
    fn name_only() {
        let args = read(&["Demo"]);
        assert_eq!(args.name.as_deref(), Some("Demo"));
        assert!(!args.init_git);
        assert!(args.extra.is_empty());
    }

    #[test]
    fn init_git_directly_after_name() {
        assert!(read(&["Demo", "--init-git"]).init_git);
    }

    #[test]
    fn any_other_second_token_leaves_git_off() {
        for other in ["somethingElse", "--force", "-x"] {
            let args = read(&["Demo", other]);
            assert_eq!(args.name.as_deref(), Some("Demo"));
            assert!(!args.init_git, "{other} must not enable git");
            assert_eq!(args.extra, [other]);
        }
    }

    #[test]
    fn init_git_after_an_extra_token_is_ignored() {
        assert!(!read(&["Demo", "other", "--init-git"]).init_git);
    }

    #[test]
    fn repeated_flag_still_enables_git() {
        let args = read(&["Demo", "--init-git", "--init-git"]);
        assert!(args.init_git);
        assert_eq!(args.extra, ["--init-git"]);
    }

    #[test]
    fn leading_flag_is_the_project_name() {
        let args = read(&["--init-git", "Foo"]);
        assert_eq!(args.name.as_deref(), Some("--init-git"));
        assert!(!args.init_git);
    }

    #[test]
    fn dash_prefixed_name_is_accepted() {
        assert_eq!(read(&["-dash"]).name.as_deref(), Some("-dash"));
    }

    #[test]
    fn missing_name_reads_as_none() {
        assert_eq!(read(&[]).name, None);
    }

    #[test]
    fn empty_name_is_kept_for_domain_validation() {
        assert_eq!(read(&[""]).name.as_deref(), Some(""));
    }

    #[test]
    fn help_is_only_recognised_first() {
        assert!(NewArgs::is_help_request(&["--help".to_string()]));
        assert!(!NewArgs::is_help_request(&[
            "Demo".to_string(),
            "--help".to_string()
        ]));
        assert!(NewArgs::help_text().contains("--init-git"));
    }

    #[test]
    fn utf8_arguments_pass_through() {
        let args = utf8_args(["new".into(), "Demo".into()]).unwrap();
        assert_eq!(args, ["new", "Demo"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_rejected() {
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(b"De\xffmo".to_vec());
        let err = utf8_args(["new".into(), bad]).unwrap_err();
        assert!(matches!(err, CliError::InvalidArguments { .. }));
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
