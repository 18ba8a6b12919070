//! Template domain model.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TemplateId (Value Object)                                  │
//! │  └── Stable key + relative output path of one file          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Template (Entity)                                          │
//! │  └── TemplateId + raw source with {{PLACEHOLDERS}}          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{PROJECT_NAME}} -> "MyApp"     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Template *content* never lives in this crate. A [`TemplateStore`] adapter
//! supplies it, so the scaffold logic only knows keys and output paths.
//!
//! [`TemplateStore`]: crate::application::ports::TemplateStore

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{entities::project_spec::ProjectName, error::DomainError};

/// Placeholder key for the project name.
pub const PROJECT_NAME: &str = "PROJECT_NAME";

/// Directories created under the project root, in creation order.
pub const SCAFFOLD_DIRECTORIES: [&str; 4] = ["src", "include", "tests", "build"];

/// Key of every template the tool knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    /// `src/main.cpp`: hello-world entry point.
    MainSource,
    /// `Makefile`: debug/release/test/valgrind/clean/run targets.
    BuildConfig,
    /// `tests/test_math.cpp`: single-assertion test program.
    TestStub,
    /// `.gitignore`
    IgnoreFile,
    /// `README.md`
    Readme,
    /// `min.sh`: minimal interactive prompt. Not part of the scaffold.
    PromptScript,
}

impl TemplateId {
    /// Files of a scaffolded project, in write order.
    pub const SCAFFOLD: [TemplateId; 5] = [
        TemplateId::MainSource,
        TemplateId::BuildConfig,
        TemplateId::TestStub,
        TemplateId::IgnoreFile,
        TemplateId::Readme,
    ];

    /// Stable template name, used as the store key and in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MainSource => "main-source",
            Self::BuildConfig => "build-config",
            Self::TestStub => "test-stub",
            Self::IgnoreFile => "ignore-file",
            Self::Readme => "readme",
            Self::PromptScript => "prompt-script",
        }
    }

    /// Output path relative to the project root (or to the working
    /// directory for [`TemplateId::PromptScript`]).
    pub const fn output_path(self) -> &'static str {
        match self {
            Self::MainSource => "src/main.cpp",
            Self::BuildConfig => "Makefile",
            Self::TestStub => "tests/test_math.cpp",
            Self::IgnoreFile => ".gitignore",
            Self::Readme => "README.md",
            Self::PromptScript => "min.sh",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw template as supplied by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateId,
    pub source: Cow<'static, str>,
}

impl Template {
    /// Template backed by a compile-time string (no allocation).
    pub const fn embedded(id: TemplateId, source: &'static str) -> Self {
        Self {
            id,
            source: Cow::Borrowed(source),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.source.trim().is_empty() {
            return Err(DomainError::EmptyTemplate {
                template: self.id.to_string(),
            });
        }
        Ok(())
    }
}

/// Context for template rendering.
///
/// Holds the variables available to `{{VARIABLE}}` placeholders. Rendering is
/// a pure function of these values: no clock, no randomness, no environment,
/// so one project name always renders to byte-identical files.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "Demo" | User input |
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// `BTreeMap` so substitution order is fixed.
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: &ProjectName) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert(PROJECT_NAME.to_string(), project_name.as_str().to_string());
        Self { variables }
    }

    /// Context with no variables, for templates that take none.
    pub fn empty() -> Self {
        Self {
            variables: BTreeMap::new(),
        }
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - `{{PROJECT_NAME}}{{PROJECT_NAME}}` → both replaced
    /// - Make syntax such as `$(DBG_BIN)` and `$@` is never touched
    /// - Substituted values are not rescanned, so a name containing
    ///   `{{...}}` is written literally
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                // Stray `{{` before the real placeholder.
                Some(end) if after[..end].contains("{{") => {
                    out.push_str("{{");
                    rest = after;
                }
                Some(end) => {
                    let key = &after[..end];
                    match self.variables.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}
