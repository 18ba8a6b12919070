//! Templates compiled into the binary.
//!
//! The files under `templates/` are the project skeleton. They are pulled in
//! with `include_str!`, so the generator needs nothing from disk at runtime
//! and its output is identical for every install.

use cppstarter_core::{
    application::ports::TemplateStore,
    domain::{Template, TemplateId},
    error::ScaffoldResult,
};

const MAIN_SOURCE: &str = include_str!("../../templates/main.cpp");
const BUILD_CONFIG: &str = include_str!("../../templates/Makefile");
const TEST_STUB: &str = include_str!("../../templates/test_math.cpp");
const IGNORE_FILE: &str = include_str!("../../templates/gitignore");
const README: &str = include_str!("../../templates/README.md");
const PROMPT_SCRIPT: &str = include_str!("../../templates/min.sh");

/// Read-only store over the built-in template set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedStore;

impl EmbeddedStore {
    pub fn new() -> Self {
        Self
    }

    fn source(id: TemplateId) -> &'static str {
        match id {
            TemplateId::MainSource => MAIN_SOURCE,
            TemplateId::BuildConfig => BUILD_CONFIG,
            TemplateId::TestStub => TEST_STUB,
            TemplateId::IgnoreFile => IGNORE_FILE,
            TemplateId::Readme => README,
            TemplateId::PromptScript => PROMPT_SCRIPT,
        }
    }
}

impl TemplateStore for EmbeddedStore {
    fn get(&self, id: TemplateId) -> ScaffoldResult<Template> {
        Ok(Template::embedded(id, Self::source(id)))
    }
}
