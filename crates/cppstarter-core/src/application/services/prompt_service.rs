//! Prompt Service - writes the minimal shell prompt script.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::ports::{Filesystem, TemplateStore},
    domain::{RenderContext, TemplateId},
    error::ScaffoldResult,
};

/// Service for the `min` command.
pub struct PromptService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl PromptService {
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Write `min.sh` into `dir`, replacing any previous copy, and mark it
    /// executable. Returns the path written.
    #[instrument(skip(self), fields(dir = %dir.display()))]
    pub fn write_minimal_prompt(&self, dir: &Path) -> ScaffoldResult<PathBuf> {
        let template = self.store.get(TemplateId::PromptScript)?;
        template.validate()?;

        let path = dir.join(TemplateId::PromptScript.output_path());
        let content = RenderContext::empty().render(&template.source);

        self.filesystem.write_file(&path, &content)?;
        self.filesystem.set_permissions(&path, true)?;

        debug!(path = %path.display(), "Prompt script written");
        Ok(path)
    }
}
