//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole `new` workflow:
//! 1. Refuse to touch an existing filesystem entry
//! 2. Render every template for the project name
//! 3. Create directories, then write files
//! 4. Optionally run `git init` inside the new project
//!
//! What happens when a directory or file cannot be created is decided by the
//! [`FailurePolicy`] the service is built with.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, TemplateStore},
    },
    domain::{
        Entry, Invocation, ProjectName, ProjectSpec, ProjectStructure, RelativePath,
        RenderContext, SCAFFOLD_DIRECTORIES, TemplateId,
    },
    error::{ScaffoldError, ScaffoldResult},
};

/// What to do when a directory or file of the scaffold cannot be created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Attempt every step exactly once. Directory failures become warnings,
    /// file failures become errors, and nothing already written is removed.
    #[default]
    Continue,
    /// Stop at the first failure and remove the partially created project.
    Rollback,
}

/// Which part of the scaffold a step touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Directory,
    File,
    Git,
}

/// Result of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    /// Non-fatal problem; generation continued.
    Warning(String),
    /// The step's output is missing from the project.
    Failed(String),
}

/// One attempted step, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub kind: StepKind,
    pub path: PathBuf,
    pub status: StepStatus,
}

/// Everything that happened during one `generate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    root: PathBuf,
    steps: Vec<StepOutcome>,
}

impl ScaffoldReport {
    fn new(root: PathBuf) -> Self {
        Self {
            root,
            steps: Vec::new(),
        }
    }

    fn push(&mut self, kind: StepKind, path: PathBuf, status: StepStatus) {
        self.steps.push(StepOutcome { kind, path, status });
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn steps(&self) -> &[StepOutcome] {
        &self.steps
    }

    pub fn warnings(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps
            .iter()
            .filter(|s| matches!(s.status, StepStatus::Warning(_)))
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps
            .iter()
            .filter(|s| matches!(s.status, StepStatus::Failed(_)))
    }

    /// `true` when every directory and file was created.
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// `true` when `git init` ran and exited with 0.
    pub fn git_initialized(&self) -> bool {
        self.steps
            .iter()
            .any(|s| s.kind == StepKind::Git && s.status == StepStatus::Done)
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    policy: FailurePolicy,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters and the default
    /// [`FailurePolicy::Continue`].
    pub fn new(
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            store,
            filesystem,
            runner,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Scaffold a new project under `parent`.
    ///
    /// Returns `Err` only for problems detected before anything is written
    /// (existing entry, broken template) or, under
    /// [`FailurePolicy::Rollback`], for the first failed step. Everything
    /// else is recorded in the returned [`ScaffoldReport`].
    #[instrument(
        skip_all,
        fields(project = %spec.name(), parent = %parent.display(), policy = ?self.policy)
    )]
    pub fn generate(&self, spec: &ProjectSpec, parent: &Path) -> ScaffoldResult<ScaffoldReport> {
        let root = parent.join(spec.name().as_str());

        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }

        let structure = self.render(spec.name(), &root)?;
        debug!(entries = structure.len(), "Templates rendered");

        let mut report = ScaffoldReport::new(root.clone());

        match self.policy {
            FailurePolicy::Continue => self.write_best_effort(&structure, &mut report),
            FailurePolicy::Rollback => {
                if let Err(e) = self.write_all(&structure, &mut report) {
                    warn!(error = %e, "Write failed, attempting rollback");
                    self.rollback(&root);
                    return Err(e);
                }
            }
        }

        if spec.init_git() {
            self.init_git(&root, &mut report);
        }

        info!(
            warnings = report.warnings().count(),
            failures = report.failures().count(),
            "Scaffold finished"
        );
        Ok(report)
    }

    /// Render the full scaffold for `name` without touching the filesystem.
    ///
    /// Output depends on the name and the store contents only, so two calls
    /// with the same inputs return equal structures.
    pub fn render(
        &self,
        name: &ProjectName,
        root: impl Into<PathBuf>,
    ) -> ScaffoldResult<ProjectStructure> {
        let ctx = RenderContext::new(name);
        let mut structure = ProjectStructure::new(root);

        for dir in SCAFFOLD_DIRECTORIES {
            structure.add_directory(RelativePath::try_new(dir)?);
        }

        for id in TemplateId::SCAFFOLD {
            let template = self.store.get(id)?;
            template.validate()?;
            structure.add_file(
                RelativePath::try_new(id.output_path())?,
                ctx.render(&template.source),
            );
        }

        structure.validate()?;
        Ok(structure)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_best_effort(&self, structure: &ProjectStructure, report: &mut ScaffoldReport) {
        for entry in structure.entries() {
            let path = structure.root().join(entry.path());
            match (entry, self.write_entry(structure.root(), entry)) {
                (_, Ok(())) => report.push(kind_of(entry), path, StepStatus::Done),
                (Entry::Directory { .. }, Err(e)) => {
                    warn!(path = %path.display(), error = %e, "Could not create directory");
                    report.push(StepKind::Directory, path, StepStatus::Warning(e.to_string()));
                }
                (Entry::File { .. }, Err(e)) => {
                    warn!(path = %path.display(), error = %e, "Could not create file");
                    report.push(StepKind::File, path, StepStatus::Failed(e.to_string()));
                }
            }
        }
    }

    fn write_all(
        &self,
        structure: &ProjectStructure,
        report: &mut ScaffoldReport,
    ) -> ScaffoldResult<()> {
        for entry in structure.entries() {
            let path = structure.root().join(entry.path());
            self.write_entry(structure.root(), entry).map_err(|e| {
                ScaffoldError::from(ApplicationError::Aborted {
                    path: path.clone(),
                    reason: e.to_string(),
                })
            })?;
            report.push(kind_of(entry), path, StepStatus::Done);
        }
        Ok(())
    }

    fn write_entry(&self, root: &Path, entry: &Entry) -> ScaffoldResult<()> {
        match entry {
            Entry::Directory { path } => self.filesystem.create_dir_all(&root.join(path)),
            Entry::File { path, content } => self.filesystem.write_file(&root.join(path), content),
        }
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if !self.filesystem.exists(root) {
            return;
        }
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }

    fn init_git(&self, root: &Path, report: &mut ScaffoldReport) {
        let invocation = Invocation::new("git").arg("init").current_dir(root);
        let status = match self.runner.run(&invocation) {
            Ok(0) => {
                info!("Git repository initialized");
                StepStatus::Done
            }
            Ok(code) => {
                warn!(code, "git init exited with a non-zero status");
                StepStatus::Warning(format!("'git init' exited with code {code}"))
            }
            Err(e) => {
                warn!(error = %e, "git init could not be started");
                StepStatus::Warning(e.to_string())
            }
        };
        report.push(StepKind::Git, root.join(".git"), status);
    }
}

fn kind_of(entry: &Entry) -> StepKind {
    if entry.is_directory() {
        StepKind::Directory
    } else {
        StepKind::File
    }
}
