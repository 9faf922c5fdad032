//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Derive the project layout from the selection
//! 2. Guard against an existing project
//! 3. Load and render every template
//! 4. Create directories and write files
//!
//! Template loading happens before any directory is created, so a missing
//! template aborts the run with zero filesystem writes. Once writing starts
//! there is no rollback: the first error stops the remaining steps and
//! whatever was already written stays on storage.

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore},
    },
    domain::{GeneratedFile, ProjectLayout, RenderContext, Selection, TemplateId},
    error::ForgeResult,
};

/// Structured outcome of a successful scaffold, for reporting.
///
/// The core does not format or display this; the CLI renders it as human
/// lines or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldSummary {
    pub category: String,
    pub subcategory: String,
    pub project_name: String,
    pub has_extractor: bool,
    pub has_transform: bool,
    pub has_loader: bool,
    pub output_path: std::path::PathBuf,
}

impl ScaffoldSummary {
    fn new(selection: &Selection, output_path: &Path) -> Self {
        let stages = selection.stages();
        Self {
            category: selection.category().to_string(),
            subcategory: selection.subcategory().to_string(),
            project_name: selection.project_name().to_string(),
            has_extractor: stages.extractor,
            has_transform: stages.transform,
            has_loader: stages.loader,
            output_path: output_path.to_path_buf(),
        }
    }
}

/// What one scaffold run produced: the computed paths plus the summary.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub layout: ProjectLayout,
    pub summary: ScaffoldSummary,
}

/// Main scaffolding service.
///
/// Owns the template store and filesystem ports for the lifetime of one or
/// more runs; each `scaffold` call is independent.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Scaffold a new project under `root`.
    ///
    /// This is the main use case. On success the computed layout is returned
    /// to the caller for reporting.
    #[instrument(
        skip_all,
        fields(
            project = %selection.project_name(),
            category = %selection.category(),
            subcategory = %selection.subcategory(),
        )
    )]
    pub fn scaffold(&self, root: &Path, selection: &Selection) -> ForgeResult<ScaffoldReport> {
        info!("Scaffolding ETL project");

        // 1. Derive paths
        let layout = ProjectLayout::derive(root, selection);

        // 2. Existence guard. Either directory present means the project was
        //    already scaffolded; nothing has been mutated yet.
        if self.filesystem.exists(layout.workflows_dir())
            || self.filesystem.exists(layout.routes_dir())
        {
            return Err(ApplicationError::ProjectExists {
                project: selection.project_name().to_string(),
                category: selection.category().to_string(),
                subcategory: selection.subcategory().to_string(),
            }
            .into());
        }

        // 3. Load and render every file up front, so a missing template
        //    aborts before the filesystem is touched.
        let files = self.plan_files(selection, &layout)?;

        // 4. Create both directories, parents included.
        self.filesystem.create_dir_all(layout.workflows_dir())?;
        self.filesystem.create_dir_all(layout.routes_dir())?;

        // 5. Write files. Completed writes stay on failure.
        for file in &files {
            self.materialize(file)?;
        }

        info!(
            files = files.len(),
            path = %layout.project_dir().display(),
            "Scaffold complete"
        );

        let summary = ScaffoldSummary::new(selection, layout.project_dir());
        Ok(ScaffoldReport { layout, summary })
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// Assemble the full list of files this run will write.
    ///
    /// Stage templates are copied verbatim; the routes and etl templates go
    /// through placeholder substitution.
    fn plan_files(
        &self,
        selection: &Selection,
        layout: &ProjectLayout,
    ) -> ForgeResult<Vec<GeneratedFile>> {
        let mut files = Vec::with_capacity(selection.stages().count() + 2);

        for stage in selection.stages().enabled() {
            let text = self.store.get(TemplateId::from(stage))?;
            files.push(GeneratedFile::new(layout.stage_file(stage), text));
        }

        let context = RenderContext::for_selection(selection);

        let routes = self.store.get(TemplateId::Routes)?;
        files.push(GeneratedFile::new(
            layout.routes_file(selection.project_name()),
            context.render(&routes),
        ));

        let etl = self.store.get(TemplateId::Etl)?;
        files.push(GeneratedFile::new(layout.etl_file(), context.render(&etl)));

        Ok(files)
    }

    /// Write one file, trimming leading/trailing whitespace from the content.
    fn materialize(&self, file: &GeneratedFile) -> ForgeResult<()> {
        self.filesystem.write_file(&file.path, file.content.trim())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
