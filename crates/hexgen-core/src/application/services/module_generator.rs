//! CRUD module generator - main application orchestrator.
//!
//! The workflow is plan-then-execute:
//! 1. Render every template against the frozen name pair and action set,
//!    producing a [`GenerationPlan`] without touching the filesystem.
//! 2. Execute the plan through the [`FileHandler`] port, skipping anything
//!    that already exists.
//!
//! A dry run stops after step 1 and shows the plan.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{FileHandler, TemplateEngine},
        services::GenerationReport,
    },
    domain::{
        ActionSet, GenerationPlan, ModuleName, ModulePaths, PlannedFile, RenderContext,
        TemplateSpec,
    },
    error::HexgenResult,
};

/// The set of templates and directories that make up one CRUD module.
///
/// Layouts are data, not behavior: adapters supply the template sources
/// (see `hexgen_adapters::layout::crud_layout`), the generator binds them
/// to paths and contexts.
#[derive(Debug, Clone)]
pub struct CrudLayout {
    /// Directories to create, relative to the module root. The empty string
    /// is the module root itself.
    pub directories: Vec<String>,
    /// Layer file templates, one output file each.
    pub routes: Vec<TemplateSpec>,
    /// Template for `application/use_cases/__init__.py`.
    pub use_case_init: String,
    /// Template rendered once per action into `use_cases/<action>.py`.
    pub use_case: String,
}

/// Relative directory whose `__init__.py` is rendered, not written empty.
const USE_CASES_DIR: &str = "application/use_cases";

/// Generates a complete hexagonal architecture module for a model.
pub struct ModuleGenerator {
    renderer: Box<dyn TemplateEngine>,
    files: Box<dyn FileHandler>,
    layout: CrudLayout,
}

impl ModuleGenerator {
    /// Create a new module generator with the given adapters and layout.
    pub fn new(
        renderer: Box<dyn TemplateEngine>,
        files: Box<dyn FileHandler>,
        layout: CrudLayout,
    ) -> Self {
        Self {
            renderer,
            files,
            layout,
        }
    }

    /// Build the full generation plan without filesystem access.
    ///
    /// All rendering happens here; by the time a plan exists, no template
    /// error can interrupt execution halfway.
    #[instrument(skip_all, fields(module = %name, actions = actions.len()))]
    pub fn plan(
        &self,
        target_root: &Path,
        name: &ModuleName,
        actions: &ActionSet,
    ) -> HexgenResult<GenerationPlan> {
        let paths = ModulePaths::new(target_root, name);
        let context = RenderContext::new(name, actions);
        let mut plan = GenerationPlan::default();

        for dir in &self.layout.directories {
            plan.push_directory(paths.join(dir));
            if dir != USE_CASES_DIR {
                plan.push_file(PlannedFile::new(paths.init_file(dir), ""));
            }
        }

        for route in &self.layout.routes {
            let rendered = self
                .renderer
                .render(&route.relative_path, &route.template, &context)?;
            plan.push_file(PlannedFile::new(paths.join(&route.relative_path), rendered));
        }

        let init = self
            .renderer
            .render("use_cases/__init__.py", &self.layout.use_case_init, &context)?;
        plan.push_file(PlannedFile::new(paths.use_case_init(), init));

        for action in actions.iter() {
            let per_action = context.for_action(action);
            let rendered =
                self.renderer
                    .render("use_cases/<action>.py", &self.layout.use_case, &per_action)?;
            plan.push_file(PlannedFile::new(paths.use_case_file(action), rendered));
        }

        plan.validate()?;
        info!(
            directories = plan.directories.len(),
            files = plan.files.len(),
            "Generation plan built"
        );
        Ok(plan)
    }

    /// Execute a plan against the filesystem.
    ///
    /// Existing files and directories are skipped, never overwritten.
    #[instrument(skip_all)]
    pub fn execute(&self, plan: &GenerationPlan) -> HexgenResult<GenerationReport> {
        let mut report = GenerationReport::default();

        for dir in &plan.directories {
            if self.files.create_directory(dir)? {
                report.directories_created += 1;
            } else {
                report.directories_existing += 1;
            }
        }

        for file in &plan.files {
            if self.files.write_file(&file.path, &file.contents, false)? {
                report.files_written += 1;
            } else {
                report.files_skipped += 1;
            }
        }

        info!(
            created = report.directories_created,
            written = report.files_written,
            skipped = report.files_skipped,
            "Generation plan executed"
        );
        Ok(report)
    }

    /// Plan and execute in one step.
    pub fn run(
        &self,
        target_root: &Path,
        name: &ModuleName,
        actions: &ActionSet,
    ) -> HexgenResult<GenerationReport> {
        let plan = self.plan(target_root, name, actions)?;
        self.execute(&plan)
    }
}
