//! Implementation of the `hexgen crud` command.

use tracing::{debug, instrument};

use hexgen_adapters::{LocalFileHandler, TeraRenderer, layout::crud_layout};
use hexgen_core::prelude::*;

use crate::{
    cli::{CrudArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `hexgen crud` command.
///
/// Sequence:
/// 1. Normalize the model name and validate the action set (before any I/O).
/// 2. Resolve the target and built-in roots.
/// 3. `--dry-run`: print the plan and stop, touching nothing.
/// 4. Otherwise ensure the base skeleton, then plan and execute.
#[instrument(skip_all, fields(model = %args.model))]
pub fn execute(
    args: CrudArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let name = ModuleName::parse(&args.model).map_err(HexgenError::from)?;
    let actions = match &args.actions {
        Some(list) => ActionSet::new(list.clone()).map_err(HexgenError::from)?,
        None => ActionSet::all(),
    };
    debug!(pascal = name.pascal(), snake = name.snake(), "name normalized");

    let target_root = super::resolve_target_root(&global, &config);
    let generator = ModuleGenerator::new(
        Box::new(TeraRenderer::new()),
        Box::new(LocalFileHandler::new()),
        crud_layout(),
    );

    if args.dry_run {
        let plan = generator.plan(&target_root, &name, &actions)?;

        output.header(&format!("Dry run for module '{}'", name.pascal()))?;
        output.info("No files will be written")?;
        output.print("")?;
        output.print("Directories:")?;
        for dir in &plan.directories {
            output.print(&format!("  {}", dir.display()))?;
        }
        output.print("Files:")?;
        for file in &plan.files {
            output.print(&format!("  {}", file.path.display()))?;
        }
        output.print("")?;
        output.info("The base project skeleton would also be ensured")?;
        return Ok(());
    }

    let builtin_root = super::resolve_builtin_root(&global, &config)?;
    super::ensure_base_project(&target_root, &builtin_root, &output)?;

    let report = generator.run(&target_root, &name, &actions)?;

    if report.is_noop() {
        output.warning(&format!(
            "Module '{}' already exists, nothing written ({} files skipped)",
            name.snake(),
            report.files_skipped
        ))?;
    } else {
        output.success(&format!(
            "Module '{}' generated: {} files written, {} skipped",
            name.snake(),
            report.files_written,
            report.files_skipped
        ))?;
    }
    Ok(())
}
