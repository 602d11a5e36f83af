//! Implementation of the `hexgen builtin` command.

use tracing::instrument;

use crate::{
    cli::{BuiltinArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `hexgen builtin` command.
///
/// The app name is validated against the catalog before anything touches
/// the filesystem; an unknown app exits without side effects.
#[instrument(skip_all, fields(app = %args.app))]
pub fn execute(
    args: BuiltinArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let target_root = super::resolve_target_root(&global, &config);
    let builtin_root = super::resolve_builtin_root(&global, &config)?;
    let installer = super::builtin_installer(&builtin_root);

    installer
        .catalog()
        .validate(&args.app)
        .map_err(hexgen_core::error::HexgenError::from)?;

    if args.dry_run {
        output.header(&format!("Dry run for built-in app '{}'", args.app))?;
        output.info("No files will be written")?;
        output.print(&format!(
            "Would copy {} -> {}",
            builtin_root.join("src").join(&args.app).display(),
            target_root.join("src").join(&args.app).display(),
        ))?;
        output.info("The base project skeleton would also be ensured")?;
        return Ok(());
    }

    super::ensure_base_project(&target_root, &builtin_root, &output)?;

    let report = installer.copy_app(&target_root, &args.app, args.overwrite)?;

    if report.is_noop() {
        output.warning(&format!(
            "App '{}' already present, skipped (use --overwrite to replace)",
            args.app
        ))?;
    } else {
        output.success(&format!("Built-in app '{}' installed", args.app))?;
    }
    Ok(())
}
