//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "hexgen",
    bin_name = "hexgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2b22} Hexagonal FastAPI module generator",
    long_about = "Hexgen generates hexagonal-architecture FastAPI modules: \
                  CRUD layers from templates, or complete built-in apps \
                  copied into your project.",
    after_help = "EXAMPLES:\n\
        \x20 hexgen crud Order\n\
        \x20 hexgen crud UserAccount --actions create list\n\
        \x20 hexgen crud Order --dry-run\n\
        \x20 hexgen builtin user",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a CRUD module from templates.
    #[command(
        about = "Generate a hexagonal CRUD module",
        after_help = "EXAMPLES:\n\
            \x20 hexgen crud Order\n\
            \x20 hexgen crud user_account --actions create retrieve\n\
            \x20 hexgen crud Order --dry-run"
    )]
    Crud(CrudArgs),

    /// Install a built-in app by copying its source tree.
    #[command(
        about = "Install a built-in app (user, role, auth, smtp)",
        after_help = "EXAMPLES:\n\
            \x20 hexgen builtin user\n\
            \x20 hexgen builtin auth --overwrite"
    )]
    Builtin(BuiltinArgs),
}

/// Arguments for `hexgen crud`.
#[derive(Debug, Args)]
pub struct CrudArgs {
    /// Model name in PascalCase or snake_case (e.g. `Order`, `user_account`).
    #[arg(value_name = "MODEL")]
    pub model: String,

    /// CRUD actions to generate use cases for. Defaults to all five.
    #[arg(
        long = "actions",
        value_name = "ACTION",
        num_args = 1..,
        help = "Subset of actions: create list retrieve update delete"
    )]
    pub actions: Option<Vec<String>>,

    /// Show what would be generated without writing anything.
    #[arg(long = "dry-run", help = "Plan only, write nothing")]
    pub dry_run: bool,
}

/// Arguments for `hexgen builtin`.
#[derive(Debug, Args)]
pub struct BuiltinArgs {
    /// Built-in app name.
    #[arg(value_name = "APP")]
    pub app: String,

    /// Replace an existing copy of the app.
    #[arg(long = "overwrite", help = "Replace the app directory if it exists")]
    pub overwrite: bool,

    /// Show what would be copied without writing anything.
    #[arg(long = "dry-run", help = "Plan only, write nothing")]
    pub dry_run: bool,
}
