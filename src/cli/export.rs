//! CLI commands for data export
//!
//! Each entity has its own subcommand; all share the same output options.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use futures::executor::block_on;
use serde::de::DeserializeOwned;

use crate::config::{DeskPaths, Settings};
use crate::error::DeskResult;
use crate::export::{default_filename, export_records, DirectoryTarget, ExportFormat, Exportable};
use crate::input::{read_record, read_records};
use crate::models::RiskSummary;
use crate::store::{DashboardStore, Entity, MemoryRepository, Repository};

/// Options shared by every export subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Read records from a JSON file instead of the dashboard store
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Export format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// File name without extension (default: <entity>-<date>)
    #[arg(short = 'n', long)]
    pub filename: Option<String>,

    /// Directory to write to (defaults to the configured download directory)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export projects
    Projects(ExportArgs),

    /// Export legal issues
    #[command(alias = "legal-issues")]
    Issues(ExportArgs),

    /// Export creators
    Creators(ExportArgs),

    /// Export the risk summary
    Risk(ExportArgs),
}

/// Everything an export handler needs
pub struct ExportContext<'a> {
    pub store: &'a DashboardStore,
    pub settings: &'a Settings,
    pub paths: &'a DeskPaths,
}

/// Handle export commands
pub fn handle_export_command(ctx: &ExportContext<'_>, cmd: ExportCommands) -> DeskResult<()> {
    match cmd {
        ExportCommands::Projects(args) => {
            let records = collect_records(&ctx.store.projects, args.input.as_deref())?;
            run_export(ctx, &records, &args)
        }
        ExportCommands::Issues(args) => {
            let records = collect_records(&ctx.store.issues, args.input.as_deref())?;
            run_export(ctx, &records, &args)
        }
        ExportCommands::Creators(args) => {
            let records = collect_records(&ctx.store.creators, args.input.as_deref())?;
            run_export(ctx, &records, &args)
        }
        ExportCommands::Risk(args) => {
            let summary = collect_risk_summary(ctx.store, args.input.as_deref())?;
            run_export(ctx, &[summary], &args)
        }
    }
}

/// Records from `input` when given, otherwise from the store
pub fn collect_records<T>(repo: &MemoryRepository<T>, input: Option<&Path>) -> DeskResult<Vec<T>>
where
    T: Entity + DeserializeOwned,
{
    match input {
        Some(path) => read_records(path),
        None => block_on(repo.list()),
    }
}

/// Risk summary from `input` when given, otherwise from the store
pub fn collect_risk_summary(store: &DashboardStore, input: Option<&Path>) -> DeskResult<RiskSummary> {
    match input {
        Some(path) => read_record(path),
        None => store.risk_summary(),
    }
}

fn run_export<T: Exportable>(ctx: &ExportContext<'_>, records: &[T], args: &ExportArgs) -> DeskResult<()> {
    let format = args.format.unwrap_or(ctx.settings.default_format);
    let filename = args.filename.clone().unwrap_or_else(default_filename::<T>);
    let dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| ctx.settings.download_dir(ctx.paths));

    let target = DirectoryTarget::new(dir);
    let path = export_records(
        records,
        &filename,
        format,
        &ctx.settings.export_options(),
        &target,
    )?;

    println!("Exported {} {} to: {}", records.len(), T::ENTITY, path.display());
    Ok(())
}
