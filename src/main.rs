use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use assetdesk::cli::{
    handle_export_command, handle_inspect_command, handle_preview_command, EntityKind,
    ExportCommands, ExportContext,
};
use assetdesk::config::{paths::DeskPaths, settings::Settings};
use assetdesk::logging::init_logger;
use assetdesk::store::DashboardStore;

#[derive(Parser)]
#[command(
    name = "assetdesk",
    version,
    about = "Export dashboard projects, creators, legal issues and risk data",
    long_about = "assetdesk holds the dashboard's project, creator, legal-issue and \
                  risk records and exports them as CSV or JSON documents."
)]
struct Cli {
    /// Log level for assetdesk output (overrides RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export records to a CSV or JSON file
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show records as they would be exported
    Preview {
        /// Which records to show
        #[arg(value_enum)]
        entity: EntityKind,

        /// Read records from a JSON file instead of the dashboard store
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show an exported CSV file as a table
    Inspect {
        /// Path to the CSV file
        file: PathBuf,
    },

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let paths = DeskPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = DashboardStore::seeded();

    match cli.command {
        Some(Commands::Export(cmd)) => {
            let ctx = ExportContext {
                store: &store,
                settings: &settings,
                paths: &paths,
            };
            handle_export_command(&ctx, cmd)?;
        }
        Some(Commands::Preview { entity, input }) => {
            handle_preview_command(&store, &settings, entity, input)?;
        }
        Some(Commands::Inspect { file }) => {
            handle_inspect_command(file)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("assetdesk Configuration");
            println!("=======================");
            println!("Config directory:   {}", paths.base_dir().display());
            println!("Settings file:      {}", paths.settings_file().display());
            println!("Download directory: {}", settings.download_dir(&paths).display());
            println!();
            println!("Settings:");
            println!("  Default format: {}", settings.default_format);
            println!("  Date format:    {}", settings.date_format);
            println!("  Initialized:    {}", paths.is_initialized());
        }
        None => {
            println!("assetdesk - dashboard record export");
            println!();
            println!("Run 'assetdesk --help' for usage information.");
            println!("Run 'assetdesk export projects' to export the project list.");
        }
    }

    Ok(())
}
