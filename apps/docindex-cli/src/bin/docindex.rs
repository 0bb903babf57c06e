use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docindex_azure::wire::IndexPayload;
use docindex_azure::Connection;
use docindex_core::config::{expand_path, Config};
use docindex_core::source::JsonFileSource;
use docindex_core::{Document, IndexDefinition};
use docindex_pipeline::{Orchestrator, RunClock, Status, TracingSink};

#[derive(Debug, Parser)]
#[command(name = "docindex", version, about = "Upload a batch of documents to an Azure Search index")]
struct Cli {
    /// Directory holding config.toml and config.<env>.toml.
    #[arg(long, env = "DOCINDEX_CONFIG_DIR", default_value = ".")]
    config_dir: PathBuf,

    /// Selects config.<env>.toml (dev, prod or test).
    #[arg(long = "env", env = "RUST_ENV", default_value = "dev")]
    env_name: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ensure the index exists, then upload every valid document in one batch.
    Index {
        /// JSON file with an array of documents; overrides source.index_file.
        #[arg(long)]
        file: Option<String>,
        /// Overrides search.index_name.
        #[arg(long)]
        index_name: Option<String>,
    },
    /// Print the index definition that would be created, without any network calls.
    Schema {
        #[arg(long)]
        index_name: Option<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

async fn execute(cli: Cli, status: &Status<'_>) -> anyhow::Result<ExitCode> {
    let mut config = Config::load_from(&cli.config_dir, &cli.env_name)?;
    match cli.command {
        Command::Index { file, index_name } => {
            if let Some(file) = file {
                // Flag paths are relative to the working directory, not the config dir.
                let file = std::env::current_dir()?.join(expand_path(file));
                config = config.with_override("source.index_file", file.to_string_lossy().into_owned());
            }
            if let Some(name) = index_name {
                config = config.with_override("search.index_name", name);
            }
            let settings = config.settings()?;

            let connection = Connection::from_settings(&settings.search)?;
            status.info(format!("Authenticating to search service {}...", connection.base_url()));
            let orchestrator = Orchestrator::new(
                JsonFileSource::new(settings.index_file(&cli.config_dir)),
                connection.service(),
                connection.index(&settings.search.index_name),
                settings.search.index_name.clone(),
            )
            .with_policy(settings.validation);

            let report = orchestrator.run(status).await;
            Ok(ExitCode::from(u8::try_from(report.exit_code()).unwrap_or(1)))
        }
        Command::Schema { index_name } => {
            let name = match index_name {
                Some(name) => name,
                None => config.get::<String>("search.index_name")?,
            };
            let definition = IndexDefinition::for_document::<Document>(&name)?;
            println!("{}", serde_json::to_string_pretty(&IndexPayload::from(&definition))?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let clock = RunClock::start();
    init_tracing();
    let cli = Cli::parse();
    let sink = TracingSink;
    let status = Status::new(clock, &sink);
    match execute(cli, &status).await {
        Ok(code) => code,
        Err(e) => {
            status.error(format!("{e:#}"));
            ExitCode::from(1)
        }
    }
}
