pub mod types;
pub mod config;
pub mod classify;
pub mod cluster;
pub mod legend;
pub mod popup;
pub mod style;
pub mod layers;
pub mod data;
pub mod render;
pub mod server;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the GDP and endorser layers and write the styled map assets
    Generate {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
    },
    /// Serve the generated map and the lookup API
    Serve {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate { config } => {
            info!("Generating map with config: {:?}", config);
            let app_config = config::AppConfig::load_from_file(config)?;

            let layers = data::load_layers(&app_config).await;
            render::write_outputs(&app_config, &layers)?;

            info!("Generation complete, assets in {:?}", app_config.output.dir);
        }
        Commands::Serve { config } => {
            info!("Serving map with config: {:?}", config);
            let app_config = config::AppConfig::load_from_file(config)?;

            // Only the polygons are needed for point lookups.
            let layers = data::load_layers(&app_config).await;
            server::start_server(app_config, layers.countries).await?;
        }
    }

    Ok(())
}
