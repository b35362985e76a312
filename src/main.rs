mod cli;

use crate::cli::{Cli, Commands};
use clap::Parser;
use tracing::{error, info};

use ct_log_viewer::debug::{DebugConfig, init_logging};
use ct_log_viewer::infrastructure::storage::PanelDirectory;
use ct_log_viewer::interfaces::web::server::create_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let debug_config = DebugConfig::default();
    if let Err(e) = init_logging(&debug_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            host,
            data_dir,
            date,
        } => {
            info!("Starting CT Log Viewer server...");
            let panels = PanelDirectory::new(data_dir, date);

            match create_server(host, port, panels).await {
                Ok(_) => {
                    info!("Server terminated normally");
                }
                Err(e) => {
                    error!("Server failed: {}", e);
                    eprintln!("❌ Server failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
