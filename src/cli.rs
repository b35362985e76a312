use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ct-log-viewer",
    author = "CT Log Viewer Team",
    version,
    about = "Serve CT log files for multi-panel inspection",
    long_about = "An HTTP server that exposes plain-text CT log files as paginated, \
searchable, time-aligned JSON for the browser-side viewer"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the log viewer web server
    Serve {
        /// Port to bind the web server to (retries the next 9 ports when taken)
        #[arg(short, long, default_value = "8000")]
        port: u16,
        /// Host to bind the web server to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
        /// Directory containing the panel log files
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
        /// Date suffix used in the panel log file names (YYYY-MM-DD)
        #[arg(long, default_value = "2025-06-02")]
        date: String,
    },
}
