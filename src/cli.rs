use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "marketpulse")]
#[command(about = "Financial data aggregation backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Probe each upstream and report reachability
    Doctor,
}

pub async fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            commands::serve::run(port).await;
        }
        Commands::Doctor => {
            commands::doctor::run().await;
        }
    }
}
