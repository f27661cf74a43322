use aggregator::config::{StocksConfig, WindowConfig};
use aggregator::{init_logging, stocks, window};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "aggregator")]
#[command(about = "HTTP services aggregating data from the evaluation API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the number window service
    Window {
        #[arg(short, long, default_value = "9876")]
        port: u16,

        #[arg(short = 'b', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Start the stock aggregation service
    Stocks {
        #[arg(short, long, default_value = "9877")]
        port: u16,

        #[arg(short = 'b', long, default_value = "127.0.0.1")]
        host: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    dotenv::dotenv().ok();

    match cli.command {
        Commands::Window { host, port } => {
            let config = WindowConfig::from_env()?;
            window::serve(host, port, config).await?;
        }
        Commands::Stocks { host, port } => {
            let config = StocksConfig::from_env()?;
            stocks::serve(host, port, config).await?;
        }
    }

    Ok(())
}
