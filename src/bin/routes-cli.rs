use clap::{Parser, Subcommand};
use serde_json::Value;

use spa_router::{app, HistoryRuntime};

#[derive(Parser)]
#[command(name = "routes-cli")]
#[command(about = "Inspect the application's route table", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes served by a running host
    Routes,
    /// Ask a running host which route a location resolves to
    Resolve {
        /// Location such as `/Counter`
        path: String,
    },
    /// Print the compiled table without contacting a host
    Table,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Routes => {
            let res = client.get(format!("{}/api/routes", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Resolve { path } => {
            let res = client
                .get(format!("{}/api/resolve", cli.url))
                .query(&[("path", path)])
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Table => {
            let router = app::bootstrap(&HistoryRuntime::new())?;
            println!("{}", serde_json::to_string_pretty(router.routes())?);
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;
    if !status.is_success() {
        eprintln!("Error: host returned status {}", status);
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
