use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use ajax_dispatch::routing::{extract_action, extract_name};

#[derive(Parser)]
#[command(name = "ajax-cli")]
#[command(about = "Inspect ajax paths and call a running dispatcher", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the ajaxlet name and action a path resolves to
    Parse {
        path: String,

        #[arg(short, long, default_value = "/ajax/")]
        prefix: String,
    },
    /// Send a GET for a path to a dispatcher and print the reply
    Call {
        path: String,

        #[arg(short, long, default_value = "http://127.0.0.1:8080")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { path, prefix } => {
            let tokens = json!({
                "name": extract_name(&path, &prefix),
                "action": extract_action(&path, &prefix),
            });
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
        Commands::Call { path, url } => {
            let target = url::Url::parse(&url)?.join(&path)?;
            let res = reqwest::get(target).await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;
    if !status.is_success() {
        eprintln!("Error: dispatcher returned status {}", status);
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
