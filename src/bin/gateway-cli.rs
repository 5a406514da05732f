use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Query a running market data gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch recent candles for a product
    Candles {
        #[arg(short, long, default_value = "ETH-USD")]
        product_id: String,
        #[arg(short, long, default_value = "ONE_MINUTE")]
        granularity: String,
        #[arg(short, long, default_value_t = 300)]
        lookback_minutes: u32,
    },
    /// Fetch the ticker snapshot for a product
    Ticker {
        #[arg(short, long, default_value = "ETH-USD")]
        product_id: String,
    },
    /// Check gateway health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Candles {
            product_id,
            granularity,
            lookback_minutes,
        } => {
            client
                .get(format!("{}/candles", base))
                .query(&[
                    ("product_id", product_id),
                    ("granularity", granularity),
                    ("lookback_minutes", lookback_minutes.to_string()),
                ])
                .send()
                .await?
        }
        Commands::Ticker { product_id } => {
            client
                .get(format!("{}/ticker", base))
                .query(&[("product_id", product_id)])
                .send()
                .await?
        }
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        eprintln!("Response: {}", text);
        std::process::exit(1);
    }

    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
