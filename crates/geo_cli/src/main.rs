use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use geo_core::config::DEFAULT_ADDR;
use geo_core::types::{DEFAULT_CATEGORY, DEFAULT_COUNTRY, DEFAULT_QUERY};
use geo_core::{AnalyzeRequest, Config, NewsQuery};
use geo_inference::report::{render_report, share_text};
use geo_news::TopicFilter;
use geo_web::AppState;
use std::net::SocketAddr;
use tracing::info;

mod display;
mod logging;

use display::{error_panel, render_feed, resolve_feed, warning_banner};

#[derive(Parser)]
#[command(name = "geoimpact", author, version, about = "Geopolitical news with India-impact analysis")]
struct Cli {
    /// Generative model backend (gemini, dummy)
    #[arg(long, global = true, env = "GEOIMPACT_MODEL", default_value = "gemini")]
    model: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to listen on (defaults to GEOIMPACT_ADDR or 127.0.0.1:3000)
        #[arg(long)]
        addr: Option<String>,
    },
    /// Show the aggregated news feed
    Feed {
        #[arg(short, long, default_value = DEFAULT_QUERY)]
        query: String,
        #[arg(long, default_value = DEFAULT_COUNTRY)]
        country: String,
        #[arg(long, default_value = DEFAULT_CATEGORY)]
        category: String,
        /// all, india-china, india-usa, global-conflicts, economic, security, diplomatic, latest
        #[arg(short, long, default_value = "all")]
        filter: TopicFilter,
        /// Print the feed as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Analyze a single article
    Analyze {
        #[arg(short, long)]
        title: String,
        #[arg(short, long, default_value = "")]
        content: String,
        #[arg(short, long)]
        description: Option<String>,
        /// Also print the shareable summary
        #[arg(long)]
        share: bool,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = Config::from_env();
    let state = AppState::from_config(&config, &cli.model)
        .with_context(|| format!("Failed to set up model '{}'", cli.model))?;

    match cli.command {
        Commands::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| config.addr.clone());
            let addr: SocketAddr = addr
                .parse()
                .with_context(|| format!("Invalid listen address '{}' (e.g. {})", addr, DEFAULT_ADDR))?;
            geo_web::serve(addr, state).await?;
        }
        Commands::Feed {
            query,
            country,
            category,
            filter,
            json,
        } => {
            let query = NewsQuery {
                q: query,
                country,
                category,
            }
            .normalized();
            let now = Utc::now();
            let (articles, banner) = resolve_feed(state.aggregator.aggregate(&query).await, now);
            if let Some(message) = banner {
                eprintln!("{}", warning_banner(&message));
            }

            if json {
                let visible: Vec<_> = filter.apply(&articles, now);
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                print!("{}", render_feed(&articles, filter, now));
            }
        }
        Commands::Analyze {
            title,
            content,
            description,
            share,
            json,
        } => {
            info!("Analyzing with {}", state.analyzer.model_name());
            let mut request = AnalyzeRequest::new(title, content);
            if let Some(description) = description {
                request = request.with_description(description);
            }

            let analysis = match state.analyzer.analyze(&request).await {
                Ok(analysis) => analysis,
                Err(e) => {
                    eprintln!("{}", error_panel("Analysis Error", &e.to_string()));
                    return Err(e.into());
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", render_report(&request.title, &analysis));
            }
            if share {
                println!("\n{}", share_text(&request.title, &analysis));
            }
        }
    }

    Ok(())
}
