//! The triage server binary: symptom descriptions in, triage records out.

use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage_extract::FallbackPolicy;
use triage_server::api;
use triage_server::app::AppState;
use triage_server::config::ServerConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5001)]
    port: u16,

    /// Gemini model identifier used for triage prompts
    #[arg(long, default_value = "gemini-2.5-flash-lite")]
    model: String,

    /// Answer extraction failures with the safe default record instead of
    /// an error body
    #[arg(long)]
    safe_default: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        model: cli.model,
        fallback: if cli.safe_default {
            FallbackPolicy::SafeDefault
        } else {
            FallbackPolicy::Surface
        },
    };

    let bind_addr = config.bind_addr();
    let state = web::Data::new(AppState::new(&config)?);

    tracing::info!(
        host = %config.host,
        port = config.port,
        model = %config.model,
        fallback = ?config.fallback,
        "starting triage server"
    );

    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
        .bind(bind_addr)?
        .run()
        .await?;

    Ok(())
}
