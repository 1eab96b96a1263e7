use anyhow::Context;
use clap::Parser;

mod app_context;
mod cli;
mod countdown;
mod game;
mod geo;
mod health;
mod http;
mod logging;
mod rounds;
mod scoring;
mod sessions;
mod storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::init(&args)?;
    let rounds = rounds::init(&args)
        .with_context(|| format!("Failed to load rounds from {}.", args.rounds.display()))?;
    let app_context = app_context::init(&args, rounds);
    let app = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .with_context(|| format!("Failed to bind {}.", args.listen_address))?;
    tracing::info!(task = "startup", "Listening on {}.", args.listen_address);
    axum::serve(listener, app).await?;
    Ok(())
}
