//! # crud-app
//!
//! Terminal front-end for browsing and editing users and posts.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use crud_app::{Config, ReqwestTransport, Shell};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(base_url = %config.base_url, route = %config.route, "starting");

    let transport = Arc::new(ReqwestTransport::new()?);
    let mut shell = Shell::new(&config.base_url, transport);
    shell.navigate(config.route).await;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    shell.run(stdin, &mut std::io::stdout()).await
}
