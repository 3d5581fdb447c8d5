mod client;
mod config;
mod query;
mod view;

#[cfg(test)]
mod test_support;

use anyhow::{bail, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::client::HelloClient;
use crate::config::Config;
use crate::query::{settled, spawn_hello_query, QueryState};
use crate::view::{render_app, HelloView};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Fetching greeting from {}", config.api_base_url);

    let client = HelloClient::new(config.api_base_url.clone(), config.http_timeout)?;
    let mut rx = spawn_hello_query(client);

    // First frame is always the loading state, even if the fetch already settled
    println!("{}", render_app(&QueryState::Loading));

    let state = settled(&mut rx).await;
    println!("{}", HelloView(&state));

    if let QueryState::Error(cause) = state {
        bail!("could not load greeting: {cause}");
    }
    Ok(())
}
