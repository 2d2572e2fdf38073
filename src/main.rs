use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use api::serve;
use repository::init_repository;
use tokio::net::TcpListener;
use toml::{map::Map, Value};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = load_config()?;
    let database_url = config
        .get("database_url")
        .and_then(Value::as_str)
        .context("database_url was not found")?;
    let client_url = config
        .get("client_url")
        .and_then(Value::as_str)
        .context("client_url was not found")?;
    let port = config
        .get("port")
        .and_then(Value::as_integer)
        .unwrap_or(8000) as u16;

    let repository = init_repository(database_url).await?;
    let router = serve(repository, client_url.to_string()).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(&address).await?;
    info!(task = "start server", %address);

    Ok(axum::serve(listener, router).await?)
}

fn load_config() -> anyhow::Result<Map<String, Value>> {
    let config_name =
        std::env::var("CONFIG").unwrap_or_else(|_| "Config.toml".to_string());
    let config = std::fs::read_to_string(&config_name)
        .with_context(|| format!("failed to read {config_name}"))?;

    toml::from_str::<Map<String, Value>>(&config)
        .with_context(|| format!("failed to parse {config_name}"))
}
