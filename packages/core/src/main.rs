// HTTP сервер конвертера

use anyhow::Context;
use converter_core::api::http::router;
use converter_core::config::Config;
use converter_core::utils::logging::init_logging;
use converter_core::ConverterAPI;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    Config::init_from_env().map_err(anyhow::Error::msg)?;
    let api = Arc::new(ConverterAPI::default());
    let listen_addr = api.config().listen_addr.clone();

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;

    info!(
        target: "converter::http",
        addr = %listen_addr,
        "Converter server listening"
    );

    axum::serve(listener, router(api))
        .await
        .context("HTTP server failed")?;

    Ok(())
}
