use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use trailteller::config::config_loader;
use trailteller::infrastructure::axum_http::http_serve;
use trailteller::infrastructure::postgres::postgres_connection;
use trailteller::observability;
use trailteller::payments::omise_client::OmiseClient;
use trailteller::weather::openweather_client::OpenWeatherClient;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Server exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init_observability("server")?;

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    let postgres_pool = postgres_connection::establish_connection(&dotenvy_env.database.url)?;
    info!("Postgres connection has been established");

    let omise_client = OmiseClient::new(
        dotenvy_env.omise.secret_key.clone(),
        dotenvy_env.omise.source_type.clone(),
        dotenvy_env.omise.return_uri.clone(),
    );
    let weather_client = OpenWeatherClient::new(dotenvy_env.weather.api_key.clone());

    http_serve::start(
        Arc::new(dotenvy_env),
        Arc::new(postgres_pool),
        Arc::new(omise_client),
        Arc::new(weather_client),
    )
    .await?;

    Ok(())
}
