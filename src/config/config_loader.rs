use anyhow::{Ok, Result};

use super::config_model::DotEnvyConfig;

const DEFAULT_TOKEN_TTL_HOURS: i64 = 72;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = super::config_model::Server {
        port: std::env::var("SERVER_PORT")
            .expect("SERVER_PORT is invalid")
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .expect("SERVER_BODY_LIMIT is invalid")
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .expect("SERVER_TIMEOUT is invalid")
            .parse()?,
    };

    let database = super::config_model::Database {
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL is invalid"),
    };

    let auth = super::config_model::Auth {
        jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET is invalid"),
        token_ttl_hours: std::env::var("JWT_TTL_HOURS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_HOURS),
    };

    let omise = super::config_model::Omise {
        secret_key: std::env::var("OMISE_SECRET_KEY").expect("OMISE_SECRET_KEY is invalid"),
        source_type: std::env::var("OMISE_SOURCE_TYPE")
            .unwrap_or_else(|_| "promptpay".to_string()),
        return_uri: std::env::var("PAYMENT_RETURN_URI")
            .unwrap_or_else(|_| "trailteller://payment-success".to_string()),
    };

    let weather = super::config_model::Weather {
        api_key: std::env::var("OPENWEATHER_API_KEY").expect("OPENWEATHER_API_KEY is invalid"),
    };

    Ok(DotEnvyConfig {
        server,
        database,
        auth,
        omise,
        weather,
    })
}
