//! application entry point

use crate::server::model::config::ServerConfig;
use anyhow::Context;
use log::info;
use std::env;
use std::path::Path;
use std::str::FromStr;
use derive_more::Display;

mod server;

#[actix_web::main()]
async fn main() -> anyhow::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    match env {
        Env::Prod | Env::Stg => {} // load in CI
        Env::Dev => {
            dotenvy::from_path(Path::new(".env.dev")).context("failed to load envs from dotenv files, aborting")?
        }
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // c. run app
    let config = ServerConfig::from_env()?;

    info!("App is starting in env={}, addr={}", env, config.addr);

    server::run(config).await
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    #[display("dev")]
    Dev,
    #[display("stg")]
    Stg,
    #[display("prod")]
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_env() {
        assert!(matches!("prod".parse::<Env>(), Ok(Env::Prod)));
        assert!(matches!("stg".parse::<Env>(), Ok(Env::Stg)));
        assert_eq!("staging".parse::<Env>().unwrap_err(), "Invalid Env: staging");
        assert_eq!(Env::Dev.to_string(), "dev");
    }
}
