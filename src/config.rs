use crate::utils::constants::DEFAULT_PORT;
use crate::utils::get_env::{env_flag, get_env_var};
use std::path::{Path, PathBuf};

/// Server configuration resolved from the environment (`.env` honored).
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Production mode serves the pre-built client alongside the API.
    pub production: bool,
    pub client_dist: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = get_env_var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let production = env_flag("PRODUCTION")
            || matches!(std::env::var("APP_ENV").as_deref(), Ok("production"));

        let client_dist = get_env_var("CLIENT_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("client/dist"));

        Self {
            port,
            production,
            client_dist,
        }
    }

    /// Directory of built client assets, present only in production mode.
    pub fn static_assets(&self) -> Option<&Path> {
        self.production.then(|| self.client_dist.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_assets_gated_on_production() {
        let mut config = Config {
            port: DEFAULT_PORT,
            production: false,
            client_dist: PathBuf::from("client/dist"),
        };
        assert!(config.static_assets().is_none());

        config.production = true;
        assert_eq!(
            config.static_assets(),
            Some(Path::new("client/dist"))
        );
    }
}
