use std::env;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
}

/// Owner details shown in the navigation, contact section and footer.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteProfile {
    pub owner: String,
    pub contact_email: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub cv_url: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            owner: "Your Name".to_string(),
            contact_email: "your@email.com".to_string(),
            linkedin_url: "https://linkedin.com".to_string(),
            github_url: "https://github.com".to_string(),
            cv_url: "https://example.com/cv.pdf".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Postgres backend. Without it the site reads from `seed_file`.
    pub database_url: Option<String>,
    pub seed_file: Option<PathBuf>,
    pub asset_base_url: Option<String>,
    pub site: SiteProfile,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = get("HOST").ok_or(ConfigError::Missing("HOST"))?;
        let port_raw = get("PORT").ok_or(ConfigError::Missing("PORT"))?;
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        let defaults = SiteProfile::default();
        let site = SiteProfile {
            owner: get("SITE_OWNER").unwrap_or(defaults.owner),
            contact_email: get("CONTACT_EMAIL").unwrap_or(defaults.contact_email),
            linkedin_url: get("LINKEDIN_URL").unwrap_or(defaults.linkedin_url),
            github_url: get("GITHUB_URL").unwrap_or(defaults.github_url),
            cv_url: get("CV_URL").unwrap_or(defaults.cv_url),
        };

        Ok(Self {
            host,
            port,
            database_url: get("DATABASE_URL"),
            seed_file: get("SEED_FILE").map(PathBuf::from),
            asset_base_url: get("ASSET_BASE_URL"),
            site,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
