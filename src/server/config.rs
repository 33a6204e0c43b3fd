use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_ADMIN_NAME: &str = "Super Admin";

/// Credentials for the super admin created when the database has none.
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    pub name: String,
}

pub struct Config {
    pub database_url: String,

    /// Browser origin allowed to make credentialed cross-origin requests.
    pub cors_origin: String,
    /// Mark the session cookie `Secure`; enable when served over HTTPS.
    pub cookie_secure: bool,

    pub admin_seed: Option<AdminSeed>,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let admin_seed = match (
            std::env::var("ADMIN_EMAIL").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        ) {
            (Some(email), Some(password)) => Some(AdminSeed {
                email,
                password,
                name: std::env::var("ADMIN_NAME")
                    .unwrap_or_else(|_| DEFAULT_ADMIN_NAME.to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
            cookie_secure: bool_var("COOKIE_SECURE")?,
            admin_seed,
            seed_demo_data: bool_var("SEED_DEMO_DATA")?,
        })
    }
}

/// Reads an optional boolean flag, defaulting to `false` when unset.
fn bool_var(name: &str) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Err(_) => Ok(false),
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "" | "0" | "false" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        },
    }
}
