use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("JWT_SECRET must not be empty")]
    EmptySecret,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

impl JwtConfig {
    /// The signing secret is required and must be non-empty; a blank secret
    /// would make every token forgeable.
    pub fn new(secret: String, ttl_minutes: i64) -> Result<Self, ConfigError> {
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(Self {
            secret,
            ttl_minutes,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from the process environment, once, at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;
        let ttl_minutes = std::env::var("JWT_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(60);
        Ok(Self {
            database_url,
            jwt: JwtConfig::new(secret, ttl_minutes)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_secret_is_rejected() {
        let err = JwtConfig::new("   ".into(), 60).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySecret));
    }

    #[test]
    fn non_empty_secret_is_accepted() {
        let cfg = JwtConfig::new("dev-secret".into(), 60).expect("valid config");
        assert_eq!(cfg.ttl_minutes, 60);
    }
}
