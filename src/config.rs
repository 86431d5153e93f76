use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::services::password::PasswordScheme;

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub surrealdb: SurrealDbConfig,
    pub cors: CorsConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    /// Export spans to an OTLP collector in addition to stdout.
    pub otlp: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
    pub migration: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorsConfig {
    /// `"*"` allows any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SecurityConfig {
    pub password_scheme: PasswordScheme,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            service: ServiceConfig {
                name: "goticket-accounts".to_string(),
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                otlp: false,
            },
            surrealdb: SurrealDbConfig {
                host: "localhost".to_string(),
                port: 8000,
                username: "root".to_string(),
                password: "root".to_string(),
                namespace: "goticket".to_string(),
                database: "goticket".to_string(),
                migration: true,
            },
            cors: CorsConfig {
                allowed_origins: vec!["*".to_string()],
            },
            security: SecurityConfig {
                password_scheme: PasswordScheme::Plaintext,
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_| {
            let config = AppConfig::load()?;

            assert_eq!(config.server.port, 8080);
            assert_eq!(config.cors.allowed_origins, vec!["*".to_string()]);
            assert_eq!(config.security.password_scheme, PasswordScheme::Plaintext);
            assert!(!config.logging.otlp);

            Ok(())
        });
    }

    #[test]
    fn test_toml_and_env_overrides() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/default.toml",
                r#"
                [security]
                password_scheme = "argon2"

                [cors]
                allowed_origins = ["http://localhost:5173"]
                "#,
            )?;
            jail.set_env("APP_SURREALDB__PORT", "9000");
            jail.set_env("APP_LOGGING__LEVEL", "debug");

            let config = AppConfig::load()?;

            assert_eq!(config.security.password_scheme, PasswordScheme::Argon2);
            assert_eq!(
                config.cors.allowed_origins,
                vec!["http://localhost:5173".to_string()]
            );
            assert_eq!(config.surrealdb.port, 9000);
            assert_eq!(config.logging.level, "debug");

            Ok(())
        });
    }
}
