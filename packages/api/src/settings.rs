//! # Server settings
//!
//! Layered with the `config` crate, later sources overriding earlier ones:
//!
//! 1. built-in defaults (a local MongoDB, database `admin_dashboard`);
//! 2. an optional `config.toml` in the working directory;
//! 3. environment variables split on `_`, e.g. `DATABASE_URI`, `DATABASE_NAME`;
//! 4. the bare `MONGO` variable, which replaces `database.uri` when set.
//!
//! Unrelated variables (`MONGO_URI`, `MONGO_INITDB_ROOT_USERNAME`, …) land
//! outside the `database` table and are ignored.
//!
//! ```toml
//! [database]
//! uri = "mongodb://db.internal:27017"
//! name = "admin_dashboard"
//! ```

use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

const DEFAULT_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "admin_dashboard";

/// Where the user documents live.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Database {
    /// MongoDB connection string.
    pub uri: String,
    /// Database holding the `users` collection.
    pub name: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.into(),
            name: DEFAULT_DATABASE.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Settings {
    pub database: Database,
}

impl Settings {
    /// Load from `config.toml` and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::layered(
            File::with_name("config.toml")
                .format(FileFormat::Toml)
                .required(false),
            Environment::default().separator("_"),
            std::env::var("MONGO").ok(),
        )
    }

    /// Defaults overlaid with a TOML document. Used by tests and tooling.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// `mongo` is the bare `MONGO` variable; when non-blank it replaces
    /// `database.uri` regardless of the other sources.
    fn layered<F>(file: F, env: Environment, mongo: Option<String>) -> Result<Self, ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let mongo = mongo.filter(|uri| !uri.trim().is_empty());

        Self::defaults()?
            .add_source(file)
            .add_source(env)
            .set_override_option("database.uri", mongo)?
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("database.uri", DEFAULT_URI)?
            .set_default("database.name", DEFAULT_DATABASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().separator("_").source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.database, Database::default());
        assert_eq!(settings.database.uri, "mongodb://localhost:27017");
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let settings = Settings::from_toml(
            r#"
            [database]
            uri = "mongodb://db.internal:27017"
            "#,
        )
        .unwrap();
        assert_eq!(settings.database.uri, "mongodb://db.internal:27017");
        assert_eq!(settings.database.name, "admin_dashboard");
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = File::from_str("[database]\nname = \"from_file\"", FileFormat::Toml);
        let settings = Settings::layered(
            file,
            env(&[("DATABASE_NAME", "from_env"), ("DATABASE_URI", "mongodb://env:27017")]),
            None,
        )
        .unwrap();
        assert_eq!(settings.database.name, "from_env");
        assert_eq!(settings.database.uri, "mongodb://env:27017");
    }

    #[test]
    fn test_mongo_variable_wins() {
        let settings = Settings::layered(
            File::from_str("", FileFormat::Toml),
            env(&[("DATABASE_URI", "mongodb://env:27017")]),
            Some("mongodb+srv://cluster.example.net/app".to_string()),
        )
        .unwrap();
        assert_eq!(settings.database.uri, "mongodb+srv://cluster.example.net/app");
    }

    #[test]
    fn test_unrelated_mongo_variables_are_ignored() {
        let settings = Settings::layered(
            File::from_str("", FileFormat::Toml),
            env(&[
                ("MONGO", "mongodb://prod:27017"),
                ("MONGO_URI", "mongodb://other:27017"),
                ("MONGO_INITDB_ROOT_USERNAME", "root"),
            ]),
            Some("mongodb://prod:27017".to_string()),
        )
        .unwrap();
        assert_eq!(settings.database.uri, "mongodb://prod:27017");
        assert_eq!(settings.database.name, "admin_dashboard");
    }

    #[test]
    fn test_blank_mongo_variable_is_ignored() {
        let settings = Settings::layered(
            File::from_str("", FileFormat::Toml),
            env(&[]),
            Some("  ".to_string()),
        )
        .unwrap();
        assert_eq!(settings.database.uri, "mongodb://localhost:27017");
    }
}
