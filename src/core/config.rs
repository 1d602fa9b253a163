//! # Configuration
//!
//! Database settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.microjot/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! A `.env` file in the working directory is loaded by `main` before
//! resolution, so its values count as env vars.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MicrojotConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub table: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_USER: &str = "default_user";
pub const DEFAULT_PASSWORD: &str = "default_pass";
pub const DEFAULT_DATABASE: &str = "default_db";
pub const DEFAULT_TABLE: &str = "default_table";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Clone)]
pub struct ResolvedConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub table: TableName,
}

// Keep the password out of logs.
impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("table", &self.table)
            .finish()
    }
}

/// A table name that is safe to splice into SQL.
///
/// Identifiers cannot be bound as statement parameters, so the name is
/// restricted to `[A-Za-z0-9_$]` (optionally `schema.table`) and always
/// rendered backtick-quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        let parts: Vec<&str> = raw.split('.').collect();
        let valid = parts.len() <= 2
            && parts.iter().all(|part| {
                !part.is_empty()
                    && part.len() <= 64
                    && part
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
            });
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(ConfigError::InvalidTable(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Backtick-quoted form, e.g. `` `blog`.`posts` ``.
    pub fn quoted(&self) -> String {
        self.0
            .split('.')
            .map(|part| format!("`{part}`"))
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidPort(String),
    InvalidTable(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidPort(p) => write!(f, "invalid MYSQL_PORT: {p:?}"),
            ConfigError::InvalidTable(t) => write!(f, "invalid table name: {t:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.microjot/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".microjot").join("config.toml"))
}

/// Load config from `~/.microjot/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MicrojotConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MicrojotConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MicrojotConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MicrojotConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MicrojotConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# microjot configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars (including .env).

# [database]
# host = "localhost"         # Or set MYSQL_HOST
# port = 3306                # Or set MYSQL_PORT
# user = "default_user"      # Or set MYSQL_USER
# password = "default_pass"  # Or set MYSQL_PASSWORD
# database = "default_db"    # Or set MYSQL_DATABASE
# table = "default_table"    # Or set MYSQL_TABLE; must have text and date_time columns
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve against the process environment.
pub fn resolve(config: &MicrojotConfig) -> Result<ResolvedConfig, ConfigError> {
    resolve_with(config, |key| std::env::var(key).ok())
}

/// Resolve the final config by collapsing: defaults → config file → env vars.
///
/// `env` looks up a variable by name; tests pass a closure over a map.
pub fn resolve_with<F>(config: &MicrojotConfig, env: F) -> Result<ResolvedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let db = &config.database;

    let pick = |key: &str, file: &Option<String>, default: &str| {
        env(key)
            .or_else(|| file.clone())
            .unwrap_or_else(|| default.to_string())
    };

    let port = match env("MYSQL_PORT") {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw))?,
        None => db.port.unwrap_or(DEFAULT_PORT),
    };

    let table = TableName::parse(&pick("MYSQL_TABLE", &db.table, DEFAULT_TABLE))?;

    let resolved = ResolvedConfig {
        host: pick("MYSQL_HOST", &db.host, DEFAULT_HOST),
        port,
        user: pick("MYSQL_USER", &db.user, DEFAULT_USER),
        password: pick("MYSQL_PASSWORD", &db.password, DEFAULT_PASSWORD),
        database: pick("MYSQL_DATABASE", &db.database, DEFAULT_DATABASE),
        table,
    };
    debug!("Resolved config: {:?}", resolved);
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&MicrojotConfig::default(), env_from(&[])).unwrap();
        assert_eq!(resolved.host, "localhost");
        assert_eq!(resolved.port, 3306);
        assert_eq!(resolved.user, "default_user");
        assert_eq!(resolved.password, "default_pass");
        assert_eq!(resolved.database, "default_db");
        assert_eq!(resolved.table.as_str(), "default_table");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MicrojotConfig {
            database: DatabaseConfig {
                host: Some("db.internal".to_string()),
                port: Some(3307),
                table: Some("posts".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve_with(&config, env_from(&[])).unwrap();
        assert_eq!(resolved.host, "db.internal");
        assert_eq!(resolved.port, 3307);
        assert_eq!(resolved.table.as_str(), "posts");
        assert_eq!(resolved.user, DEFAULT_USER);
    }

    #[test]
    fn test_resolve_env_wins_over_file() {
        let config = MicrojotConfig {
            database: DatabaseConfig {
                host: Some("from-file".to_string()),
                user: Some("file-user".to_string()),
                port: Some(3307),
                ..Default::default()
            },
        };
        let env = env_from(&[
            ("MYSQL_HOST", "from-env"),
            ("MYSQL_PORT", "3310"),
            ("MYSQL_PASSWORD", "s3cret"),
            ("MYSQL_DATABASE", "blog"),
            ("MYSQL_TABLE", "micro_posts"),
        ]);
        let resolved = resolve_with(&config, env).unwrap();
        assert_eq!(resolved.host, "from-env");
        assert_eq!(resolved.port, 3310);
        assert_eq!(resolved.user, "file-user");
        assert_eq!(resolved.password, "s3cret");
        assert_eq!(resolved.database, "blog");
        assert_eq!(resolved.table.as_str(), "micro_posts");
    }

    #[test]
    fn test_resolve_rejects_bad_port() {
        let err = resolve_with(&MicrojotConfig::default(), env_from(&[("MYSQL_PORT", "abc")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "abc"));
    }

    #[test]
    fn test_resolve_rejects_injected_table() {
        let err = resolve_with(
            &MicrojotConfig::default(),
            env_from(&[("MYSQL_TABLE", "posts; DROP TABLE posts")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTable(_)));
    }

    #[test]
    fn test_table_name_quoting() {
        assert_eq!(TableName::parse("posts").unwrap().quoted(), "`posts`");
        assert_eq!(
            TableName::parse("blog.posts").unwrap().quoted(),
            "`blog`.`posts`"
        );
        assert!(TableName::parse("").is_err());
        assert!(TableName::parse("a.b.c").is_err());
        assert!(TableName::parse("po`sts").is_err());
        assert!(TableName::parse("blog.").is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let resolved = resolve_with(
            &MicrojotConfig::default(),
            env_from(&[("MYSQL_PASSWORD", "hunter2")]),
        )
        .unwrap();
        let printed = format!("{:?}", resolved);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("***"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[database]
host = "10.0.0.5"
port = 3307
"#;
        let config: MicrojotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.database.host.as_deref(), Some("10.0.0.5"));
        assert_eq!(config.database.port, Some(3307));
        assert!(config.database.table.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: MicrojotConfig = toml::from_str("").unwrap();
        assert!(config.database.host.is_none());
    }
}
