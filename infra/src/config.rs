//! Configuration loading for the client.
//!
//! Sources are layered, later ones overriding earlier ones:
//! 1. defaults for the environment named by `SHOP_ENV`;
//! 2. a TOML file: the given path, or else `shop.<environment>.toml` in the
//!    working directory when it exists;
//! 3. `SHOP__*` environment variables, `__` separating nested keys
//!    (e.g. `SHOP__API__BASE_URL`).
//!
//! A `.env` file in the working directory is read first, if present.

use ::config::{Config, Environment, File, FileFormat};
use sm_shared::ClientConfig;
use std::path::{Path, PathBuf};

use crate::InfrastructureError;

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "SHOP";

/// Load the client configuration
pub fn load_config(path: Option<&Path>) -> Result<ClientConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    let defaults = ClientConfig::from_env();
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().map_err(|err| {
                InfrastructureError::Config(format!("Cannot read working directory: {}", err))
            })?;
            discover(&defaults, &cwd)
        }
    };
    let config = build(
        &defaults,
        path.as_deref(),
        Some(Environment::with_prefix(ENV_PREFIX)),
    )?;

    tracing::debug!(
        environment = %config.environment,
        base_url = %config.api.base_url,
        language = %config.language,
        "Client configuration loaded"
    );
    Ok(config)
}

/// Per-environment file in `dir`, if one exists
pub(crate) fn discover(defaults: &ClientConfig, dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(defaults.environment.config_file());
    if candidate.is_file() {
        tracing::debug!(path = %candidate.display(), "Using environment config file");
        Some(candidate)
    } else {
        None
    }
}

/// Layer the file and environment sources over `defaults`
pub(crate) fn build(
    defaults: &ClientConfig,
    path: Option<&Path>,
    env: Option<Environment>,
) -> Result<ClientConfig, InfrastructureError> {
    let defaults_json = serde_json::to_string(defaults)?;
    let mut builder = Config::builder().add_source(File::from_str(&defaults_json, FileFormat::Json));

    if let Some(path) = path {
        if !path.exists() {
            return Err(InfrastructureError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.add_source(File::from(path).format(FileFormat::Toml));
    }

    if let Some(env) = env {
        builder = builder.add_source(
            env.prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );
    }

    Ok(builder.build()?.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm_shared::{Environment as AppEnvironment, Language};
    use std::io::Write;

    #[test]
    fn test_defaults_without_sources() {
        let defaults = ClientConfig::development();
        let config = build(&defaults, None, None).unwrap();
        assert_eq!(config, defaults);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
language = "id"

[api]
base_url = "https://staging.shopmobile.id"
read_timeout_secs = 45
"#
        )
        .unwrap();

        let config = build(&ClientConfig::development(), Some(file.path()), None).unwrap();

        assert_eq!(config.language, Language::Indonesian);
        assert_eq!(config.api.base_url, "https://staging.shopmobile.id");
        assert_eq!(config.api.read_timeout_secs, 45);
        assert_eq!(config.api.api_prefix, "/api/v1");
        assert_eq!(config.environment, AppEnvironment::Development);
    }

    #[test]
    fn test_discovers_environment_file() {
        let dir = tempfile::tempdir().unwrap();
        let defaults = ClientConfig::production();
        assert_eq!(discover(&defaults, dir.path()), None);

        std::fs::write(
            dir.path().join("shop.production.toml"),
            "[api]\nbase_url = \"https://discovered.shopmobile.id\"\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("shop.development.toml"), "language = \"id\"\n").unwrap();

        let path = discover(&defaults, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("shop.production.toml"));

        let config = build(&defaults, Some(&path), None).unwrap();
        assert_eq!(config.api.base_url, "https://discovered.shopmobile.id");
        assert_eq!(config.environment, AppEnvironment::Production);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = build(
            &ClientConfig::development(),
            Some(Path::new("/nonexistent/shop.toml")),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, InfrastructureError::Config(_)));
    }

    #[test]
    fn test_env_overrides_nested_keys() {
        let vars = std::collections::HashMap::from([
            ("SHOP__API__BASE_URL".to_string(), "https://env.shopmobile.id".to_string()),
            ("SHOP__LANGUAGE".to_string(), "id".to_string()),
        ]);
        let env = Environment::with_prefix(ENV_PREFIX).source(Some(vars));

        let config = build(&ClientConfig::development(), None, Some(env)).unwrap();

        assert_eq!(config.api.base_url, "https://env.shopmobile.id");
        assert_eq!(config.language, Language::Indonesian);
    }
}
