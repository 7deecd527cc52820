//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["searchlight.toml", ".searchlight.toml"];

/// Prefix of environment overrides, e.g. `SEARCHLIGHT_FETCH__LIMIT=3`
const ENV_PREFIX: &str = "SEARCHLIGHT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SEARCHLIGHT_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./searchlight.toml` or `./.searchlight.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/searchlight/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path.map(PathBuf::as_path))
            .extract()
            .map_err(Box::new)
    }

    /// Build the merged figment without extracting it.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/searchlight/config.toml if set,
    /// otherwise falls back to ~/.config/searchlight/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("searchlight").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let tag = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", tag, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./searchlight.toml or ./.searchlight.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use searchlight_domain::{RetrievalMode, SearchBackend};

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.fetch.limit, 2);
        assert_eq!(config.search.provider, SearchBackend::SerpApi);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("searchlight"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "searchlight.toml",
                r#"
[search]
mode = "summary"

[fetch]
limit = 5
"#,
            )?;

            let config: FileConfig = ConfigLoader::figment(None).extract()?;
            assert_eq!(config.search.mode, RetrievalMode::Summary);
            assert_eq!(config.fetch.limit, 5);
            assert_eq!(config.fetch.timeout_seconds, 5);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".searchlight.toml", "[fetch]\nlimit = 5\n")?;
            jail.create_file("custom.toml", "[fetch]\nlimit = 1\n")?;

            let config: FileConfig =
                ConfigLoader::figment(Some(Path::new("custom.toml"))).extract()?;
            assert_eq!(config.fetch.limit, 1);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("searchlight.toml", "[model]\ntemperature = 0.9\n")?;
            jail.set_env("SEARCHLIGHT_MODEL__TEMPERATURE", "0.4");
            jail.set_env("SEARCHLIGHT_FETCH__PARALLEL", "true");

            let config: FileConfig = ConfigLoader::figment(None).extract()?;
            assert_eq!(config.model.temperature, 0.4);
            assert!(config.fetch.parallel);
            Ok(())
        });
    }
}
