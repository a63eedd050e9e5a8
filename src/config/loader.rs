use anyhow::{Context, Result, bail};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use std::path::Path;

use super::{CliOverrides, FilterConfig, overrides::prune_empty, smart_load};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

const ENV_PREFIX: &str = "EXTFILTER_";

/// Output formats for `config show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl FilterConfig {
    /// Load the layered configuration.
    ///
    /// Priority, lowest first: embedded defaults, user config, project config
    /// (or only `custom_config` when given), `EXTFILTER_*` environment
    /// variables, CLI overrides.
    pub fn load(custom_config: Option<&str>, cli_overrides: Option<&CliOverrides>) -> Result<Self> {
        let figment = Self::figment(custom_config, cli_overrides)?;
        let config: FilterConfig = figment
            .extract()
            .context("Failed to parse configuration")?;
        tracing::debug!(
            sources = config.sources.len(),
            extensions = config.extensions.len(),
            input_dir = %config.input_dir,
            "configuration loaded"
        );
        Ok(config.validate()?)
    }

    /// Build the merged figment without extracting it
    pub fn figment(
        custom_config: Option<&str>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Figment> {
        tracing::trace!("CONFIG LOAD: Starting");

        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom_config {
            if !Path::new(custom_path).is_file() {
                bail!("Config file not found: {custom_path}");
            }
            tracing::debug!("using custom config {custom_path}");
            figment = figment.merge(smart_load::auto(custom_path));
        } else {
            let user_base = Self::user_config_base_path();
            figment = figment
                .merge(Toml::file(format!("{user_base}.toml")))
                .merge(Json::file(format!("{user_base}.json")))
                .merge(Yaml::file(format!("{user_base}.yaml")))
                .merge(Yaml::file(format!("{user_base}.yml")))
                .merge(Toml::file("extfilter.toml"))
                .merge(Json::file("extfilter.json"))
                .merge(Yaml::file("extfilter.yaml"))
                .merge(Yaml::file("extfilter.yml"));
        }

        // Environment variables outrank every file
        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        if let Some(overrides) = cli_overrides {
            tracing::trace!("CONFIG LOAD: Applying CLI overrides");
            figment = figment.merge(Serialized::defaults(prune_empty(overrides)));
        }

        Ok(figment)
    }

    /// Serialize the configuration for display
    pub fn export(&self, format: ConfigFormat) -> Result<String> {
        let output = match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(output)
    }

    fn user_config_base_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{home}/.config/extfilter/config"),
            Err(_) => "~/.config/extfilter/config".to_string(),
        }
    }
}
