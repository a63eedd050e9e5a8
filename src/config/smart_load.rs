use figment::providers::{Format, Json, Toml, Yaml};
use std::path::Path;

/// Pick a figment provider for a config file from its extension.
///
/// Unknown extensions fall back to sniffing the content, then to TOML.
pub fn auto<P: AsRef<Path>>(path: P) -> impl figment::Provider {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let format = match extension.as_str() {
        "toml" => ConfigFileFormat::Toml,
        "json" => ConfigFileFormat::Json,
        "yaml" | "yml" => ConfigFileFormat::Yaml,
        _ => {
            let detected = std::fs::read_to_string(path)
                .ok()
                .and_then(|content| detect_format_from_content(&content));
            tracing::debug!(
                "config {} has no known extension, detected {:?}",
                path.display(),
                detected
            );
            detected.unwrap_or(ConfigFileFormat::Toml)
        }
    };

    match format {
        ConfigFileFormat::Toml => SmartProvider::Toml(Toml::file(path)),
        ConfigFileFormat::Json => SmartProvider::Json(Json::file(path)),
        ConfigFileFormat::Yaml => SmartProvider::Yaml(Yaml::file(path)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFileFormat {
    Toml,
    Json,
    Yaml,
}

enum SmartProvider {
    Toml(figment::providers::Data<Toml>),
    Json(figment::providers::Data<Json>),
    Yaml(figment::providers::Data<Yaml>),
}

impl figment::Provider for SmartProvider {
    fn metadata(&self) -> figment::Metadata {
        match self {
            SmartProvider::Toml(p) => p.metadata(),
            SmartProvider::Json(p) => p.metadata(),
            SmartProvider::Yaml(p) => p.metadata(),
        }
    }

    fn data(
        &self,
    ) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, figment::Error> {
        match self {
            SmartProvider::Toml(p) => p.data(),
            SmartProvider::Json(p) => p.data(),
            SmartProvider::Yaml(p) => p.data(),
        }
    }
}

fn detect_format_from_content(content: &str) -> Option<ConfigFileFormat> {
    let trimmed = content.trim();

    if (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']') && !trimmed.contains('='))
    {
        return Some(ConfigFileFormat::Json);
    }

    // TOML tables or `key = value` before YAML, since TOML arrays hold no colons
    if trimmed.lines().any(|line| {
        let line = line.trim();
        (line.starts_with('[') && line.ends_with(']') && !line.contains(','))
            || (line.contains('=') && !line.contains(':'))
    }) {
        return Some(ConfigFileFormat::Toml);
    }

    if trimmed.contains("---") || trimmed.lines().any(|line| line.contains(':')) {
        return Some(ConfigFileFormat::Yaml);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            detect_format_from_content(r#"{"input_dir": "lists"}"#),
            Some(ConfigFileFormat::Json)
        );
        assert_eq!(
            detect_format_from_content("input_dir: lists"),
            Some(ConfigFileFormat::Yaml)
        );
        assert_eq!(
            detect_format_from_content("input_dir = \"lists\""),
            Some(ConfigFileFormat::Toml)
        );
        assert_eq!(
            detect_format_from_content("sources = [\"fx\", \"map\"]"),
            Some(ConfigFileFormat::Toml)
        );
        assert_eq!(detect_format_from_content("plain words"), None);
    }
}
