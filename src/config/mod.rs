mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./seedforge.toml",
        "~/.config/seedforge/config.toml",
        "/etc/seedforge/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.naming.default_group.trim().is_empty() {
        anyhow::bail!("naming.default_group cannot be empty");
    }

    if config.probe.mediainfo.trim().is_empty() {
        anyhow::bail!("probe.mediainfo cannot be empty");
    }

    if let Some(path) = &config.taxonomy.path {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        if !Path::new(&expanded).exists() {
            tracing::warn!("Taxonomy file does not exist: {:?}", path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.naming.default_group, "NoTag");
        assert_eq!(config.probe.mediainfo, "mediainfo");
        assert!(config.probe.enabled);
        assert_eq!(config.language.default_region, FrenchRegion::France);
        assert!(config.language.quebec_markers.iter().any(|m| m == "canada"));
    }

    #[test]
    fn test_load_partial_config() {
        let file = write_config(
            r#"
[naming]
default_group = "SEEDFORGE"

[language]
default_region = "quebec"
"#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.naming.default_group, "SEEDFORGE");
        assert_eq!(config.language.default_region, FrenchRegion::Quebec);
        assert!(!config.language.france_markers.is_empty());
        assert!(config.probe.enabled);
    }

    #[test]
    fn test_rejects_empty_group() {
        let file = write_config("[naming]\ndefault_group = \"  \"\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("default_group"));
    }

    #[test]
    fn test_rejects_empty_mediainfo() {
        let file = write_config("[probe]\nmediainfo = \"\"\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_missing_taxonomy_only_warns() {
        let file = write_config("[taxonomy]\npath = \"/nonexistent/taxonomy.json\"\n");
        let config = load_config(file.path()).unwrap();
        assert!(config.taxonomy.path.is_some());
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_config("[naming\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_explicit_missing_path_fails() {
        assert!(load_config_or_default(Some(Path::new("/nonexistent/seedforge.toml"))).is_err());
    }
}
