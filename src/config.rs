use std::{fs, path::Path};

use serde::Deserialize;

use crate::{Result, TrimmerError, model::NodeMeta};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// fail loading when a record violates the node schema instead of only reporting it, defaults to false
    pub strict_schema: bool,
    /// run change effects once after loading, as the editor does on mount, defaults to true
    pub fire_effects_on_mount: bool,
    /// node meta for nodes saved without one
    pub placeholder: Option<PlaceholderConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    /// node title
    pub title: String,
    /// node icon url
    pub icon: String,
    pub sub_title: String,
    pub description: String,
    /// header color, e.g. "#3071F2"
    pub main_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_schema: false,
            fire_effects_on_mount: true,
            placeholder: None,
        }
    }
}

impl From<PlaceholderConfig> for NodeMeta {
    fn from(val: PlaceholderConfig) -> Self {
        NodeMeta {
            title: val.title,
            icon: val.icon,
            sub_title: val.sub_title,
            description: val.description,
            main_color: val.main_color,
        }
    }
}

impl Config {
    pub fn create<T: AsRef<Path>>(path: T) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref()).map_err(|e| TrimmerError::Config(format!("failed to load config file {:?}: {}", path.as_ref(), e)))?;

        Self::load_from_str(data.as_str())
    }

    pub fn load_from_str(toml_str: &str) -> Result<Self> {
        let config = toml::from_str::<Config>(toml_str)?;
        Ok(config)
    }

    /// Placeholder node meta, if one is configured.
    pub fn placeholder_meta(&self) -> Option<NodeMeta> {
        self.placeholder.clone().map(NodeMeta::from)
    }
}

#[cfg(test)]
mod test {
    use crate::Config;

    #[test]
    fn test_config_deserialize() {
        let toml_str = r##"
        strict_schema = true
        fire_effects_on_mount = false

        [placeholder]
        title = "Trim text"
        main_color = "#00B2B2"
        "##;
        let config = Config::load_from_str(toml_str).unwrap();
        assert!(config.strict_schema);
        assert!(!config.fire_effects_on_mount);

        let meta = config.placeholder_meta().unwrap();
        assert_eq!(meta.title, "Trim text");
        assert_eq!(meta.main_color, "#00B2B2");
        assert!(meta.icon.is_empty());
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert!(!config.strict_schema);
        assert!(config.fire_effects_on_mount);
        assert!(config.placeholder_meta().is_none());
    }

    #[test]
    fn test_config_invalid() {
        let result = Config::load_from_str("strict_schema = \"yes\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_missing_file() {
        let result = Config::create("/nonexistent/text-trimmer.toml");
        assert!(result.unwrap_err().to_string().contains("failed to load config file"));
    }
}
