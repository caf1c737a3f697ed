use std::path::Path;

use crate::{Config, FormEngine, Result, config::PlaceholderConfig, form::NodeForm, model::NodeMeta};

#[derive(Default)]
pub struct FormEngineBuilder {
    config: Config,
}

impl FormEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a TOML config file.
    pub fn from_file<T: AsRef<Path>>(path: T) -> Result<Self> {
        Ok(Self {
            config: Config::create(path)?,
        })
    }

    pub fn config(
        mut self,
        config: Config,
    ) -> Self {
        self.config = config;
        self
    }

    pub fn strict_schema(
        mut self,
        strict: bool,
    ) -> Self {
        self.config.strict_schema = strict;
        self
    }

    pub fn fire_effects_on_mount(
        mut self,
        fire: bool,
    ) -> Self {
        self.config.fire_effects_on_mount = fire;
        self
    }

    pub fn placeholder(
        mut self,
        meta: NodeMeta,
    ) -> Self {
        self.config.placeholder = Some(PlaceholderConfig {
            title: meta.title,
            icon: meta.icon,
            sub_title: meta.sub_title,
            description: meta.description,
            main_color: meta.main_color,
        });
        self
    }

    pub fn build<F: NodeForm>(&self) -> FormEngine<F> {
        FormEngine::new(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrimmerForm;

    #[test]
    fn test_builder_overrides() {
        let engine = FormEngineBuilder::new().strict_schema(true).fire_effects_on_mount(false).placeholder(NodeMeta::new("Trim")).build::<TrimmerForm>();

        assert!(engine.config().strict_schema);
        assert!(!engine.config().fire_effects_on_mount);
        assert_eq!(engine.config().placeholder_meta(), Some(NodeMeta::new("Trim")));
    }

    #[test]
    fn test_builder_from_missing_file() {
        assert!(FormEngineBuilder::from_file("/nonexistent/text-trimmer.toml").is_err());
    }
}
