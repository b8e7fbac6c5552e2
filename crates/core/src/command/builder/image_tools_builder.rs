//! `docker buildx imagetools` command builder

use crate::{
    command::{
        metadata::{MetadataKey, MetadataStore},
        service::ImageToolsService,
    },
    error::Result,
    provider::ImageToolsConfig,
    types::ImageToolsCommand,
};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// Collects image tools flags in insertion order and builds an [`ImageToolsService`]
#[derive(Debug, Clone, Default)]
pub struct ImageToolsBuilder {
    config: ImageToolsConfig,
}

impl ImageToolsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(self) -> Self {
        Self::new()
    }

    /// `create`, `inspect` or `prune`. Validated only at `build()`.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.config.command = command.into().trim().to_string();
        self
    }

    pub fn with_use_string_list(mut self, enabled: bool) -> Self {
        self.config.use_string_list = enabled;
        self
    }

    pub fn with_dry_run(mut self, enabled: bool) -> Self {
        self.config.dry_run = enabled;
        self
    }

    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.config.working_directory = if dir.as_os_str().is_empty() {
            None
        } else {
            Some(dir)
        };
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        super::upsert(&mut self.config.env, &key.into(), value.into());
        self
    }

    /// Append a value under `key`; an empty key adds a positional token
    pub fn add_metadata(mut self, key: impl Into<MetadataKey>, value: impl Into<String>) -> Self {
        self.config.metadata.add(key, value);
        self
    }

    /// Append a JSON value under `key`, rejecting `null` and objects
    pub fn add_metadata_json(mut self, key: impl Into<MetadataKey>, value: &Value) -> Result<Self> {
        self.config.metadata.add_json(key, value)?;
        Ok(self)
    }

    /// Replace every value under `key`
    pub fn set_metadata<I, S>(mut self, key: impl Into<MetadataKey>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.metadata.set(key, values);
        self
    }

    pub fn remove_metadata(mut self, key: &str) -> Self {
        self.config.metadata.remove(key);
        self
    }

    pub fn clear_metadata(mut self) -> Self {
        self.config.metadata.clear();
        self
    }

    /// Replace the whole metadata store
    pub fn with_metadata(mut self, metadata: MetadataStore) -> Self {
        self.config.metadata = metadata;
        self
    }

    /// `--tag <image>`
    pub fn with_tag(self, tag: impl Into<String>) -> Self {
        self.add_metadata("--tag", tag)
    }

    pub fn with_tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tags.into_iter().fold(self, |builder, tag| builder.with_tag(tag))
    }

    /// Positional source image
    pub fn with_source(self, source: impl Into<String>) -> Self {
        self.add_metadata(MetadataKey::Unkeyed, source)
    }

    pub fn with_sources<I, S>(self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        sources
            .into_iter()
            .fold(self, |builder, source| builder.with_source(source))
    }

    /// `--annotation <key=value>`
    pub fn with_annotation(self, annotation: impl Into<String>) -> Self {
        self.add_metadata("--annotation", annotation)
    }

    /// `--format <template>`, used by `inspect`
    pub fn with_format(self, format: impl Into<String>) -> Self {
        self.set_metadata("--format", [format.into()])
    }

    pub fn with_platform(self, platform: impl Into<String>) -> Self {
        self.add_metadata("--platform", platform)
    }

    pub fn build(&self) -> Result<ImageToolsService> {
        let command: ImageToolsCommand = self.config.command.parse()?;
        let mut config = self.config.clone();
        config.command = command.as_str().to_string();
        debug!(
            "Built imagetools service: command={}, metadata keys={}",
            config.command,
            config.metadata.size()
        );
        Ok(ImageToolsService::new(config))
    }
}
