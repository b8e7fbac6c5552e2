use crate::command::metadata::MetadataStore;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DOCKER_EXECUTOR: &str = "docker";

pub const IMAGE_TOOLS_SUB_COMMANDS: &[&str] = &["buildx", "imagetools"];

/// Frozen configuration for one `docker buildx imagetools` invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageToolsConfig {
    pub(crate) command: String,
    pub(crate) executor: String,
    pub(crate) sub_commands: Vec<String>,
    pub(crate) use_string_list: bool,
    pub(crate) dry_run: bool,
    pub(crate) working_directory: Option<PathBuf>,
    pub(crate) env: Vec<(String, String)>,
    pub(crate) metadata: MetadataStore,
}

impl Default for ImageToolsConfig {
    fn default() -> Self {
        Self {
            command: String::new(),
            executor: DOCKER_EXECUTOR.to_string(),
            sub_commands: IMAGE_TOOLS_SUB_COMMANDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            use_string_list: false,
            dry_run: false,
            working_directory: None,
            env: Vec::new(),
            metadata: MetadataStore::new(),
        }
    }
}

impl ImageToolsConfig {
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn executor(&self) -> &str {
        &self.executor
    }

    pub fn sub_commands(&self) -> &[String] {
        &self.sub_commands
    }

    /// Display the command as a token list instead of a single line
    pub fn use_string_list(&self) -> bool {
        self.use_string_list
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn working_directory(&self) -> Option<&Path> {
        self.working_directory.as_deref()
    }

    pub fn env(&self) -> &[(String, String)] {
        &self.env
    }

    pub fn metadata(&self) -> &MetadataStore {
        &self.metadata
    }
}
