use serde::Serialize;
use std::path::{Path, PathBuf};

/// Frozen configuration for one Terraform-shaped invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IacConfig {
    pub(crate) command: String,
    pub(crate) executor: String,
    pub(crate) working_directory: Option<PathBuf>,
    pub(crate) env: Vec<(String, String)>,
    pub(crate) variables: Vec<(String, String)>,
    pub(crate) var_files: Vec<String>,
    pub(crate) backend_config: Vec<(String, String)>,
    pub(crate) targets: Vec<String>,
    pub(crate) auto_approve: bool,
    pub(crate) dry_run: bool,
    pub(crate) no_color: bool,
    pub(crate) compact_warnings: bool,
    pub(crate) refresh: Option<bool>,
    pub(crate) reconfigure: bool,
    pub(crate) migrate_state: bool,
    pub(crate) plan_file: Option<String>,
    pub(crate) out_file: Option<String>,
    pub(crate) parallelism: Option<u32>,
    pub(crate) lock_timeout: Option<String>,
}

impl IacConfig {
    pub(crate) fn with_executor(executor: &str) -> Self {
        Self {
            executor: executor.to_string(),
            ..Self::default()
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn executor(&self) -> &str {
        &self.executor
    }

    /// Directory the process runs in. Never rendered as an argument.
    pub fn working_directory(&self) -> Option<&Path> {
        self.working_directory.as_deref()
    }

    pub fn env(&self) -> &[(String, String)] {
        &self.env
    }

    pub fn variables(&self) -> &[(String, String)] {
        &self.variables
    }

    pub fn var_files(&self) -> &[String] {
        &self.var_files
    }

    pub fn backend_config(&self) -> &[(String, String)] {
        &self.backend_config
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn auto_approve(&self) -> bool {
        self.auto_approve
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn no_color(&self) -> bool {
        self.no_color
    }

    pub fn compact_warnings(&self) -> bool {
        self.compact_warnings
    }

    /// `None` leaves Terraform's own default in place
    pub fn refresh(&self) -> Option<bool> {
        self.refresh
    }

    pub fn reconfigure(&self) -> bool {
        self.reconfigure
    }

    pub fn migrate_state(&self) -> bool {
        self.migrate_state
    }

    pub fn plan_file(&self) -> Option<&str> {
        self.plan_file.as_deref()
    }

    pub fn out_file(&self) -> Option<&str> {
        self.out_file.as_deref()
    }

    pub fn parallelism(&self) -> Option<u32> {
        self.parallelism
    }

    pub fn lock_timeout(&self) -> Option<&str> {
        self.lock_timeout.as_deref()
    }
}
