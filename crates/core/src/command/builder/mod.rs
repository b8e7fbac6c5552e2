//! Fluent builders that collect configuration and freeze it into services
//!
//! # Example
//! ```
//! use iac_composer_core::command::builder::{IacBuilder, TerraformBuilder};
//! use iac_composer_core::command::CommandFormatter;
//!
//! let service = TerraformBuilder::new()
//!     .with_command("plan")
//!     .with_target("module.vpc")
//!     .with_out_file("plan.tfplan")
//!     .build()?;
//! assert_eq!(
//!     service.to_command_string(),
//!     "terraform plan -target module.vpc -out plan.tfplan"
//! );
//! # Ok::<(), iac_composer_core::Error>(())
//! ```

mod image_tools_builder;
mod terraform_builder;
mod terragrunt_builder;

pub use self::image_tools_builder::ImageToolsBuilder;
pub use self::terraform_builder::TerraformBuilder;
pub use self::terragrunt_builder::TerragruntBuilder;

use crate::provider::IacConfig;
use std::path::PathBuf;
use tracing::debug;

/// Trimmed value, or `None` when blank
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Insert or replace `key`, keeping the position of the first insertion
pub(crate) fn upsert(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    let Some(key) = non_blank(key) else {
        debug!("Dropping entry with blank key");
        return;
    };
    match pairs.iter_mut().find(|(existing, _)| *existing == key) {
        Some(pair) => pair.1 = value,
        None => pairs.push((key, value)),
    }
}

pub(crate) fn push_non_blank(items: &mut Vec<String>, value: &str) {
    match non_blank(value) {
        Some(value) => items.push(value),
        None => debug!("Dropping blank list entry"),
    }
}

/// Chain methods shared by every Terraform-shaped builder.
///
/// Blank scalars and list entries are treated as absent. Nothing here checks
/// whether a flag fits the command; unsupported flags are filtered when the
/// arguments are assembled.
pub trait IacBuilder: Sized {
    /// Mutable access to the configuration being collected
    fn iac_config_mut(&mut self) -> &mut IacConfig;

    /// Command to run. Validated only at `build()`.
    fn with_command(mut self, command: impl Into<String>) -> Self {
        self.iac_config_mut().command = command.into().trim().to_string();
        self
    }

    /// Override the binary, e.g. `tofu`
    fn with_executor(mut self, executor: impl Into<String>) -> Self {
        if let Some(executor) = non_blank(&executor.into()) {
            self.iac_config_mut().executor = executor;
        }
        self
    }

    fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.iac_config_mut().working_directory = if dir.as_os_str().is_empty() {
            None
        } else {
            Some(dir)
        };
        self
    }

    /// Environment variable for the process; never rendered as an argument
    fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        upsert(&mut self.iac_config_mut().env, &key.into(), value.into());
        self
    }

    fn with_envs<I, K, V>(self, envs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        envs.into_iter()
            .fold(self, |builder, (key, value)| builder.with_env(key, value))
    }

    /// `-var key=value`
    fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        upsert(&mut self.iac_config_mut().variables, &key.into(), value.into());
        self
    }

    fn with_variables<I, K, V>(self, variables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        variables
            .into_iter()
            .fold(self, |builder, (key, value)| builder.with_variable(key, value))
    }

    /// `-var-file <path>`
    fn with_var_file(mut self, path: impl AsRef<str>) -> Self {
        push_non_blank(&mut self.iac_config_mut().var_files, path.as_ref());
        self
    }

    fn with_var_files<I, S>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .fold(self, |builder, path| builder.with_var_file(path))
    }

    /// `-backend-config key=value`, used by `init`
    fn with_backend_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        upsert(&mut self.iac_config_mut().backend_config, &key.into(), value.into());
        self
    }

    fn with_backend_configs<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        entries
            .into_iter()
            .fold(self, |builder, (key, value)| builder.with_backend_config(key, value))
    }

    /// `-target <address>`
    fn with_target(mut self, address: impl AsRef<str>) -> Self {
        push_non_blank(&mut self.iac_config_mut().targets, address.as_ref());
        self
    }

    fn with_targets<I, S>(self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        addresses
            .into_iter()
            .fold(self, |builder, address| builder.with_target(address))
    }

    fn with_auto_approve(mut self, enabled: bool) -> Self {
        self.iac_config_mut().auto_approve = enabled;
        self
    }

    /// Build the command but never run it
    fn with_dry_run(mut self, enabled: bool) -> Self {
        self.iac_config_mut().dry_run = enabled;
        self
    }

    fn with_no_color(mut self, enabled: bool) -> Self {
        self.iac_config_mut().no_color = enabled;
        self
    }

    fn with_compact_warnings(mut self, enabled: bool) -> Self {
        self.iac_config_mut().compact_warnings = enabled;
        self
    }

    /// Renders `-refresh=true|false`
    fn with_refresh(mut self, refresh: bool) -> Self {
        self.iac_config_mut().refresh = Some(refresh);
        self
    }

    fn with_reconfigure(mut self, enabled: bool) -> Self {
        self.iac_config_mut().reconfigure = enabled;
        self
    }

    fn with_migrate_state(mut self, enabled: bool) -> Self {
        self.iac_config_mut().migrate_state = enabled;
        self
    }

    /// Saved plan applied as a positional argument
    fn with_plan_file(mut self, path: impl AsRef<str>) -> Self {
        self.iac_config_mut().plan_file = non_blank(path.as_ref());
        self
    }

    /// `-out <path>` for `plan`
    fn with_out_file(mut self, path: impl AsRef<str>) -> Self {
        self.iac_config_mut().out_file = non_blank(path.as_ref());
        self
    }

    /// `-parallelism N`; zero means unset
    fn with_parallelism(mut self, parallelism: u32) -> Self {
        self.iac_config_mut().parallelism = Some(parallelism).filter(|n| *n > 0);
        self
    }

    fn with_lock_timeout(mut self, timeout: impl AsRef<str>) -> Self {
        self.iac_config_mut().lock_timeout = non_blank(timeout.as_ref());
        self
    }
}
