//! Terragrunt command builder

use super::{IacBuilder, non_blank, push_non_blank, upsert};
use crate::{
    command::service::{TERRAGRUNT_EXECUTOR, TerragruntService},
    error::Result,
    provider::{IacConfig, TerragruntOptions},
    types::TerragruntCommand,
};
use tracing::debug;

/// Collects Terragrunt configuration and builds a [`TerragruntService`]
#[derive(Debug, Clone)]
pub struct TerragruntBuilder {
    config: IacConfig,
    options: TerragruntOptions,
}

impl Default for TerragruntBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IacBuilder for TerragruntBuilder {
    fn iac_config_mut(&mut self) -> &mut IacConfig {
        &mut self.config
    }
}

impl TerragruntBuilder {
    pub fn new() -> Self {
        Self {
            config: IacConfig::with_executor(TERRAGRUNT_EXECUTOR),
            options: TerragruntOptions::default(),
        }
    }

    pub fn reset(self) -> Self {
        Self::new()
    }

    /// Insert `run-all` ahead of the command
    pub fn with_run_all(mut self, enabled: bool) -> Self {
        self.options.run_all = enabled;
        self
    }

    /// `--terragrunt-config <path>`
    pub fn with_terragrunt_config(mut self, path: impl AsRef<str>) -> Self {
        self.options.config_path = non_blank(path.as_ref());
        self
    }

    /// `--terragrunt-working-dir <path>`
    pub fn with_terragrunt_working_dir(mut self, dir: impl AsRef<str>) -> Self {
        self.options.working_dir = non_blank(dir.as_ref());
        self
    }

    pub fn with_non_interactive(mut self, enabled: bool) -> Self {
        self.options.non_interactive = enabled;
        self
    }

    pub fn with_no_auto_init(mut self, enabled: bool) -> Self {
        self.options.no_auto_init = enabled;
        self
    }

    pub fn with_no_auto_retry(mut self, enabled: bool) -> Self {
        self.options.no_auto_retry = enabled;
        self
    }

    /// `--terragrunt-parallelism N`, only rendered together with run-all
    pub fn with_terragrunt_parallelism(mut self, parallelism: u32) -> Self {
        self.options.parallelism = Some(parallelism).filter(|n| *n > 0);
        self
    }

    pub fn with_include_dir(mut self, dir: impl AsRef<str>) -> Self {
        push_non_blank(&mut self.options.include_dirs, dir.as_ref());
        self
    }

    pub fn with_include_dirs<I, S>(self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        dirs.into_iter()
            .fold(self, |builder, dir| builder.with_include_dir(dir))
    }

    pub fn with_exclude_dir(mut self, dir: impl AsRef<str>) -> Self {
        push_non_blank(&mut self.options.exclude_dirs, dir.as_ref());
        self
    }

    pub fn with_exclude_dirs<I, S>(self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        dirs.into_iter()
            .fold(self, |builder, dir| builder.with_exclude_dir(dir))
    }

    pub fn with_ignore_dependency_errors(mut self, enabled: bool) -> Self {
        self.options.ignore_dependency_errors = enabled;
        self
    }

    pub fn with_ignore_external_dependencies(mut self, enabled: bool) -> Self {
        self.options.ignore_external_dependencies = enabled;
        self
    }

    pub fn with_include_external_dependencies(mut self, enabled: bool) -> Self {
        self.options.include_external_dependencies = enabled;
        self
    }

    /// `--terragrunt-source <source>`
    pub fn with_terragrunt_source(mut self, source: impl AsRef<str>) -> Self {
        self.options.source = non_blank(source.as_ref());
        self
    }

    /// `--terragrunt-source-map original=replacement`
    pub fn with_source_map(mut self, original: impl Into<String>, replacement: impl Into<String>) -> Self {
        upsert(&mut self.options.source_map, &original.into(), replacement.into());
        self
    }

    pub fn with_source_maps<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        entries
            .into_iter()
            .fold(self, |builder, (key, value)| builder.with_source_map(key, value))
    }

    pub fn with_download_dir(mut self, dir: impl AsRef<str>) -> Self {
        self.options.download_dir = non_blank(dir.as_ref());
        self
    }

    pub fn with_iam_role(mut self, role: impl AsRef<str>) -> Self {
        self.options.iam_role = non_blank(role.as_ref());
        self
    }

    /// Only rendered when an IAM role is also set
    pub fn with_iam_role_session_name(mut self, name: impl AsRef<str>) -> Self {
        self.options.iam_role_session_name = non_blank(name.as_ref());
        self
    }

    pub fn with_strict_include(mut self, enabled: bool) -> Self {
        self.options.strict_include = enabled;
        self
    }

    pub fn build(&self) -> Result<TerragruntService> {
        let command: TerragruntCommand = self.config.command.parse()?;
        let mut config = self.config.clone();
        config.command = command.as_str().to_string();
        debug!(
            "Built terragrunt service: command={}, run_all={}",
            config.command, self.options.run_all
        );
        Ok(TerragruntService::new(config, self.options.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        command::{CommandAssembler, CommandFormatter},
        error::Error,
        provider::TerragruntProvider,
    };

    #[test]
    fn test_run_all_precedes_command() {
        let service = TerragruntBuilder::new()
            .with_command("plan")
            .with_run_all(true)
            .with_non_interactive(true)
            .build()
            .unwrap();

        assert_eq!(
            service.build_command(),
            ["terragrunt", "run-all", "plan", "--terragrunt-non-interactive"]
        );
    }

    #[test]
    fn test_terragrunt_only_commands_accepted() {
        let service = TerragruntBuilder::new()
            .with_command("graph-dependencies")
            .with_target("module.vpc")
            .build()
            .unwrap();
        assert_eq!(service.to_command_string(), "terragrunt graph-dependencies");
    }

    #[test]
    fn test_invalid_command() {
        let err = TerragruntBuilder::new().with_command("deploy").build().unwrap_err();
        assert!(matches!(err, Error::InvalidCommand { ref family, .. } if family == "terragrunt"));
    }

    #[test]
    fn test_terraform_arguments_come_first() {
        let service = TerragruntBuilder::new()
            .with_command("apply")
            .with_auto_approve(true)
            .with_variable("env", "prod")
            .with_include_dirs(["vpc", " "])
            .build()
            .unwrap();

        assert_eq!(
            service.to_command_args(),
            [
                "-var",
                "env=prod",
                "-auto-approve",
                "--terragrunt-include-dir",
                "vpc"
            ]
        );
    }

    #[test]
    fn test_parallelism_needs_run_all() {
        let builder = TerragruntBuilder::new()
            .with_command("plan")
            .with_terragrunt_parallelism(4);
        assert!(builder.build().unwrap().to_command_args().is_empty());

        let args = builder.with_run_all(true).build().unwrap().to_command_args();
        assert_eq!(args, ["--terragrunt-parallelism", "4"]);
    }

    #[test]
    fn test_iam_role_session_name() {
        let service = TerragruntBuilder::new()
            .with_command("plan")
            .with_iam_role_session_name("ci")
            .build()
            .unwrap();
        assert!(service.to_command_args().is_empty());
        assert_eq!(service.terragrunt_options().iam_role_session_name(), Some("ci"));
    }

    #[test]
    fn test_reset_clears_terragrunt_options() {
        let builder = TerragruntBuilder::new()
            .with_command("plan")
            .with_run_all(true)
            .reset()
            .with_command("plan");
        assert_eq!(builder.build().unwrap().build_command(), ["terragrunt", "plan"]);
    }

    #[test]
    fn test_run_all_command_with_run_all_flag() {
        let service = TerragruntBuilder::new()
            .with_command("run-all")
            .with_run_all(true)
            .build()
            .unwrap();
        assert_eq!(service.build_command(), ["terragrunt", "run-all"]);
        assert_eq!(service.to_command_string(), "terragrunt run-all");
    }
}
