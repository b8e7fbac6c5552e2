//! Terraform command builder

use super::IacBuilder;
use crate::{
    command::service::{TERRAFORM_EXECUTOR, TerraformService},
    error::Result,
    provider::IacConfig,
    types::TerraformCommand,
};
use tracing::debug;

/// Collects Terraform configuration and builds a [`TerraformService`]
#[derive(Debug, Clone)]
pub struct TerraformBuilder {
    config: IacConfig,
}

impl Default for TerraformBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IacBuilder for TerraformBuilder {
    fn iac_config_mut(&mut self) -> &mut IacConfig {
        &mut self.config
    }
}

impl TerraformBuilder {
    pub fn new() -> Self {
        Self {
            config: IacConfig::with_executor(TERRAFORM_EXECUTOR),
        }
    }

    /// Discard everything collected so far
    pub fn reset(self) -> Self {
        Self::new()
    }

    /// Validate the command and freeze the configuration.
    ///
    /// The builder is left untouched and can keep building further services.
    pub fn build(&self) -> Result<TerraformService> {
        let command: TerraformCommand = self.config.command.parse()?;
        let mut config = self.config.clone();
        config.command = command.as_str().to_string();
        debug!(
            "Built terraform service: command={}, targets={}, variables={}",
            config.command,
            config.targets.len(),
            config.variables.len()
        );
        Ok(TerraformService::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{command::CommandAssembler, error::Error, provider::IacProvider};

    #[test]
    fn test_build_requires_valid_command() {
        let err = TerraformBuilder::new().build().unwrap_err();
        assert!(matches!(err, Error::InvalidCommand { .. }));

        let err = TerraformBuilder::new().with_command("deploy").build().unwrap_err();
        assert_eq!(err.to_string(), "Invalid terraform command: 'deploy'");
    }

    #[test]
    fn test_invalid_command_can_be_fixed_before_build() {
        let service = TerraformBuilder::new()
            .with_command("nope")
            .with_target("module.vpc")
            .with_command("plan")
            .build()
            .unwrap();
        assert_eq!(service.build_command(), ["terraform", "plan", "-target", "module.vpc"]);
    }

    #[test]
    fn test_command_is_normalized() {
        let service = TerraformBuilder::new().with_command(" PLAN ").build().unwrap();
        assert_eq!(service.command(), "plan");
    }

    #[test]
    fn test_fmt_drops_targets() {
        let service = TerraformBuilder::new()
            .with_command("fmt")
            .with_target("module.vpc")
            .build()
            .unwrap();
        assert!(!service.build_command().contains(&"-target".to_string()));
    }

    #[test]
    fn test_blank_inputs_are_absent() {
        let service = TerraformBuilder::new()
            .with_command("plan")
            .with_targets(["", "  "])
            .with_var_file(" ")
            .with_out_file("   ")
            .with_lock_timeout("")
            .with_parallelism(0)
            .build()
            .unwrap();
        assert_eq!(service.build_command(), ["terraform", "plan"]);
    }

    #[test]
    fn test_reset_returns_blank_builder() {
        let builder = TerraformBuilder::new()
            .with_command("apply")
            .with_auto_approve(true)
            .reset();
        assert!(builder.build().is_err());

        let service = builder.with_command("apply").build().unwrap();
        assert_eq!(service.build_command(), ["terraform", "apply"]);
    }

    #[test]
    fn test_built_service_is_independent_of_builder() {
        let builder = TerraformBuilder::new().with_command("plan").with_target("a");
        let first = builder.build().unwrap();
        let second = builder.with_target("b").build().unwrap();

        assert_eq!(first.iac_config().targets(), ["a"]);
        assert_eq!(second.iac_config().targets(), ["a", "b"]);
    }

    #[test]
    fn test_executor_override_and_env_side_channel() {
        let service = TerraformBuilder::new()
            .with_executor("tofu")
            .with_command("validate")
            .with_working_directory("infra")
            .with_env("TF_LOG", "debug")
            .build()
            .unwrap();

        assert_eq!(service.build_command(), ["tofu", "validate"]);
        let config = service.iac_config();
        assert_eq!(config.working_directory().unwrap().to_str(), Some("infra"));
        assert_eq!(config.env(), [("TF_LOG".to_string(), "debug".to_string())]);
    }
}
