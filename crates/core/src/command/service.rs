//! Built services: a frozen provider paired with its assembler

use super::assembler::{CommandAssembler, iac_args, metadata_args, terragrunt_args};
use super::formatter::to_single_line;
use crate::provider::{
    IacConfig, IacProvider, ImageToolsConfig, ImageToolsProvider, TerragruntOptions,
    TerragruntProvider,
};
use std::fmt;

pub const TERRAFORM_EXECUTOR: &str = "terraform";
pub const TERRAGRUNT_EXECUTOR: &str = "terragrunt";
const RUN_ALL: &str = "run-all";

/// A built Terraform invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerraformService {
    config: IacConfig,
}

impl TerraformService {
    pub(crate) fn new(config: IacConfig) -> Self {
        Self { config }
    }
}

impl IacProvider for TerraformService {
    fn iac_config(&self) -> &IacConfig {
        &self.config
    }
}

impl CommandAssembler for TerraformService {
    fn executor(&self) -> &str {
        self.config.executor()
    }

    fn command(&self) -> &str {
        self.config.command()
    }

    fn to_command_args(&self) -> Vec<String> {
        iac_args(&self.config)
    }
}

/// A built Terragrunt invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerragruntService {
    config: IacConfig,
    options: TerragruntOptions,
}

impl TerragruntService {
    pub(crate) fn new(config: IacConfig, options: TerragruntOptions) -> Self {
        Self { config, options }
    }
}

impl IacProvider for TerragruntService {
    fn iac_config(&self) -> &IacConfig {
        &self.config
    }
}

impl TerragruntProvider for TerragruntService {
    fn terragrunt_options(&self) -> &TerragruntOptions {
        &self.options
    }
}

impl CommandAssembler for TerragruntService {
    fn executor(&self) -> &str {
        self.config.executor()
    }

    fn sub_commands(&self) -> Vec<String> {
        // `run-all` appears once, whether it came as the flag or the command
        if self.options.run_all() && self.config.command() != RUN_ALL {
            vec![RUN_ALL.to_string()]
        } else {
            Vec::new()
        }
    }

    fn command(&self) -> &str {
        self.config.command()
    }

    fn to_command_args(&self) -> Vec<String> {
        terragrunt_args(&self.config, &self.options)
    }
}

/// A built `docker buildx imagetools` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageToolsService {
    config: ImageToolsConfig,
}

impl ImageToolsService {
    pub(crate) fn new(config: ImageToolsConfig) -> Self {
        Self { config }
    }
}

impl ImageToolsProvider for ImageToolsService {
    fn image_tools_config(&self) -> &ImageToolsConfig {
        &self.config
    }
}

impl CommandAssembler for ImageToolsService {
    fn executor(&self) -> &str {
        self.config.executor()
    }

    fn sub_commands(&self) -> Vec<String> {
        self.config.sub_commands().to_vec()
    }

    fn command(&self) -> &str {
        self.config.command()
    }

    fn to_command_args(&self) -> Vec<String> {
        metadata_args(self.config.metadata())
    }
}

impl fmt::Display for TerraformService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_single_line(&self.build_command()))
    }
}

impl fmt::Display for TerragruntService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_single_line(&self.build_command()))
    }
}

impl fmt::Display for ImageToolsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_single_line(&self.build_command()))
    }
}
