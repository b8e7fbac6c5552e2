//! Read-only provider contracts exposed by built services

mod iac;
mod image_tools;
mod terragrunt;

pub use iac::IacConfig;
pub use image_tools::{DOCKER_EXECUTOR, IMAGE_TOOLS_SUB_COMMANDS, ImageToolsConfig};
pub use terragrunt::TerragruntOptions;

/// Provider of a frozen Terraform-shaped configuration
pub trait IacProvider {
    fn iac_config(&self) -> &IacConfig;
}

/// Provider of a frozen Terragrunt configuration
pub trait TerragruntProvider: IacProvider {
    fn terragrunt_options(&self) -> &TerragruntOptions;
}

/// Provider of a frozen image tools configuration
pub trait ImageToolsProvider {
    fn image_tools_config(&self) -> &ImageToolsConfig;
}
