//! Pre-configured builders for common operations
//!
//! Each factory returns a builder, so callers can keep chaining before `build()`.

use super::builder::{IacBuilder, ImageToolsBuilder, TerraformBuilder, TerragruntBuilder};
use crate::types::{ImageToolsCommand, TerraformCommand, TerragruntCommand};
use std::path::Path;

fn terraform(command: TerraformCommand, working_dir: &Path) -> TerraformBuilder {
    TerraformBuilder::new()
        .with_command(command.as_str())
        .with_working_directory(working_dir)
}

pub fn terraform_init(working_dir: &Path) -> TerraformBuilder {
    terraform(TerraformCommand::Init, working_dir)
}

pub fn terraform_validate(working_dir: &Path) -> TerraformBuilder {
    terraform(TerraformCommand::Validate, working_dir)
}

pub fn terraform_plan(working_dir: &Path) -> TerraformBuilder {
    terraform(TerraformCommand::Plan, working_dir)
}

/// `plan` limited to the given resource addresses
pub fn terraform_plan_with_targets<I, S>(working_dir: &Path, targets: I) -> TerraformBuilder
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terraform_plan(working_dir).with_targets(targets)
}

/// `apply` of a saved plan file
pub fn terraform_apply_plan(working_dir: &Path, plan_file: &str) -> TerraformBuilder {
    terraform(TerraformCommand::Apply, working_dir).with_plan_file(plan_file)
}

pub fn terraform_apply_auto_approve(working_dir: &Path) -> TerraformBuilder {
    terraform(TerraformCommand::Apply, working_dir).with_auto_approve(true)
}

pub fn terraform_destroy(working_dir: &Path, auto_approve: bool) -> TerraformBuilder {
    terraform(TerraformCommand::Destroy, working_dir).with_auto_approve(auto_approve)
}

pub fn terraform_output(working_dir: &Path) -> TerraformBuilder {
    terraform(TerraformCommand::Output, working_dir)
}

/// `terragrunt run-all <command>` without prompts
pub fn terragrunt_run_all(command: TerragruntCommand, working_dir: &Path) -> TerragruntBuilder {
    TerragruntBuilder::new()
        .with_command(command.as_str())
        .with_working_directory(working_dir)
        .with_run_all(true)
        .with_non_interactive(true)
}

pub fn terragrunt_run_all_plan(working_dir: &Path) -> TerragruntBuilder {
    terragrunt_run_all(TerragruntCommand::Plan, working_dir)
}

/// `imagetools create` tagging a manifest list built from `sources`
pub fn create_manifest<I, S>(tag: &str, sources: I) -> ImageToolsBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ImageToolsBuilder::new()
        .with_command(ImageToolsCommand::Create.as_str())
        .with_tag(tag)
        .with_sources(sources)
}

pub fn inspect_image(image: &str) -> ImageToolsBuilder {
    ImageToolsBuilder::new()
        .with_command(ImageToolsCommand::Inspect.as_str())
        .with_source(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandAssembler, CommandFormatter};
    use crate::provider::IacProvider;

    #[test]
    fn test_plan_with_targets() {
        let service = terraform_plan_with_targets(Path::new("infra"), ["module.vpc", "module.db"])
            .build()
            .unwrap();
        assert_eq!(
            service.to_command_string(),
            "terraform plan -target module.vpc -target module.db"
        );
        assert_eq!(
            service.iac_config().working_directory(),
            Some(Path::new("infra"))
        );
    }

    #[test]
    fn test_apply_plan() {
        let service = terraform_apply_plan(Path::new("."), "plan.tfplan")
            .with_auto_approve(true)
            .build()
            .unwrap();
        assert_eq!(service.build_command(), ["terraform", "apply", "plan.tfplan"]);
    }

    #[test]
    fn test_destroy_and_init() {
        let destroy = terraform_destroy(Path::new("."), true).build().unwrap();
        assert_eq!(destroy.to_command_args(), ["-auto-approve"]);

        let init = terraform_init(Path::new("."))
            .with_backend_config("key", "prod.tfstate")
            .build()
            .unwrap();
        assert_eq!(init.to_command_string(), "terraform init -backend-config key=prod.tfstate");
    }

    #[test]
    fn test_run_all_plan() {
        let service = terragrunt_run_all_plan(Path::new("live")).build().unwrap();
        assert_eq!(
            service.build_command(),
            ["terragrunt", "run-all", "plan", "--terragrunt-non-interactive"]
        );
    }

    #[test]
    fn test_create_manifest_and_inspect() {
        let create = create_manifest("app:1", ["app:1-amd64", "app:1-arm64"])
            .build()
            .unwrap();
        assert_eq!(
            create.to_command_args(),
            ["--tag", "app:1", "app:1-amd64", "app:1-arm64"]
        );

        let inspect = inspect_image("alpine:3").build().unwrap();
        assert_eq!(inspect.to_command_string(), "docker buildx imagetools inspect alpine:3");
    }
}
