use anyhow::Result;
use iac_composer_core::command::builder::IacBuilder;
use iac_composer_core::input::{
    parse_bool, parse_optional_bool, parse_parallelism, parse_string_list, parse_string_map,
};
use iac_composer_core::{ExecutionRequest, TerraformBuilder, TerraformService};
use tracing::debug;

use super::{Prepared, RunEnv, finish, working_directory};
use crate::cli::IacArgs;

/// Apply the inputs terraform and terragrunt share
pub fn apply_iac_inputs<B: IacBuilder>(mut builder: B, args: &IacArgs) -> Result<B> {
    builder = builder.with_command(args.command.trim());

    if !args.executor.trim().is_empty() {
        builder = builder.with_executor(args.executor.trim());
    }
    if let Some(dir) = working_directory(&args.working_directory) {
        builder = builder.with_working_directory(dir);
    }

    builder = builder
        .with_envs(parse_string_map(&args.env)?)
        .with_variables(parse_string_map(&args.variables)?)
        .with_var_files(parse_string_list(&args.var_files)?)
        .with_backend_configs(parse_string_map(&args.backend_config)?)
        .with_targets(parse_string_list(&args.targets)?)
        .with_auto_approve(parse_bool(&args.auto_approve, false)?)
        .with_dry_run(parse_bool(&args.dry_run, false)?)
        .with_no_color(parse_bool(&args.no_color, false)?)
        .with_compact_warnings(parse_bool(&args.compact_warnings, false)?)
        .with_reconfigure(parse_bool(&args.reconfigure, false)?)
        .with_migrate_state(parse_bool(&args.migrate_state, false)?)
        .with_plan_file(&args.plan_file)
        .with_out_file(&args.out_file)
        .with_lock_timeout(&args.lock_timeout);

    if let Some(refresh) = parse_optional_bool(&args.refresh)? {
        builder = builder.with_refresh(refresh);
    }
    if let Some(parallelism) = parse_parallelism(&args.parallelism)? {
        builder = builder.with_parallelism(parallelism);
    }

    Ok(builder)
}

pub fn build(args: &IacArgs) -> Result<TerraformService> {
    let builder = apply_iac_inputs(TerraformBuilder::new(), args)?;
    Ok(builder.build()?)
}

pub fn run(args: &IacArgs, env: &RunEnv<'_>) -> Result<i32> {
    let service = build(args)?;
    debug!("Terraform service: {}", service);

    let request = ExecutionRequest::for_iac(&service)?;
    let dry_run = parse_bool(&args.dry_run, false)?;
    finish(Prepared::new(&service, request, dry_run), env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iac_composer_core::{CommandAssembler, CommandFormatter, IacProvider};

    fn args(command: &str) -> IacArgs {
        IacArgs {
            command: command.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_from_raw_inputs() {
        let service = build(&IacArgs {
            variables: r#"{"region": "us-east-1"}"#.to_string(),
            var_files: "prod.tfvars\ncommon.tfvars".to_string(),
            targets: "a,,b,".to_string(),
            out_file: "plan.tfplan".to_string(),
            parallelism: "0".to_string(),
            refresh: "false".to_string(),
            ..args("plan")
        })
        .unwrap();

        assert_eq!(
            service.to_command_string(),
            "terraform plan -var region=us-east-1 -var-file prod.tfvars -var-file common.tfvars -target a -target b -out plan.tfplan -refresh=false"
        );
    }

    #[test]
    fn test_executor_and_env_inputs() {
        let service = build(&IacArgs {
            executor: "tofu".to_string(),
            env: r#"{"TF_LOG": "debug"}"#.to_string(),
            working_directory: " infra ".to_string(),
            ..args("validate")
        })
        .unwrap();

        assert_eq!(service.build_command(), ["tofu", "validate"]);
        let config = service.iac_config();
        assert_eq!(config.env(), [("TF_LOG".to_string(), "debug".to_string())]);
        assert_eq!(config.working_directory(), Some(std::path::Path::new("infra")));
    }

    #[test]
    fn test_bad_inputs_are_errors() {
        assert!(build(&args("plan-it")).is_err());
        assert!(build(&IacArgs { auto_approve: "yes".to_string(), ..args("apply") }).is_err());
        assert!(build(&IacArgs { variables: "[1]".to_string(), ..args("plan") }).is_err());
    }
}
