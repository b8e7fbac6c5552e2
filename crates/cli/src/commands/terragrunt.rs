use anyhow::Result;
use iac_composer_core::input::{parse_bool, parse_parallelism, parse_string_list, parse_string_map};
use iac_composer_core::{ExecutionRequest, TerragruntBuilder, TerragruntService};
use tracing::debug;

use super::terraform::apply_iac_inputs;
use super::{Prepared, RunEnv, finish};
use crate::cli::TerragruntArgs;

pub fn build(args: &TerragruntArgs) -> Result<TerragruntService> {
    let mut builder = apply_iac_inputs(TerragruntBuilder::new(), &args.iac)?
        .with_run_all(parse_bool(&args.run_all, false)?)
        .with_terragrunt_config(&args.terragrunt_config)
        .with_terragrunt_working_dir(&args.terragrunt_working_dir)
        .with_non_interactive(parse_bool(&args.non_interactive, false)?)
        .with_no_auto_init(parse_bool(&args.no_auto_init, false)?)
        .with_no_auto_retry(parse_bool(&args.no_auto_retry, false)?)
        .with_include_dirs(parse_string_list(&args.include_dirs)?)
        .with_exclude_dirs(parse_string_list(&args.exclude_dirs)?)
        .with_ignore_dependency_errors(parse_bool(&args.ignore_dependency_errors, false)?)
        .with_ignore_external_dependencies(parse_bool(&args.ignore_external_dependencies, false)?)
        .with_include_external_dependencies(parse_bool(&args.include_external_dependencies, false)?)
        .with_terragrunt_source(&args.terragrunt_source)
        .with_source_maps(parse_string_map(&args.source_map)?)
        .with_download_dir(&args.download_dir)
        .with_iam_role(&args.iam_role)
        .with_iam_role_session_name(&args.iam_role_session_name)
        .with_strict_include(parse_bool(&args.strict_include, false)?);

    if let Some(parallelism) = parse_parallelism(&args.terragrunt_parallelism)? {
        builder = builder.with_terragrunt_parallelism(parallelism);
    }

    Ok(builder.build()?)
}

pub fn run(args: &TerragruntArgs, env: &RunEnv<'_>) -> Result<i32> {
    let service = build(args)?;
    debug!("Terragrunt service: {}", service);

    let request = ExecutionRequest::for_iac(&service)?;
    let dry_run = parse_bool(&args.iac.dry_run, false)?;
    finish(Prepared::new(&service, request, dry_run), env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::IacArgs;
    use iac_composer_core::CommandAssembler;

    #[test]
    fn test_run_all_from_raw_inputs() {
        let service = build(&TerragruntArgs {
            iac: IacArgs {
                command: "apply".to_string(),
                auto_approve: "true".to_string(),
                ..Default::default()
            },
            run_all: "true".to_string(),
            non_interactive: "TRUE".to_string(),
            terragrunt_parallelism: "4".to_string(),
            exclude_dirs: r#"["modules/legacy"]"#.to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            service.build_command(),
            [
                "terragrunt",
                "run-all",
                "apply",
                "-auto-approve",
                "--terragrunt-non-interactive",
                "--terragrunt-parallelism",
                "4",
                "--terragrunt-exclude-dir",
                "modules/legacy",
            ]
        );
    }

    #[test]
    fn test_terragrunt_only_command() {
        let service = build(&TerragruntArgs {
            iac: IacArgs {
                command: "hclfmt".to_string(),
                ..Default::default()
            },
            ..Default::default()
        })
        .unwrap();
        assert_eq!(service.build_command(), ["terragrunt", "hclfmt"]);
    }
}
