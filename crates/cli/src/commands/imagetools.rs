use anyhow::{Context, Result};
use iac_composer_core::input::{parse_bool, parse_json_object, parse_string_map};
use iac_composer_core::{
    CommandAssembler, CommandFormatter, Error, ExecutionRequest, ImageToolsBuilder,
    ImageToolsCommand, ImageToolsService, MetadataStore,
};
use tracing::debug;

use super::{Prepared, RunEnv, finish, working_directory};
use crate::cli::ImageToolsArgs;

pub fn build(args: &ImageToolsArgs) -> Result<ImageToolsService> {
    let metadata = MetadataStore::from_json_object(&parse_json_object(&args.metadata)?)?;

    let mut builder = ImageToolsBuilder::new()
        .with_command(args.command.trim())
        .with_metadata(metadata)
        .with_use_string_list(parse_bool(&args.use_string_list, false)?)
        .with_dry_run(parse_bool(&args.dry_run, false)?);

    if let Some(dir) = working_directory(&args.working_directory) {
        builder = builder.with_working_directory(dir);
    }
    for (key, value) in parse_string_map(&args.env)? {
        builder = builder.with_env(key, value);
    }

    let service = builder.build()?;
    if service.command() == ImageToolsCommand::Create.as_str() && service.to_command_args().is_empty() {
        return Err(Error::EmptyCommand(
            "imagetools create needs at least one tag or source".to_string(),
        )
        .into());
    }
    Ok(service)
}

/// `command-string` output: single line, or the escaped token list as JSON
pub fn command_string(service: &ImageToolsService, use_string_list: bool) -> Result<String> {
    if use_string_list {
        serde_json::to_string(&service.to_string_list()).context("Failed to encode string list")
    } else {
        Ok(service.to_command_string())
    }
}

pub fn run(args: &ImageToolsArgs, env: &RunEnv<'_>) -> Result<i32> {
    let service = build(args)?;
    debug!("Image tools service: {}", service);

    let request = ExecutionRequest::for_image_tools(&service)?;
    let dry_run = parse_bool(&args.dry_run, false)?;
    let use_string_list = parse_bool(&args.use_string_list, false)?;

    let mut prepared = Prepared::new(&service, request, dry_run);
    prepared.command_string = command_string(&service, use_string_list)?;
    finish(prepared, env)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(command: &str, metadata: &str) -> ImageToolsArgs {
        ImageToolsArgs {
            command: command.to_string(),
            metadata: metadata.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_metadata_input_order() {
        let service = build(&args(
            "create",
            r#"{"--tag": ["app:1", "app:latest"], "": ["app:1-amd64", "app:1-arm64"]}"#,
        ))
        .unwrap();
        assert_eq!(
            service.to_command_string(),
            "docker buildx imagetools create --tag app:1 --tag app:latest app:1-amd64 app:1-arm64"
        );
    }

    #[test]
    fn test_create_without_arguments() {
        let err = build(&args("create", "")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::EmptyCommand(_))
        ));

        // inspect and prune may run bare
        assert!(build(&args("prune", "")).is_ok());
    }

    #[test]
    fn test_string_list_command_string() {
        let service = build(&args("create", r#"{"--annotation": "index:org.opencontainers.image.title=My App", "": "src:1"}"#))
            .unwrap();
        assert_eq!(
            command_string(&service, true).unwrap(),
            r#"["docker","buildx","imagetools","create","--annotation","\"index:org.opencontainers.image.title=My App\"","src:1"]"#
        );
    }
}
