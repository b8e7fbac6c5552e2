//! Contract with the process executor that runs a built command
//!
//! The core never spawns processes. It only splits a built command into the
//! program, its arguments and the process settings an executor needs.

use crate::command::CommandAssembler;
use crate::error::{Error, Result};
use crate::provider::{IacProvider, ImageToolsProvider};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Everything an executor needs to spawn one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionRequest {
    pub program: String,
    pub args: Vec<String>,
    pub working_directory: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl ExecutionRequest {
    /// Split `[program, ...args]` into a request
    pub fn from_tokens(
        tokens: Vec<String>,
        working_directory: Option<&Path>,
        env: &[(String, String)],
    ) -> Result<Self> {
        let mut tokens = tokens.into_iter();
        let program = tokens
            .next()
            .ok_or_else(|| Error::EmptyCommand("no executor to run".to_string()))?;
        Ok(Self {
            program,
            args: tokens.collect(),
            working_directory: working_directory.map(Path::to_path_buf),
            env: env.to_vec(),
        })
    }

    /// Request for a built Terraform or Terragrunt service
    pub fn for_iac<S>(service: &S) -> Result<Self>
    where
        S: CommandAssembler + IacProvider,
    {
        let config = service.iac_config();
        Self::from_tokens(
            service.build_command(),
            config.working_directory(),
            config.env(),
        )
    }

    /// Request for a built image tools service
    pub fn for_image_tools<S>(service: &S) -> Result<Self>
    where
        S: CommandAssembler + ImageToolsProvider,
    {
        let config = service.image_tools_config();
        Self::from_tokens(
            service.build_command(),
            config.working_directory(),
            config.env(),
        )
    }
}

/// Captured result of running a command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs a request and reports its exit code and output.
///
/// A non-zero exit code is a normal output, not an error.
pub trait ProcessExecutor {
    fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::builder::{IacBuilder, ImageToolsBuilder, TerragruntBuilder};

    #[test]
    fn test_iac_request_split() {
        let service = TerragruntBuilder::new()
            .with_command("apply")
            .with_run_all(true)
            .with_auto_approve(true)
            .with_working_directory("live/prod")
            .with_env("AWS_REGION", "eu-west-1")
            .build()
            .unwrap();

        let request = ExecutionRequest::for_iac(&service).unwrap();
        assert_eq!(request.program, "terragrunt");
        assert_eq!(request.args, ["run-all", "apply", "-auto-approve"]);
        assert_eq!(request.working_directory, Some(PathBuf::from("live/prod")));
        assert_eq!(request.env, [("AWS_REGION".to_string(), "eu-west-1".to_string())]);
    }

    #[test]
    fn test_image_tools_request_split() {
        let service = ImageToolsBuilder::new()
            .with_command("inspect")
            .with_source("alpine:3")
            .build()
            .unwrap();
        let request = ExecutionRequest::for_image_tools(&service).unwrap();
        assert_eq!(request.program, "docker");
        assert_eq!(request.args, ["buildx", "imagetools", "inspect", "alpine:3"]);
        assert_eq!(request.working_directory, None);
    }

    #[test]
    fn test_empty_tokens() {
        let err = ExecutionRequest::from_tokens(Vec::new(), None, &[]).unwrap_err();
        assert!(matches!(err, Error::EmptyCommand(_)));
    }

    struct RecordingExecutor;

    impl ProcessExecutor for RecordingExecutor {
        fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionOutput> {
            Ok(ExecutionOutput {
                exit_code: 2,
                stdout: request.args.join(" "),
                stderr: String::new(),
            })
        }
    }

    #[test]
    fn test_executor_contract() {
        let request = ExecutionRequest::from_tokens(
            vec!["terraform".to_string(), "plan".to_string()],
            None,
            &[],
        )
        .unwrap();
        let output = RecordingExecutor.execute(&request).unwrap();
        assert_eq!(output.stdout, "plan");
        assert!(!output.success());
    }
}
