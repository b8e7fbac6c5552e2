pub mod imagetools;
pub mod terraform;
pub mod terragrunt;

use anyhow::{Context, Result};
use iac_composer_core::{
    CommandFormatter, ExecutionRequest, GitHubContextBuilder, ProcessExecutor,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::{Cli, Commands};
use crate::display::command_breakdown;
use crate::executor::SystemExecutor;
use crate::outputs::ActionOutputs;

/// Where a run sends its process and its outputs
pub struct RunEnv<'a> {
    pub executor: &'a dyn ProcessExecutor,
    pub output_file: Option<PathBuf>,
}

impl RunEnv<'static> {
    /// Spawn real processes and honor `GITHUB_OUTPUT`
    pub fn system() -> Self {
        Self {
            executor: &SystemExecutor,
            output_file: std::env::var_os("GITHUB_OUTPUT")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Run the selected subcommand and return the exit code to report
pub fn run(cli: Cli, env: &RunEnv<'_>) -> Result<i32> {
    log_github_context();

    match cli.command {
        Commands::Terraform(args) => terraform::run(&args, env),
        Commands::Terragrunt(args) => terragrunt::run(&args, env),
        Commands::ImageTools(args) => imagetools::run(&args, env),
    }
}

fn log_github_context() {
    match GitHubContextBuilder::from_env().build() {
        Ok(context) => info!(
            "GitHub context: {} @ {} ({})",
            context.repository.as_deref().unwrap_or("unknown repository"),
            context.ref_name(),
            context.sha
        ),
        Err(e) => debug!("Running outside GitHub Actions: {}", e),
    }
}

/// A built command ready to execute or report
pub(crate) struct Prepared {
    pub command: String,
    pub command_depth: usize,
    pub command_args: Vec<String>,
    pub command_string: String,
    pub multi_line: String,
    pub request: ExecutionRequest,
    pub dry_run: bool,
}

impl Prepared {
    pub fn new<S: CommandFormatter>(
        service: &S,
        request: ExecutionRequest,
        dry_run: bool,
    ) -> Self {
        Self {
            command: service.command().to_string(),
            command_depth: service.sub_commands().len() + 1,
            command_args: service.to_command_args(),
            command_string: service.to_command_string(),
            multi_line: service.to_multi_line_command(),
            request,
            dry_run,
        }
    }
}

/// Execute (unless dry-run), then write the action outputs
pub(crate) fn finish(prepared: Prepared, env: &RunEnv<'_>) -> Result<i32> {
    let mut outputs = ActionOutputs::new();
    outputs.set("command", prepared.command.as_str());
    outputs.set(
        "command-args",
        serde_json::to_string(&prepared.command_args).context("Failed to encode command args")?,
    );
    outputs.set("command-string", prepared.command_string.as_str());

    info!("{}", command_breakdown(&prepared.request, prepared.command_depth));

    let exit_code = if prepared.dry_run {
        info!("Dry run, not executing:\n{}", prepared.multi_line);
        outputs.set("exit-code", "0");
        outputs.set("stdout", "");
        outputs.set("stderr", "");
        0
    } else {
        info!("Running:\n{}", prepared.multi_line);
        let output = env
            .executor
            .execute(&prepared.request)
            .with_context(|| format!("Failed to execute: {}", prepared.command_string))?;

        print!("{}", output.stdout);
        eprint!("{}", output.stderr);
        if !output.success() {
            info!("{} exited with code {}", prepared.request.program, output.exit_code);
        }

        outputs.set("exit-code", output.exit_code.to_string());
        outputs.set("stdout", output.stdout);
        outputs.set("stderr", output.stderr);
        output.exit_code
    };

    outputs.write(env.output_file.as_deref())?;
    Ok(exit_code)
}

/// Working directory input; blank means the current directory
pub(crate) fn working_directory(raw: &str) -> Option<&Path> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| Path::new(trimmed))
}
