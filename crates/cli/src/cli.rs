use clap::{Args, Parser, Subcommand};

/// Compose and run infrastructure tool commands from GitHub Action inputs
#[derive(Parser, Debug)]
#[command(name = "iac-composer")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    INPUT_<NAME>      Any input, as set by GitHub Actions\n    GITHUB_OUTPUT     File receiving action outputs\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a terraform command
    Terraform(IacArgs),
    /// Run a terragrunt command
    Terragrunt(TerragruntArgs),
    /// Run a docker buildx imagetools command
    #[command(name = "imagetools")]
    ImageTools(ImageToolsArgs),
}

/// Inputs shared by terraform and terragrunt.
///
/// Every value is the raw input string; parsing happens in `commands`.
#[derive(Args, Debug, Clone, Default)]
pub struct IacArgs {
    /// Subcommand to run (plan, apply, init, ...)
    #[arg(long, env = "INPUT_COMMAND")]
    pub command: String,

    /// Binary to invoke instead of the default (e.g. tofu)
    #[arg(long, env = "INPUT_EXECUTOR", default_value = "")]
    pub executor: String,

    #[arg(long, env = "INPUT_WORKING-DIRECTORY", default_value = "")]
    pub working_directory: String,

    /// Extra process environment as a JSON object
    #[arg(long, env = "INPUT_ENV", default_value = "")]
    pub env: String,

    /// Input variables as a JSON object
    #[arg(long, env = "INPUT_VARIABLES", default_value = "")]
    pub variables: String,

    /// Variable files as a JSON array, newline or comma list
    #[arg(long, env = "INPUT_VAR-FILES", default_value = "")]
    pub var_files: String,

    /// Backend configuration as a JSON object
    #[arg(long, env = "INPUT_BACKEND-CONFIG", default_value = "")]
    pub backend_config: String,

    /// Resource addresses as a JSON array, newline or comma list
    #[arg(long, env = "INPUT_TARGETS", default_value = "")]
    pub targets: String,

    #[arg(long, env = "INPUT_AUTO-APPROVE", default_value = "")]
    pub auto_approve: String,

    /// Print the command without running it
    #[arg(long, env = "INPUT_DRY-RUN", default_value = "")]
    pub dry_run: String,

    #[arg(long, env = "INPUT_NO-COLOR", default_value = "")]
    pub no_color: String,

    #[arg(long, env = "INPUT_COMPACT-WARNINGS", default_value = "")]
    pub compact_warnings: String,

    /// Explicit -refresh value; blank leaves the tool default
    #[arg(long, env = "INPUT_REFRESH", default_value = "")]
    pub refresh: String,

    #[arg(long, env = "INPUT_RECONFIGURE", default_value = "")]
    pub reconfigure: String,

    #[arg(long, env = "INPUT_MIGRATE-STATE", default_value = "")]
    pub migrate_state: String,

    /// Saved plan to apply
    #[arg(long, env = "INPUT_PLAN-FILE", default_value = "")]
    pub plan_file: String,

    /// Where plan writes its output
    #[arg(long, env = "INPUT_OUT-FILE", default_value = "")]
    pub out_file: String,

    #[arg(long, env = "INPUT_PARALLELISM", default_value = "")]
    pub parallelism: String,

    #[arg(long, env = "INPUT_LOCK-TIMEOUT", default_value = "")]
    pub lock_timeout: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TerragruntArgs {
    #[command(flatten)]
    pub iac: IacArgs,

    #[arg(long, env = "INPUT_RUN-ALL", default_value = "")]
    pub run_all: String,

    #[arg(long, env = "INPUT_TERRAGRUNT-CONFIG", default_value = "")]
    pub terragrunt_config: String,

    #[arg(long, env = "INPUT_TERRAGRUNT-WORKING-DIR", default_value = "")]
    pub terragrunt_working_dir: String,

    #[arg(long, env = "INPUT_NON-INTERACTIVE", default_value = "")]
    pub non_interactive: String,

    #[arg(long, env = "INPUT_NO-AUTO-INIT", default_value = "")]
    pub no_auto_init: String,

    #[arg(long, env = "INPUT_NO-AUTO-RETRY", default_value = "")]
    pub no_auto_retry: String,

    /// Module parallelism for run-all
    #[arg(long, env = "INPUT_TERRAGRUNT-PARALLELISM", default_value = "")]
    pub terragrunt_parallelism: String,

    #[arg(long, env = "INPUT_INCLUDE-DIRS", default_value = "")]
    pub include_dirs: String,

    #[arg(long, env = "INPUT_EXCLUDE-DIRS", default_value = "")]
    pub exclude_dirs: String,

    #[arg(long, env = "INPUT_IGNORE-DEPENDENCY-ERRORS", default_value = "")]
    pub ignore_dependency_errors: String,

    #[arg(long, env = "INPUT_IGNORE-EXTERNAL-DEPENDENCIES", default_value = "")]
    pub ignore_external_dependencies: String,

    #[arg(long, env = "INPUT_INCLUDE-EXTERNAL-DEPENDENCIES", default_value = "")]
    pub include_external_dependencies: String,

    #[arg(long, env = "INPUT_TERRAGRUNT-SOURCE", default_value = "")]
    pub terragrunt_source: String,

    /// Source replacements as a JSON object
    #[arg(long, env = "INPUT_SOURCE-MAP", default_value = "")]
    pub source_map: String,

    #[arg(long, env = "INPUT_DOWNLOAD-DIR", default_value = "")]
    pub download_dir: String,

    #[arg(long, env = "INPUT_IAM-ROLE", default_value = "")]
    pub iam_role: String,

    #[arg(long, env = "INPUT_IAM-ROLE-SESSION-NAME", default_value = "")]
    pub iam_role_session_name: String,

    #[arg(long, env = "INPUT_STRICT-INCLUDE", default_value = "")]
    pub strict_include: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ImageToolsArgs {
    /// Subcommand to run (create, inspect, prune)
    #[arg(long, env = "INPUT_COMMAND")]
    pub command: String,

    /// Flags and positional values as a JSON object; the "" key holds positionals
    #[arg(long, env = "INPUT_METADATA", default_value = "")]
    pub metadata: String,

    /// Report command-string as a JSON array of escaped tokens
    #[arg(long, env = "INPUT_USE-STRING-LIST", default_value = "")]
    pub use_string_list: String,

    #[arg(long, env = "INPUT_DRY-RUN", default_value = "")]
    pub dry_run: String,

    #[arg(long, env = "INPUT_WORKING-DIRECTORY", default_value = "")]
    pub working_directory: String,

    #[arg(long, env = "INPUT_ENV", default_value = "")]
    pub env: String,
}
