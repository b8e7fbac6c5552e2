//! Argument construction for each tool family
//!
//! Terraform-shaped arguments are command-aware: every flag family is looked up
//! in the capability tables and silently dropped when the command does not
//! accept it. Image tools arguments are a flat walk of the metadata store.

use super::capability::{Capability, supports};
use super::metadata::MetadataStore;
use crate::provider::{IacConfig, TerragruntOptions};
use tracing::debug;

/// Converts a provider's configuration into argv tokens
pub trait CommandAssembler {
    /// Binary to invoke
    fn executor(&self) -> &str;

    /// Tokens between the executor and the command
    fn sub_commands(&self) -> Vec<String> {
        Vec::new()
    }

    /// The command token itself
    fn command(&self) -> &str;

    /// Ordered flag/value tokens following the command
    fn to_command_args(&self) -> Vec<String>;

    /// `[executor, ...sub_commands, command, ...args]`
    fn build_command(&self) -> Vec<String> {
        let mut tokens = vec![self.executor().to_string()];
        tokens.extend(self.sub_commands());
        tokens.push(self.command().to_string());
        tokens.extend(self.to_command_args());
        tokens
    }
}

fn push_flag(args: &mut Vec<String>, flag: &str) {
    args.push(flag.to_string());
}

fn push_pair(args: &mut Vec<String>, flag: &str, value: impl Into<String>) {
    args.push(flag.to_string());
    args.push(value.into());
}

fn skip_unsupported(what: &str, command: &str, present: bool) {
    if present {
        debug!("Dropping {} for '{}': not supported by this command", what, command);
    }
}

/// Terraform arguments for the configured command
pub fn iac_args(config: &IacConfig) -> Vec<String> {
    let command = config.command();
    let mut args = Vec::new();

    // init: backend configuration
    if supports(Capability::BackendConfig, command) {
        for (key, value) in config.backend_config() {
            push_pair(&mut args, "-backend-config", format!("{key}={value}"));
        }
        if config.reconfigure() {
            push_flag(&mut args, "-reconfigure");
        }
        if config.migrate_state() {
            push_flag(&mut args, "-migrate-state");
        }
    } else {
        skip_unsupported(
            "backend configuration",
            command,
            !config.backend_config().is_empty() || config.reconfigure() || config.migrate_state(),
        );
    }

    if supports(Capability::Variables, command) {
        for (key, value) in config.variables() {
            push_pair(&mut args, "-var", format!("{key}={value}"));
        }
        for var_file in config.var_files() {
            push_pair(&mut args, "-var-file", var_file.as_str());
        }
    } else {
        skip_unsupported(
            "variables",
            command,
            !config.variables().is_empty() || !config.var_files().is_empty(),
        );
    }

    if supports(Capability::Target, command) {
        for target in config.targets() {
            push_pair(&mut args, "-target", target.as_str());
        }
    } else {
        skip_unsupported("targets", command, !config.targets().is_empty());
    }

    if supports(Capability::OutFile, command) {
        if let Some(out_file) = config.out_file() {
            push_pair(&mut args, "-out", out_file);
        }
    }

    // A saved plan already carries approval, so it wins over -auto-approve
    match config.plan_file() {
        Some(plan_file) if supports(Capability::PlanFile, command) => {
            args.push(plan_file.to_string());
            if config.auto_approve() {
                debug!("Plan file given for '{}', omitting -auto-approve", command);
            }
        }
        _ => {
            if config.auto_approve() {
                if supports(Capability::AutoApprove, command) {
                    push_flag(&mut args, "-auto-approve");
                } else {
                    skip_unsupported("-auto-approve", command, true);
                }
            }
        }
    }

    if config.no_color() {
        push_flag(&mut args, "-no-color");
    }
    if config.compact_warnings() {
        push_flag(&mut args, "-compact-warnings");
    }
    if let Some(parallelism) = config.parallelism().filter(|n| *n > 0) {
        push_pair(&mut args, "-parallelism", parallelism.to_string());
    }
    if let Some(lock_timeout) = config.lock_timeout() {
        push_pair(&mut args, "-lock-timeout", lock_timeout);
    }
    if let Some(refresh) = config.refresh() {
        args.push(format!("-refresh={refresh}"));
    }

    args
}

/// Terraform arguments followed by the `--terragrunt-*` flags
pub fn terragrunt_args(config: &IacConfig, options: &TerragruntOptions) -> Vec<String> {
    let mut args = iac_args(config);

    if let Some(path) = options.config_path() {
        push_pair(&mut args, "--terragrunt-config", path);
    }
    if let Some(dir) = options.working_dir() {
        push_pair(&mut args, "--terragrunt-working-dir", dir);
    }

    if options.non_interactive() {
        push_flag(&mut args, "--terragrunt-non-interactive");
    }
    if options.no_auto_init() {
        push_flag(&mut args, "--terragrunt-no-auto-init");
    }
    if options.no_auto_retry() {
        push_flag(&mut args, "--terragrunt-no-auto-retry");
    }

    match options.parallelism().filter(|n| *n > 0) {
        Some(parallelism) if options.run_all() => {
            push_pair(&mut args, "--terragrunt-parallelism", parallelism.to_string());
        }
        Some(_) => debug!("Ignoring terragrunt parallelism without run-all"),
        None => {}
    }

    for dir in options.include_dirs() {
        push_pair(&mut args, "--terragrunt-include-dir", dir.as_str());
    }
    for dir in options.exclude_dirs() {
        push_pair(&mut args, "--terragrunt-exclude-dir", dir.as_str());
    }

    if options.ignore_dependency_errors() {
        push_flag(&mut args, "--terragrunt-ignore-dependency-errors");
    }
    if options.ignore_external_dependencies() {
        push_flag(&mut args, "--terragrunt-ignore-external-dependencies");
    }
    if options.include_external_dependencies() {
        push_flag(&mut args, "--terragrunt-include-external-dependencies");
    }

    if let Some(source) = options.source() {
        push_pair(&mut args, "--terragrunt-source", source);
    }
    for (key, value) in options.source_map() {
        push_pair(&mut args, "--terragrunt-source-map", format!("{key}={value}"));
    }

    if let Some(dir) = options.download_dir() {
        push_pair(&mut args, "--terragrunt-download-dir", dir);
    }

    match options.iam_role() {
        Some(role) => {
            push_pair(&mut args, "--terragrunt-iam-role", role);
            if let Some(session) = options.iam_role_session_name() {
                push_pair(&mut args, "--terragrunt-iam-role-session-name", session);
            }
        }
        None => {
            if options.iam_role_session_name().is_some() {
                debug!("Ignoring IAM role session name without an IAM role");
            }
        }
    }

    if options.strict_include() {
        push_flag(&mut args, "--terragrunt-strict-include");
    }

    args
}

/// Flat metadata walk: unkeyed values are bare tokens, every other key
/// emits one `key value` pair per value
pub fn metadata_args(metadata: &MetadataStore) -> Vec<String> {
    let mut args = Vec::new();
    for (key, values) in metadata.entries() {
        for value in values {
            if !key.is_unkeyed() {
                args.push(key.as_str().to_string());
            }
            args.push(value.clone());
        }
    }
    args
}
