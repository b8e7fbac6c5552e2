//! iac-composer - Type-safe command composition for infrastructure tooling
//!
//! This crate provides:
//! - Fluent builders for Terraform, Terragrunt and `docker buildx imagetools` commands
//! - Capability rules deciding which flags each subcommand accepts
//! - Rendering of built commands as argv, single-line, multi-line or JSON list strings
//! - Parsing of raw GitHub Action inputs and the GitHub run context
pub mod command;
pub mod context;
pub mod error;
pub mod executor;
pub mod input;
pub mod provider;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

pub use command::{
    CommandAssembler, CommandFormatter, IacBuilder, ImageToolsBuilder, ImageToolsService,
    MetadataKey, MetadataStore, TerraformBuilder, TerraformService, TerragruntBuilder,
    TerragruntService,
};
pub use context::{GitHubContext, GitHubContextBuilder};
pub use executor::{ExecutionOutput, ExecutionRequest, ProcessExecutor};
pub use provider::{IacProvider, ImageToolsProvider, TerragruntProvider};
