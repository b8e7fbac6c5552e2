//! Command building, argument assembly and rendering

pub mod assembler;
pub mod builder;
pub mod capability;
pub mod factory;
pub mod formatter;
pub mod metadata;
pub mod service;

// Re-export commonly used types
pub use assembler::CommandAssembler;
pub use builder::{IacBuilder, ImageToolsBuilder, TerraformBuilder, TerragruntBuilder};
pub use capability::{Capability, supports};
pub use formatter::{CommandFormatter, escape_arg};
pub use metadata::{MetadataKey, MetadataStore};
pub use service::{ImageToolsService, TerraformService, TerragruntService};
