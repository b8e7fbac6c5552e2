pub mod command_kind;

// Re-export commonly used types
pub use command_kind::{ImageToolsCommand, TerraformCommand, TerragruntCommand};
