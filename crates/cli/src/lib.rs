pub mod cli;
pub mod commands;
pub mod display;
pub mod executor;
pub mod outputs;

// Re-export commonly used items
pub use cli::{Cli, Commands, IacArgs, ImageToolsArgs, TerragruntArgs};
pub use commands::{RunEnv, run};
pub use executor::SystemExecutor;
pub use outputs::ActionOutputs;
