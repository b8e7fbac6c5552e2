pub mod command_breakdown;

pub use command_breakdown::command_breakdown;
