pub mod commands;
pub mod handlers;

pub use commands::{
    ActivityCommand, Cli, Commands, CropCommand, CustomerCommand, OrderCommand, ReminderCommand,
};
