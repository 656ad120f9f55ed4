//! Subcommand implementations for `josutool`.

pub mod accuracy_ops;
pub mod config_ops;
pub mod read_ops;
