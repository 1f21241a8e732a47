//! CLI commands

pub mod cleanup;
pub mod complete;
pub mod init;
pub mod list;
pub mod register;
pub mod resolve;
pub mod unregister;
