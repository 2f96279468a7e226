//! CLI subcommands

pub mod archive;
pub mod init;
pub mod list;
pub mod new;
pub mod schema;
