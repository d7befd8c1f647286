//! CLI command implementations

pub mod archive;
pub mod init;
pub mod show;
pub mod status;
pub mod track;
