pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod start;
pub mod tasks;
