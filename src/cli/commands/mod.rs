pub mod backup;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod new;
pub mod set;
pub mod show;
