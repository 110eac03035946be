pub mod config;
pub mod dispatch;
pub mod migrate;
pub mod show;
