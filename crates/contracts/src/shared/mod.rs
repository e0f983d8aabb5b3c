pub mod config;
pub mod header;
pub mod navigation;
