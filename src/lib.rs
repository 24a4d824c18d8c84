pub mod booter;
pub mod client;
pub mod config;
pub mod server;
pub mod store;
pub mod utils;
