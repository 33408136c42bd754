pub mod cli;
pub mod explorer_config;
pub mod interactive;
pub mod ports;
