pub mod core_config;
pub mod errors;
pub mod tutorial;
