pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod repository;
pub mod validate;
pub mod wasm;
