pub mod app;
pub mod config;
pub mod document;
pub mod errors;
pub mod message;
pub mod operations;
