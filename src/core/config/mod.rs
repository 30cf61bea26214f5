pub mod data;
pub mod io;
pub mod printing;

pub use data::{Config, DEFAULT_SERVER_URL, SERVER_URL_ENV};
pub use io::ConfigError;
