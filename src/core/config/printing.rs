use crate::core::config::data::{path_display, Config, DEFAULT_SERVER_URL};

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.server_url {
            Some(url) => println!("  server-url: {url}"),
            None => println!("  server-url: (unset, using {DEFAULT_SERVER_URL})"),
        }
        match &self.log_file {
            Some(path) => println!("  log-file: {}", path_display(path)),
            None => println!("  log-file: (unset)"),
        }
    }
}
