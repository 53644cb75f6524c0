use std::env;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: String,
}

impl AppConfig {
    /// Reads configuration from the environment, with defaults.
    pub fn from_env() -> Self {
        let addr = env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        Self { addr }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addr_is_local() {
        // BIND_ADDRESS is unset in the test environment
        if env::var("BIND_ADDRESS").is_err() {
            assert_eq!(AppConfig::from_env().addr, "127.0.0.1:8080");
        }
    }
}
