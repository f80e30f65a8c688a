//! Server configuration

use anyhow::Result;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the service listens on
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `PORT`: Port to listen on (default: 3000)
    pub fn from_env() -> Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        Ok(ServerConfig { port })
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_server_config_defaults() {
        unsafe {
            std::env::remove_var("PORT");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_server_config_from_env() {
        unsafe {
            std::env::set_var("PORT", "8080");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);

        unsafe {
            std::env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn test_server_config_ignores_garbage_port() {
        unsafe {
            std::env::set_var("PORT", "not-a-port");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 3000);

        unsafe {
            std::env::remove_var("PORT");
        }
    }
}
