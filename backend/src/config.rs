//! Server settings loaded via OrthoConfig.
//!
//! Values come from `ACCOUNTS_*` environment variables or command-line flags;
//! unset values fall back to the defaults below.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Listener settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACCOUNTS")]
pub struct ServerSettings {
    /// Interface address to bind.
    #[ortho_config(default = "0.0.0.0".to_owned())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

impl ServerSettings {
    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] with kind `InvalidInput` when the host is
    /// not an IP address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid ACCOUNTS_HOST {:?}: {err}", self.host),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("accounts")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("ACCOUNTS_HOST", None::<String>),
            ("ACCOUNTS_PORT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8080);
        assert_eq!(
            settings.bind_addr().expect("default address"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ACCOUNTS_HOST", Some("127.0.0.1".to_owned())),
            ("ACCOUNTS_PORT", Some("9090".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("configured address"),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
    }

    #[rstest]
    fn unset_fields_keep_their_defaults_alongside_overrides() {
        let _guard = lock_env([
            ("ACCOUNTS_HOST", None::<String>),
            ("ACCOUNTS_PORT", Some("9191".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 9191);
    }

    #[rstest]
    fn non_ip_host_is_rejected() {
        let settings = ServerSettings {
            host: "localhost".to_owned(),
            port: 8080,
        };
        let err = settings.bind_addr().expect_err("hostnames are not resolved");
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
