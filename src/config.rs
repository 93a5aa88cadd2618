use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use crate::error::StartupError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

const HOST_VAR: &str = "OPS_CONSOLE_HOST";
const PORT_VAR: &str = "OPS_CONSOLE_PORT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16
}

impl Default for Config {
    fn default() -> Self {

        Config {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT
        }

    }
}

impl Config {

    /// Reads overrides from the process environment, after loading `.env` if one exists.
    /// `dotenvy` also searches parent directories, so a `.env` above the working
    /// directory can change the bind address or fail startup.
    pub fn from_env() -> Result<Self, StartupError> {

        dotenvy::dotenv().ok();

        Self::from_lookup(|name| std::env::var(name).ok())

    }

    /// Resolves the config from an arbitrary variable lookup. Unset variables keep
    /// their defaults; set ones must parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>
    {

        let mut config = Config::default();

        if let Some(value) = lookup(HOST_VAR) {
            config.host = value.trim().parse().map_err(|e: std::net::AddrParseError| {
                StartupError::Config { var: HOST_VAR, value: value.clone(), reason: e.to_string() }
            })?;
        }

        if let Some(value) = lookup(PORT_VAR) {
            config.port = value.trim().parse().map_err(|e: std::num::ParseIntError| {
                StartupError::Config { var: PORT_VAR, value: value.clone(), reason: e.to_string() }
            })?;
        }

        Ok(config)

    }

    pub fn socket_addr(&self) -> SocketAddr {

        SocketAddr::new(self.host, self.port)

    }

}
