use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::error::{invalid_config_error, Error};

const DEFAULT_PORT: u16 = 8010;
const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT`, `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: parse_var(&lookup, "HOST", defaults.host)?,
            port: parse_var(&lookup, "PORT", defaults.port)?,
            database_url: optional_var(&lookup, "DATABASE_URL")?
                .unwrap_or(defaults.database_url),
            max_connections: parse_var(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.max_connections,
            )?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn optional_var<F>(lookup: &F, name: &str) -> Result<Option<String>, Error>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, Error>
where
    F: Fn(&str) -> Result<String, env::VarError>,
    T: FromStr,
{
    match optional_var(lookup, name)? {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| invalid_config_error(name, &value)),
        None => Ok(default),
    }
}
