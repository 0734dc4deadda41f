use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const LISTEN_ADDR_ENV: &str = "LEDGER_LISTEN_ADDR";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Reads the listen address from the first CLI argument, then from
    /// `LEDGER_LISTEN_ADDR`, falling back to `0.0.0.0:8080`.
    pub fn from_env() -> anyhow::Result<Config> {
        Config::resolve(
            std::env::args().nth(1),
            std::env::var(LISTEN_ADDR_ENV).ok(),
        )
    }

    fn resolve(arg: Option<String>, env: Option<String>) -> anyhow::Result<Config> {
        let raw = arg
            .or(env)
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw
            .parse()
            .context(format!("Invalid listen address: `{}`", raw))?;
        Ok(Config { listen_addr })
    }
}
