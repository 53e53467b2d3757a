use std::env;
use std::net::SocketAddrV4;
use std::path::PathBuf;
use std::str::FromStr;
use anyhow::{bail, Context};

const DEFAULT_HOST_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_COLUMN_COUNT: usize = 3;

/// Server configs
#[derive(Debug, Clone)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// number of card columns on the dashboard
    pub column_count: usize,
    /// full accept/reject/confirm flow on every card
    pub with_workflow: bool,
    /// replaces the embedded sample orders when set
    pub orders_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, column_count: usize, with_workflow: bool, orders_path: Option<PathBuf>) -> Self {
        Self {
            addr,
            column_count,
            with_workflow,
            orders_path,
        }
    }

    /// Read `HOST`, `COLUMN_COUNT`, `WITH_WORKFLOW` and `ORDERS_PATH`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = SocketAddrV4::from_str(
            lookup("HOST")
                .unwrap_or(DEFAULT_HOST_ADDR.to_string())
                .as_str(),
        )
        .context("failed to parse HOST")?;
        let column_count = match lookup("COLUMN_COUNT") {
            Some(v) => v.parse::<usize>().context("failed to parse COLUMN_COUNT")?,
            None => DEFAULT_COLUMN_COUNT,
        };
        if column_count == 0 {
            bail!("COLUMN_COUNT must be at least 1");
        }
        let with_workflow = match lookup("WITH_WORKFLOW") {
            Some(v) => v.parse::<bool>().context("failed to parse WITH_WORKFLOW")?,
            None => true,
        };
        let orders_path = lookup("ORDERS_PATH").filter(|p| !p.is_empty()).map(PathBuf::from);

        Ok(Self::new(addr, column_count, with_workflow, orders_path))
    }
}
