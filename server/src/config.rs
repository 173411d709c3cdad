use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// REST endpoint serving the item collection.
#[derive(Debug, Parser)]
#[command(name = "item_server", version)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "ITEM_SERVER_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// SQLite database file, created and seeded if missing
    #[arg(long, env = "ITEM_SERVER_DATABASE", default_value = "items.sqlite")]
    pub database: PathBuf,
}
