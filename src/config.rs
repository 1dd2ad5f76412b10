// Server configuration: command-line flags with environment fallbacks

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about = "To-Do lists web server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "TODO_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: String,

    /// SQLite database file (created if missing)
    #[arg(long, env = "TODO_DATABASE", default_value = "todo.db")]
    pub database: PathBuf,

    /// Keep everything in memory; nothing survives a restart
    #[arg(long, conflicts_with = "database")]
    pub memory: bool,
}

impl ServerConfig {
    /// Open (and initialize) the configured database
    pub fn open_database(&self) -> crate::Result<rusqlite::Connection> {
        let conn = if self.memory {
            rusqlite::Connection::open_in_memory()?
        } else {
            rusqlite::Connection::open(&self.database)?
        };
        crate::db::setup_database(&conn)?;
        Ok(conn)
    }
}
