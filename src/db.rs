use crate::error::{Error, Result};
use rusqlite::{ffi, params, Connection, OptionalExtension};

/// A to-do list. Identity only; its items point back to it by `list_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub id: i64,
}

impl List {
    /// Canonical URL of the list page (also the add-item form action)
    pub fn url(&self) -> String {
        list_url(self.id)
    }
}

pub fn list_url(id: i64) -> String {
    format!("/lists/{}/", id)
}

/// One to-do entry, owned by exactly one list
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub list_id: i64,
    pub text: String,
}

pub fn setup_database(conn: &Connection) -> Result<()> {
    // Enable WAL mode for crash recovery
    // (in-memory databases report "memory" and stay that way)
    let _mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    conn.pragma_update(None, "foreign_keys", "ON")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS lists (
            id INTEGER PRIMARY KEY AUTOINCREMENT
        )",
        [],
    )?;

    // Item text is unique per list, not globally
    conn.execute(
        "CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL,
            list_id INTEGER NOT NULL REFERENCES lists(id) ON DELETE CASCADE,
            UNIQUE (list_id, text)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_items_list ON items(list_id)",
        [],
    )?;

    Ok(())
}

pub fn create_list(conn: &Connection) -> Result<List> {
    conn.execute("INSERT INTO lists DEFAULT VALUES", [])?;

    Ok(List {
        id: conn.last_insert_rowid(),
    })
}

pub fn get_list(conn: &Connection, id: i64) -> Result<Option<List>> {
    let list = conn
        .query_row("SELECT id FROM lists WHERE id = ?1", params![id], |row| {
            Ok(List { id: row.get(0)? })
        })
        .optional()?;

    Ok(list)
}

/// Insert one item. Text already present in the same list is
/// [`Error::DuplicateItem`] and nothing is written.
pub fn insert_item(conn: &Connection, list_id: i64, text: &str) -> Result<Item> {
    conn.execute(
        "INSERT INTO items (text, list_id) VALUES (?1, ?2)",
        params![text, list_id],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Error::DuplicateItem { list_id }
        }
        other => Error::Database(other),
    })?;

    Ok(Item {
        id: conn.last_insert_rowid(),
        list_id,
        text: text.to_string(),
    })
}

/// Create a list together with its first item.
/// Both rows commit or neither does.
pub fn create_list_with_item(conn: &Connection, text: &str) -> Result<(List, Item)> {
    let tx = conn.unchecked_transaction()?;
    let list = create_list(&tx)?;
    let item = insert_item(&tx, list.id, text)?;
    tx.commit()?;

    Ok((list, item))
}

/// Items of one list in insertion order
pub fn get_items_for_list(conn: &Connection, list_id: i64) -> Result<Vec<Item>> {
    let mut stmt = conn.prepare(
        "SELECT id, list_id, text
         FROM items
         WHERE list_id = ?1
         ORDER BY id ASC",
    )?;

    let items = stmt
        .query_map(params![list_id], |row| {
            Ok(Item {
                id: row.get(0)?,
                list_id: row.get(1)?,
                text: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(items)
}

pub fn count_lists(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM lists", [], |row| row.get(0))?;

    Ok(count)
}

pub fn count_items(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;

    Ok(count)
}
