// To-Do Lists - Core Library
// Exposes all modules for use in the web server and tests

pub mod db;
pub mod error;
pub mod pages;
pub mod validation;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use db::{
    Item, List,
    setup_database, create_list, get_list, insert_item, create_list_with_item,
    get_items_for_list, count_lists, count_items, list_url,
};
pub use error::{Error, Result};
pub use pages::ItemForm;
pub use validation::{validate_item, ItemError, DUPLICATE_ITEM_ERROR, EMPTY_ITEM_ERROR};

#[cfg(feature = "server")]
pub use config::ServerConfig;
#[cfg(feature = "server")]
pub use server::{router, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
