use rusqlite::Connection;
use tempfile::TempDir;
use todo_lists::{
    count_items, count_lists, create_list_with_item, get_items_for_list, get_list, insert_item,
    setup_database,
};

#[test]
fn test_lists_survive_reopening_the_database() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todo.db");

    let list_id = {
        let conn = Connection::open(&path).unwrap();
        setup_database(&conn).unwrap();
        let (list, _) = create_list_with_item(&conn, "Buy milk").unwrap();
        insert_item(&conn, list.id, "Buy eggs").unwrap();
        list.id
    };

    let conn = Connection::open(&path).unwrap();
    setup_database(&conn).unwrap();

    assert!(get_list(&conn, list_id).unwrap().is_some());
    assert_eq!(count_lists(&conn).unwrap(), 1);
    assert_eq!(count_items(&conn).unwrap(), 2);

    let texts: Vec<String> = get_items_for_list(&conn, list_id)
        .unwrap()
        .into_iter()
        .map(|item| item.text)
        .collect();
    assert_eq!(texts, vec!["Buy milk", "Buy eggs"]);
}

#[cfg(feature = "server")]
#[test]
fn test_server_config_opens_file_database() {
    use clap::Parser;
    use todo_lists::ServerConfig;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lists.db");
    let config =
        ServerConfig::parse_from(["todo-server", "--database", path.to_str().unwrap()]);

    let conn = config.open_database().unwrap();
    create_list_with_item(&conn, "first").unwrap();
    drop(conn);

    let conn = config.open_database().unwrap();
    assert_eq!(count_lists(&conn).unwrap(), 1);
    assert!(path.exists());
}
