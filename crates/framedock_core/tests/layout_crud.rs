use framedock_core::db::open_db_in_memory;
use framedock_core::{Layout, LayoutId, LayoutRepository, RepoError, SqliteLayoutRepository};
use rusqlite::Connection;

#[test]
fn save_new_layout_assigns_id_and_starts_inactive() {
    let mut conn = open_db_in_memory().unwrap();

    let layout = save(&mut conn, "work", r#"{"panels":["editor"]}"#);

    assert_eq!(layout.id, 1);
    assert_eq!(layout.name, "work");
    assert_eq!(layout.layout_json, r#"{"panels":["editor"]}"#);
    assert!(!layout.is_active);
    assert!(layout.created_at > 0);
    assert_eq!(layout.created_at, layout.updated_at);
}

#[test]
fn save_existing_name_updates_json_and_preserves_id_and_active_flag() {
    let mut conn = open_db_in_memory().unwrap();

    let first = save(&mut conn, "work", r#"{"rev":1}"#);
    set_active(&mut conn, first.id);
    conn.execute("UPDATE layouts SET created_at = 1000, updated_at = 1000;", [])
        .unwrap();

    let second = save(&mut conn, "work", r#"{"rev":2}"#);

    assert_eq!(second.id, first.id);
    assert_eq!(second.layout_json, r#"{"rev":2}"#);
    assert!(second.is_active);
    assert_eq!(second.created_at, 1000);
    assert!(second.updated_at > 1000);
}

#[test]
fn get_returns_saved_layout_and_missing_id_is_not_found() {
    let mut conn = open_db_in_memory().unwrap();

    let saved = save(&mut conn, "work", "{}");
    let loaded = SqliteLayoutRepository::new(&mut conn).get(saved.id).unwrap();
    assert_eq!(loaded, saved);

    let err = SqliteLayoutRepository::new(&mut conn).get(99).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(99)));
}

#[test]
fn get_active_returns_none_on_fresh_store() {
    let mut conn = open_db_in_memory().unwrap();

    assert_eq!(get_active(&mut conn), None);
}

#[test]
fn set_active_activates_exactly_one_layout() {
    let mut conn = open_db_in_memory().unwrap();

    let work = save(&mut conn, "work", "{}");
    let home = save(&mut conn, "home", "{}");

    set_active(&mut conn, work.id);
    assert_eq!(get_active(&mut conn).map(|l| l.id), Some(work.id));

    set_active(&mut conn, home.id);
    assert_eq!(get_active(&mut conn).map(|l| l.id), Some(home.id));

    let active_count = list_all(&mut conn)
        .iter()
        .filter(|layout| layout.is_active)
        .count();
    assert_eq!(active_count, 1);
}

#[test]
fn set_active_with_missing_id_clears_the_active_layout() {
    let mut conn = open_db_in_memory().unwrap();

    let work = save(&mut conn, "work", "{}");
    set_active(&mut conn, work.id);

    set_active(&mut conn, 999);

    assert_eq!(get_active(&mut conn), None);
    let reloaded = SqliteLayoutRepository::new(&mut conn).get(work.id).unwrap();
    assert!(!reloaded.is_active);
}

#[test]
fn delete_removes_only_the_requested_row() {
    let mut conn = open_db_in_memory().unwrap();

    let work = save(&mut conn, "work", "{}");
    let home = save(&mut conn, "home", "{}");

    SqliteLayoutRepository::new(&mut conn).delete(home.id).unwrap();

    let remaining = list_all(&mut conn);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, work.id);
}

#[test]
fn delete_missing_id_is_a_noop() {
    let mut conn = open_db_in_memory().unwrap();

    let work = save(&mut conn, "work", "{}");

    SqliteLayoutRepository::new(&mut conn).delete(999).unwrap();

    let remaining = list_all(&mut conn);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0], work);
}

#[test]
fn list_all_orders_by_updated_at_descending() {
    let mut conn = open_db_in_memory().unwrap();

    save(&mut conn, "alpha", "{}");
    save(&mut conn, "beta", "{}");
    save(&mut conn, "gamma", "{}");
    backdate(&conn, "alpha", 100);
    backdate(&conn, "beta", 300);
    backdate(&conn, "gamma", 200);

    let names: Vec<_> = list_all(&mut conn)
        .into_iter()
        .map(|layout| layout.name)
        .collect();
    assert_eq!(names, ["beta", "gamma", "alpha"]);
}

#[test]
fn resaving_a_layout_moves_it_to_the_front_of_the_list() {
    let mut conn = open_db_in_memory().unwrap();

    save(&mut conn, "alpha", "{}");
    save(&mut conn, "beta", "{}");
    backdate(&conn, "alpha", 100);
    backdate(&conn, "beta", 200);

    save(&mut conn, "alpha", r#"{"rev":2}"#);

    let names: Vec<_> = list_all(&mut conn)
        .into_iter()
        .map(|layout| layout.name)
        .collect();
    assert_eq!(names, ["alpha", "beta"]);
}

fn save(conn: &mut Connection, name: &str, layout_json: &str) -> Layout {
    SqliteLayoutRepository::new(conn)
        .save(name, layout_json)
        .unwrap()
}

fn set_active(conn: &mut Connection, id: LayoutId) {
    SqliteLayoutRepository::new(conn).set_active(id).unwrap();
}

fn get_active(conn: &mut Connection) -> Option<Layout> {
    SqliteLayoutRepository::new(conn).get_active().unwrap()
}

fn list_all(conn: &mut Connection) -> Vec<Layout> {
    SqliteLayoutRepository::new(conn).list_all().unwrap()
}

fn backdate(conn: &Connection, name: &str, updated_at: i64) {
    conn.execute(
        "UPDATE layouts SET updated_at = ?1 WHERE name = ?2;",
        rusqlite::params![updated_at, name],
    )
    .unwrap();
}
