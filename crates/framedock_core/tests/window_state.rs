use framedock_core::db::open_db_in_memory;
use framedock_core::{SqliteWindowStateRepository, WindowStateRepository};

#[test]
fn get_before_any_save_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteWindowStateRepository::new(&conn);

    assert_eq!(repo.get().unwrap(), None);
}

#[test]
fn save_then_get_returns_exact_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteWindowStateRepository::new(&conn);

    repo.save(10, 20, 800, 600, false).unwrap();

    let state = repo.get().unwrap().unwrap();
    assert_eq!(state.x, 10);
    assert_eq!(state.y, 20);
    assert_eq!(state.width, 800);
    assert_eq!(state.height, 600);
    assert!(!state.maximized);
    assert!(state.updated_at > 0);
}

#[test]
fn save_overwrites_every_field_wholesale() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteWindowStateRepository::new(&conn);

    repo.save(1, 2, 300, 400, true).unwrap();
    repo.save(-5, 0, 1920, 1080, false).unwrap();

    let state = repo.get().unwrap().unwrap();
    assert_eq!(state.x, -5);
    assert_eq!(state.y, 0);
    assert_eq!(state.width, 1920);
    assert_eq!(state.height, 1080);
    assert!(!state.maximized);

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM window_state;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}
