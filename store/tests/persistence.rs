//! Whole-file persistence round-trips: every mutation flushes the full
//! image, so reopening the same path in a fresh store must reproduce the
//! in-memory rows exactly.

use todo_store::{NewTodo, StoreError, TodoPatch, TodoStore};

fn pending(title: &str) -> NewTodo {
    NewTodo {
        title: title.to_string(),
        description: None,
        status: "pending".to_string(),
    }
}

#[test]
fn fresh_path_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = TodoStore::open(dir.path().join("todo.db")).unwrap();
    assert!(store.list(0, 10).unwrap().is_empty());
}

#[test]
fn create_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.db");

    let store = TodoStore::open(&path).unwrap();
    let created = store
        .create(NewTodo {
            title: "Buy milk".to_string(),
            description: Some("2L".to_string()),
            status: "pending".to_string(),
        })
        .unwrap();
    drop(store);

    let reopened = TodoStore::open(&path).unwrap();
    assert_eq!(reopened.get(created.id).unwrap(), created);
}

#[test]
fn update_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.db");

    let store = TodoStore::open(&path).unwrap();
    let created = store.create(pending("Buy milk")).unwrap();
    store
        .update(
            created.id,
            TodoPatch {
                status: Some("done".to_string()),
                ..TodoPatch::default()
            },
        )
        .unwrap();
    drop(store);

    let reopened = TodoStore::open(&path).unwrap();
    let fetched = reopened.get(created.id).unwrap();
    assert_eq!(fetched.title, "Buy milk");
    assert_eq!(fetched.status, "done");
}

#[test]
fn delete_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.db");

    let store = TodoStore::open(&path).unwrap();
    let keep = store.create(pending("keep")).unwrap();
    let gone = store.create(pending("gone")).unwrap();
    store.delete(gone.id).unwrap();
    drop(store);

    let reopened = TodoStore::open(&path).unwrap();
    assert_eq!(reopened.get(keep.id).unwrap(), keep);
    assert!(matches!(
        reopened.get(gone.id).unwrap_err(),
        StoreError::NotFound(_)
    ));
}

#[test]
fn id_sequence_continues_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.db");

    let store = TodoStore::open(&path).unwrap();
    let first = store.create(pending("first")).unwrap();
    drop(store);

    let reopened = TodoStore::open(&path).unwrap();
    let second = reopened.create(pending("second")).unwrap();
    assert!(second.id > first.id);
}

#[test]
fn corrupt_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.db");
    std::fs::write(&path, b"this is not a sqlite image").unwrap();

    let err = TodoStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Load { .. }));
}
