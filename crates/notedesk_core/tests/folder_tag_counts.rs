use notedesk_core::{AppStore, NoteDraft, NotePatch, SqliteLocalStore, StoreError};

fn open_store() -> AppStore<SqliteLocalStore> {
    AppStore::open(SqliteLocalStore::open_in_memory().unwrap()).unwrap()
}

fn folder_count(app: &AppStore<SqliteLocalStore>, id: &str) -> usize {
    app.folders()
        .iter()
        .find(|folder| folder.id == id)
        .map(|folder| folder.count)
        .unwrap_or_else(|| panic!("folder {id} should exist"))
}

fn tag_count(app: &AppStore<SqliteLocalStore>, name: &str) -> Option<usize> {
    app.tags()
        .iter()
        .find(|tag| tag.name == name)
        .map(|tag| tag.count)
}

#[test]
fn first_run_seeds_four_builtin_folders() {
    let app = open_store();
    let ids: Vec<_> = app.folders().iter().map(|folder| folder.id.as_str()).collect();
    assert_eq!(ids, ["personal", "work", "ideas", "archive"]);
    assert!(app.folders().iter().all(|folder| folder.count == 0));
}

#[test]
fn folder_counts_track_note_mutations() {
    let mut app = open_store();
    let note = app
        .create_note(NoteDraft {
            folder: Some("work".to_string()),
            ..NoteDraft::default()
        })
        .unwrap();
    app.create_note(NoteDraft {
        folder: Some("work".to_string()),
        ..NoteDraft::default()
    })
    .unwrap();
    assert_eq!(folder_count(&app, "work"), 2);

    // Refiling moves the count, not the note's position.
    app.update_note(
        note.id,
        NotePatch {
            folder: Some("personal".to_string()),
            ..NotePatch::default()
        },
    )
    .unwrap();
    assert_eq!(folder_count(&app, "work"), 1);
    assert_eq!(folder_count(&app, "personal"), 1);

    app.delete_note(note.id).unwrap();
    assert_eq!(folder_count(&app, "personal"), 0);
}

#[test]
fn create_folder_slugifies_name() {
    let mut app = open_store();
    let folder = app.create_folder("  Side   Projects ", "#123456").unwrap();
    assert_eq!(folder.id, "side-projects");
    assert_eq!(folder.name, "Side   Projects");
    assert_eq!(folder.count, 0);
}

#[test]
fn create_folder_rejects_blank_name_and_duplicate_slug() {
    let mut app = open_store();

    let blank = app.create_folder("   ", "#fff").unwrap_err();
    assert!(matches!(blank, StoreError::Validation(_)));

    // "Work" slugifies to the seeded `work` id.
    let duplicate = app.create_folder("Work", "#fff").unwrap_err();
    assert!(matches!(duplicate, StoreError::Validation(_)));
    assert_eq!(app.folders().len(), 4);
}

#[test]
fn deleting_a_folder_leaves_notes_dangling_but_intact() {
    let mut app = open_store();
    let note = app
        .create_note(NoteDraft {
            folder: Some("ideas".to_string()),
            ..NoteDraft::default()
        })
        .unwrap();

    assert!(app.delete_folder("ideas").unwrap());
    assert!(!app.delete_folder("ideas").unwrap());
    assert!(app.folders().iter().all(|folder| folder.id != "ideas"));

    // The note keeps its dangling folder reference.
    assert_eq!(app.note(note.id).unwrap().folder, "ideas");
}

#[test]
fn emptied_folders_are_never_auto_deleted() {
    let mut app = open_store();
    let note = app
        .create_note(NoteDraft {
            folder: Some("archive".to_string()),
            ..NoteDraft::default()
        })
        .unwrap();
    app.delete_note(note.id).unwrap();

    assert!(app.folders().iter().any(|folder| folder.id == "archive"));
    assert_eq!(folder_count(&app, "archive"), 0);
}

#[test]
fn tag_counts_recompute_without_additive_drift() {
    let mut app = open_store();
    let note = app
        .create_note(NoteDraft {
            tags: vec!["rust".to_string(), "notes".to_string()],
            ..NoteDraft::default()
        })
        .unwrap();
    assert_eq!(tag_count(&app, "rust"), Some(1));

    // Repeated edits carrying the same tags must not inflate counts.
    for _ in 0..3 {
        app.update_note(
            note.id,
            NotePatch {
                tags: Some(vec!["rust".to_string(), "notes".to_string()]),
                ..NotePatch::default()
            },
        )
        .unwrap();
    }
    assert_eq!(tag_count(&app, "rust"), Some(1));
    assert_eq!(tag_count(&app, "notes"), Some(1));
}

#[test]
fn removed_tags_drop_out_of_the_registry() {
    let mut app = open_store();
    let note = app
        .create_note(NoteDraft {
            tags: vec!["keep".to_string(), "drop".to_string()],
            ..NoteDraft::default()
        })
        .unwrap();

    app.update_note(
        note.id,
        NotePatch {
            tags: Some(vec!["keep".to_string()]),
            ..NotePatch::default()
        },
    )
    .unwrap();

    assert_eq!(tag_count(&app, "keep"), Some(1));
    assert_eq!(tag_count(&app, "drop"), None);

    app.delete_note(note.id).unwrap();
    assert!(app.tags().is_empty());
}

#[test]
fn popular_tags_sort_descending_with_stable_ties() {
    let mut app = open_store();
    app.create_note(NoteDraft {
        tags: vec!["alpha".to_string(), "beta".to_string()],
        ..NoteDraft::default()
    })
    .unwrap();
    app.create_note(NoteDraft {
        tags: vec!["beta".to_string(), "gamma".to_string()],
        ..NoteDraft::default()
    })
    .unwrap();

    let ranked = app.popular_tags(10);
    assert_eq!(ranked[0].name, "beta");
    assert_eq!(ranked[0].count, 2);
    // alpha and gamma tie at 1; registry order breaks the tie.
    let tied: Vec<_> = ranked[1..].iter().map(|tag| tag.name.as_str()).collect();
    let alpha_pos = app.tags().iter().position(|tag| tag.name == "alpha").unwrap();
    let gamma_pos = app.tags().iter().position(|tag| tag.name == "gamma").unwrap();
    if alpha_pos < gamma_pos {
        assert_eq!(tied, ["alpha", "gamma"]);
    } else {
        assert_eq!(tied, ["gamma", "alpha"]);
    }

    assert_eq!(app.popular_tags(1).len(), 1);
}
