use notedesk_core::{AppStore, NoteDraft, NoteFilter, NotePatch, SqliteLocalStore};

fn open_store() -> AppStore<SqliteLocalStore> {
    AppStore::open(SqliteLocalStore::open_in_memory().unwrap()).unwrap()
}

fn seed_notes(app: &mut AppStore<SqliteLocalStore>) {
    for (title, content, tags, folder) in [
        ("Groceries", "milk and eggs", vec!["errands"], ""),
        ("Standup notes", "sprint BLOCKERS", vec!["work", "meeting"], "work"),
        ("Gift ideas", "a kite", vec!["errands", "family"], "personal"),
    ] {
        app.create_note(NoteDraft {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            tags: tags.into_iter().map(str::to_string).collect(),
            folder: if folder.is_empty() {
                None
            } else {
                Some(folder.to_string())
            },
        })
        .unwrap();
    }
}

#[test]
fn starred_filter_returns_starred_subset_in_collection_order() {
    let mut app = open_store();
    seed_notes(&mut app);

    let ids: Vec<_> = app.notes().iter().map(|note| note.id).collect();
    app.update_note(
        ids[0],
        NotePatch {
            starred: Some(true),
            ..NotePatch::default()
        },
    )
    .unwrap();
    app.update_note(
        ids[2],
        NotePatch {
            starred: Some(true),
            ..NotePatch::default()
        },
    )
    .unwrap();

    let starred = app.notes_by_filter(&NoteFilter::Starred);
    assert_eq!(starred.len(), 2);
    assert_eq!(starred[0].id, ids[0]);
    assert_eq!(starred[1].id, ids[2]);
    assert!(starred.iter().all(|note| note.starred));
}

#[test]
fn today_filter_includes_freshly_touched_notes() {
    let mut app = open_store();
    seed_notes(&mut app);

    // Everything was just created, so its updated_at falls on today.
    assert_eq!(app.notes_by_filter(&NoteFilter::Today).len(), 3);
}

#[test]
fn folder_filter_matches_exact_folder_id() {
    let mut app = open_store();
    seed_notes(&mut app);

    let work = app.notes_by_filter(&NoteFilter::Folder("work".to_string()));
    assert_eq!(work.len(), 1);
    assert_eq!(work[0].title, "Standup notes");

    assert!(app
        .notes_by_filter(&NoteFilter::Folder("missing".to_string()))
        .is_empty());
}

#[test]
fn filter_selector_parses_from_presentation_strings() {
    let mut app = open_store();
    seed_notes(&mut app);

    assert_eq!(app.notes_by_filter(&NoteFilter::from("all")).len(), 3);
    assert_eq!(
        app.notes_by_filter(&NoteFilter::from("personal")).len(),
        1
    );
}

#[test]
fn blank_search_returns_everything_unfiltered() {
    let mut app = open_store();
    seed_notes(&mut app);

    assert_eq!(app.search_notes("").len(), 3);
    assert_eq!(app.search_notes("   ").len(), 3);
}

#[test]
fn search_is_case_insensitive_over_title_content_and_tags() {
    let mut app = open_store();
    seed_notes(&mut app);

    // Title match.
    assert_eq!(app.search_notes("groceries")[0].title, "Groceries");
    // Content match, case-folded both ways.
    assert_eq!(app.search_notes("blockers")[0].title, "Standup notes");
    // Tag substring match.
    let tagged = app.search_notes("ERRAND");
    assert_eq!(tagged.len(), 2);

    assert!(app.search_notes("no such thing").is_empty());
}

#[test]
fn search_results_keep_collection_order() {
    let mut app = open_store();
    seed_notes(&mut app);

    let hits = app.search_notes("errands");
    let all_ids: Vec<_> = app.notes().iter().map(|note| note.id).collect();
    let hit_positions: Vec<_> = hits
        .iter()
        .map(|hit| all_ids.iter().position(|id| *id == hit.id).unwrap())
        .collect();
    assert!(hit_positions.windows(2).all(|pair| pair[0] < pair[1]));
}
