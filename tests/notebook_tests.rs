//! End-to-end notebook flows through the store layer.

use chrono::{DateTime, TimeZone, Utc};
use cluedo_notes::core::{Disproof, Game, Mark, NotebookConfig, Turn};
use cluedo_notes::store::{GameRepository, MemoryRepository, Notebook, Snapshot, StoreError};
use serde_json::json;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn notebook() -> Notebook<MemoryRepository> {
    Notebook::new(MemoryRepository::new(), NotebookConfig::new().with_seed(42))
}

// =============================================================================
// Turn log
// =============================================================================

#[test]
fn test_rejected_turn_never_reaches_log() {
    let mut nb = notebook();
    let id = nb.create_game(["A", "B", "C", "D"]).unwrap();
    nb.set_initial_clues(&id, ["Rope", "Hall"]).unwrap();

    nb.submit_turn(
        &id,
        Turn::suggestion(
            "A",
            at(1),
            ["Mr. Green", "Wrench", "Library"],
            Some(Disproof::new("B").with_clue("Wrench")),
        ),
    )
    .unwrap();
    let before = nb.grid(&id).unwrap();

    // C cannot show the wrench B holds.
    let bad = Turn::suggestion(
        "A",
        at(2),
        ["Miss Scarlett", "Wrench", "Study"],
        Some(Disproof::new("C").with_clue("Wrench")),
    );
    let preview = nb.preview_turn(&id, &bad).unwrap();
    assert!(!preview.is_admissible());

    let err = nb.submit_turn(&id, bad).unwrap_err();
    assert!(matches!(&err, StoreError::Conflicts(conflicts) if conflicts.len() == 2));
    assert_eq!(err.to_string(), "Conflicts: [Wrench B ✅], [Wrench C ❌]");
    assert_eq!(nb.game(&id).unwrap().turns().len(), 1);
    assert_eq!(nb.grid(&id).unwrap(), before);
}

#[test]
fn test_delete_turn_restores_previous_grid() {
    let mut nb = notebook();
    let id = nb.create_game(["A", "B", "C"]).unwrap();
    nb.set_initial_clues(&id, ["Rope"]).unwrap();

    nb.submit_turn(&id, Turn::suggestion("B", at(1), ["Miss Scarlett", "Dagger", "Study"], None))
        .unwrap();
    let before = nb.grid(&id).unwrap();

    nb.submit_turn(&id, Turn::accusation("C", at(2), ["Mr. Green", "Wrench", "Hall"], true))
        .unwrap();
    assert!(nb.is_solved(&id).unwrap());

    let winning = nb.game(&id).unwrap().last_turn().cloned().unwrap();
    assert_eq!(nb.delete_turn(&id, &winning).unwrap(), 1);
    assert_eq!(nb.delete_turn(&id, &winning).unwrap(), 0);

    assert_eq!(nb.grid(&id).unwrap(), before);
    assert!(!nb.is_solved(&id).unwrap());
}

#[test]
fn test_flagging_skips_annotated_and_fixed_cells() {
    let mut nb = notebook();
    let id = nb.create_game(["A", "B", "C"]).unwrap();
    nb.set_initial_clues(&id, ["Rope"]).unwrap();

    // Annotate C/Hall first: flagged, then yes.
    nb.toggle_mark(&id, &"Hall".into(), &"C".into()).unwrap();
    nb.toggle_mark(&id, &"Hall".into(), &"C".into()).unwrap();

    nb.submit_turn(
        &id,
        Turn::suggestion("B", at(1), ["Miss Scarlett", "Rope", "Hall"], Some(Disproof::new("C"))),
    )
    .unwrap();

    let game = nb.game(&id).unwrap();
    let manual = game.manual_marks();
    assert_eq!(manual.get(&"Miss Scarlett".into(), &"C".into()), Some(Mark::Flagged));
    assert_eq!(manual.get(&"Hall".into(), &"C".into()), Some(Mark::Yes));
    // Rope is a fixed fact for C.
    assert_eq!(manual.get(&"Rope".into(), &"C".into()), None);
}

#[test]
fn test_shown_clue_does_not_flag() {
    let mut nb = notebook();
    let id = nb.create_game(["A", "B", "C"]).unwrap();
    nb.set_initial_clues(&id, ["Rope"]).unwrap();

    nb.submit_turn(
        &id,
        Turn::suggestion(
            "A",
            at(1),
            ["Miss Scarlett", "Dagger", "Hall"],
            Some(Disproof::new("B").with_clue("Hall")),
        ),
    )
    .unwrap();

    assert!(nb.game(&id).unwrap().manual_marks().is_empty());
}

#[test]
fn test_table_prefers_fixed_facts() {
    let mut nb = notebook();
    let id = nb.create_game(["A", "B"]).unwrap();
    nb.set_initial_clues(&id, ["Rope"]).unwrap();
    nb.toggle_mark(&id, &"Hall".into(), &"B".into()).unwrap();

    let table = nb.table(&id).unwrap();
    assert_eq!(table.columns, vec!["Answer", "A", "B"]);
    assert_eq!(table.rows.len(), 21);

    let rope = table.row(&"Rope".into()).unwrap();
    assert!(rope.cell(&"A".into()).unwrap().fixed);
    let hall = table.row(&"Hall".into()).unwrap();
    let cell = hall.cell(&"B".into()).unwrap();
    assert_eq!(cell.mark, Some(Mark::Flagged));
    assert!(!cell.fixed);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_game_document_layout() {
    let mut nb = notebook();
    let id = nb.create_game_at(["A", "B", "C"], at(0)).unwrap();
    nb.set_initial_clues(&id, ["Rope"]).unwrap();
    nb.submit_turn(
        &id,
        Turn::suggestion(
            "B",
            at(60),
            ["Miss Scarlett", "Dagger", "Study"],
            Some(Disproof::new("C")),
        ),
    )
    .unwrap();

    let game = nb.game(&id).unwrap();
    let doc = serde_json::to_value(&game).unwrap();

    assert_eq!(doc["players"][0], json!({ "id": "A", "name": "A" }));
    assert_eq!(doc["clues"], json!(["Rope"]));
    assert_eq!(doc["createdAt"], json!("1970-01-01T00:00:00Z"));

    let turn = &doc["turns"][0];
    assert_eq!(turn["type"], json!("suggestion"));
    assert_eq!(turn["player"], json!("B"));
    assert_eq!(turn["suggestions"], json!(["Miss Scarlett", "Dagger", "Study"]));
    assert_eq!(turn["disproved"], json!({ "player": "C", "clue": null }));
    assert!(turn["id"].is_string());

    assert_eq!(doc["marks"]["Dagger"]["C"], json!("?"));

    let back: Game = serde_json::from_value(doc).unwrap();
    assert_eq!(back, game);
}

#[test]
fn test_snapshot_survives_restart() {
    let mut nb = notebook();
    let id = nb.create_game(["Alice", "Bob"]).unwrap();
    nb.set_initial_clues(&id, ["Knife"]).unwrap_err();
    nb.set_initial_clues(&id, ["Dagger"]).unwrap();
    nb.submit_turn(&id, Turn::idle("Bob", at(5))).unwrap();

    let json = Snapshot::capture(nb.repository()).to_json_pretty().unwrap();

    let mut repo = MemoryRepository::new();
    Snapshot::from_json(&json).unwrap().restore_into(&mut repo).unwrap();
    assert_eq!(repo.known_players(), vec!["Alice", "Bob"]);

    let restored = Notebook::new(repo, NotebookConfig::new());
    assert_eq!(restored.grid(&id).unwrap(), nb.grid(&id).unwrap());
    assert_eq!(restored.next_player(&id).unwrap().map(|p| p.name), Some("Alice".to_string()));
}

#[test]
fn test_missing_game() {
    let nb = notebook();
    assert!(matches!(nb.grid(&"NOPE".into()), Err(StoreError::GameNotFound(_))));
}

#[test]
fn test_config_from_json() {
    let config: NotebookConfig =
        serde_json::from_str(r#"{ "min_players": 3, "seed": 9 }"#).unwrap();
    assert_eq!(config.min_players, 3);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.catalog.len(), 21);

    let mut nb = Notebook::new(MemoryRepository::new(), config);
    assert!(nb.create_game(["A", "B"]).is_err());
}
