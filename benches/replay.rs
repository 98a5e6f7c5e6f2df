//! Criterion benchmarks for full replay and single-turn drafts.
//!
//! Run with:
//!     cargo bench --bench replay

use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use cluedo_notes::core::{Category, ClueCatalog, ClueId, Disproof, Game, GameId, Player, Turn};
use cluedo_notes::draft::{compute_draft, merge_draft};
use cluedo_notes::grid::compute_full_grid;

const PLAYERS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// A six-player game with `turns` suggestions rotating around the table.
fn game_with_turns(turns: usize) -> Game {
    let catalog = ClueCatalog::classic();
    let by_category: Vec<Vec<ClueId>> = Category::ALL
        .iter()
        .map(|c| catalog.by_category(*c).map(|d| d.id.clone()).collect())
        .collect();

    let players = PLAYERS.into_iter().map(Player::named).collect();
    let created_at = Utc.timestamp_opt(0, 0).unwrap();
    let mut game = Game::new(GameId::new("BENCH"), players, created_at).unwrap();
    game.set_self_clues(vec!["Rope".into(), "Hall".into(), "Mr. Green".into()]);

    for i in 0..turns {
        let actor = PLAYERS[i % PLAYERS.len()];
        let clues: Vec<ClueId> = by_category
            .iter()
            .map(|clues| clues[(i * 7 + 3) % clues.len()].clone())
            .collect();
        let disproof = match i % 3 {
            0 => None,
            _ => Some(Disproof::new(PLAYERS[(i + 2) % PLAYERS.len()])),
        };
        let at = Utc.timestamp_opt(i as i64 + 1, 0).unwrap();
        game.push_turn(Turn::suggestion(actor, at, clues, disproof));
    }
    game
}

fn bench_full_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_full_grid");
    for turns in [10, 100, 300] {
        let game = game_with_turns(turns);
        group.bench_with_input(BenchmarkId::from_parameter(turns), &game, |b, game| {
            b.iter(|| compute_full_grid(game).unwrap());
        });
    }
    group.finish();
}

fn bench_draft_merge(c: &mut Criterion) {
    let game = game_with_turns(100);
    let grid = compute_full_grid(&game).unwrap();
    let turn = Turn::suggestion(
        "A",
        Utc.timestamp_opt(1_000, 0).unwrap(),
        ["Miss Scarlett", "Dagger", "Study"],
        Some(Disproof::new("D")),
    );

    c.bench_function("draft_and_merge", |b| {
        b.iter(|| {
            let draft = compute_draft(&turn, &game).unwrap();
            merge_draft(&grid, &draft)
        });
    });
}

criterion_group!(benches, bench_full_replay, bench_draft_merge);
criterion_main!(benches);
