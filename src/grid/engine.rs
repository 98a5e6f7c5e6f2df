//! Mark engine: replay a game into its knowledge grid.
//!
//! ## Algorithm
//!
//! 1. **Seed**: every clue the viewpoint player holds is `Yes` for them and
//!    `No` for everyone else, the case file included.
//! 2. **Replay**: turns are applied in ascending creation time.
//!    - Idle turns and failed accusations change nothing.
//!    - A suggestion marks `No` for every player asked before the disprover.
//!      If the viewpoint player asked and saw the card, that card is held by
//!      the disprover.
//!    - A successful accusation places every accused clue in the case file.
//!
//! The grid is rebuilt from scratch on every call. [`apply_turn`] is shared
//! with draft computation so a full replay and a chain of merged drafts
//! always agree.

use tracing::{debug, trace};

use super::sparse::Grid;
use crate::core::{EngineError, EngineResult, Game, Mark, PlayerId, Turn, TurnKind};

/// Compute the authoritative grid for a game.
///
/// Fails only on malformed input (unknown players, self-disproof, a
/// disproved clue that was not suggested, or a roster violation).
///
/// ## Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use cluedo_notes::core::{Game, GameId, Mark, Player, PlayerId, Turn};
/// use cluedo_notes::grid::compute_full_grid;
///
/// let players = ["A", "B", "C"].into_iter().map(Player::named).collect();
/// let mut game = Game::new(GameId::new("G"), players, Utc::now()).unwrap();
/// game.set_self_clues(vec!["Rope".into()]);
/// game.push_turn(Turn::suggestion(
///     "B",
///     Utc.timestamp_opt(1, 0).unwrap(),
///     ["Mr. Green", "Dagger", "Hall"],
///     None,
/// ));
///
/// let grid = compute_full_grid(&game).unwrap();
/// assert_eq!(grid.get(&"Rope".into(), &"A".into()), Some(Mark::Yes));
/// assert_eq!(grid.get(&"Rope".into(), &PlayerId::case_file()), Some(Mark::No));
/// assert_eq!(grid.get(&"Hall".into(), &"C".into()), Some(Mark::No));
/// assert_eq!(grid.get(&"Hall".into(), &"A".into()), Some(Mark::No));
/// ```
pub fn compute_full_grid(game: &Game) -> EngineResult<Grid> {
    let mut grid = seed_grid(game)?;
    let turns = game.turns_in_order();

    for turn in &turns {
        apply_turn(&mut grid, turn, game)?;
    }

    debug!(
        game = %game.id,
        turns = turns.len(),
        cells = grid.len(),
        "replayed game"
    );
    Ok(grid)
}

/// Grid implied by the viewpoint player's own hand alone.
pub fn seed_grid(game: &Game) -> EngineResult<Grid> {
    game.validate()?;

    let mut grid = Grid::new();
    let (Some(viewpoint), Some(clues)) = (game.viewpoint(), game.self_clues()) else {
        return Ok(grid);
    };

    let holders: Vec<PlayerId> = game.holders().collect();
    for clue in clues {
        grid.mark_held_by(clue, &viewpoint.id, &holders);
    }
    Ok(grid)
}

/// Write the cells implied by one turn into `grid`, overwriting.
pub(crate) fn apply_turn(grid: &mut Grid, turn: &Turn, game: &Game) -> EngineResult<()> {
    let rotation = game.rotation();
    rotation.position(&turn.player)?;

    match &turn.kind {
        TurnKind::Idle => {}

        TurnKind::Suggestion {
            suggestions,
            disproved,
        } => {
            let disprover = disproved.as_ref().map(|d| &d.player);
            let asked = rotation.asked_before(&turn.player, disprover)?;
            trace!(player = %turn.player, asked = asked.len(), "suggestion");

            for clue in suggestions {
                for &player in &asked {
                    grid.set(clue.clone(), player.clone(), Mark::No);
                }
            }

            if let Some(disproof) = disproved {
                if let Some(clue) = &disproof.clue {
                    if !suggestions.contains(clue) {
                        return Err(EngineError::DisprovedClueNotSuggested(clue.clone()));
                    }
                    if rotation.is_viewpoint(&turn.player) {
                        let holders: Vec<PlayerId> = game.holders().collect();
                        grid.mark_held_by(clue, &disproof.player, &holders);
                    }
                }
            }
        }

        TurnKind::Accusation {
            accusations,
            success,
        } => {
            if *success {
                let holders: Vec<PlayerId> = game.holders().collect();
                let answer = PlayerId::case_file();
                for clue in accusations {
                    grid.mark_held_by(clue, &answer, &holders);
                }
            }
        }
    }
    Ok(())
}
