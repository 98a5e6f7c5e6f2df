//! # Notebook Service
//!
//! Application layer over a [`GameRepository`]. Every mutation loads a
//! snapshot, validates it, and saves the result back; a rejected request
//! leaves the repository untouched.
//!
//! ## Turn admission
//!
//! 1. Initial clues must be configured and nobody may have won yet
//! 2. Suggested/accused clues must name each category exactly once
//! 3. The turn's draft must merge into the current grid without conflicts
//!
//! Admitted suggestions that were disproved without the clue being shown
//! flag the disprover's open cells for those clues.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::{StoreError, StoreResult};
use super::repository::GameRepository;
use crate::core::config::DEFAULT_GAME_ID_ALPHABET;
use crate::core::{
    ClueId, EngineError, Game, GameId, IdGenerator, NotebookConfig, Player, PlayerId, Turn,
    TurnKind,
};
use crate::draft::{compute_draft, merge_draft, MergeOutcome};
use crate::grid::{compute_full_grid, Grid};
use crate::notes::{flag_disproved_clues, toggle_manual_mark, NoteTable, ToggleOutcome};

/// Id draws per length before the generator widens the id.
const ID_ATTEMPTS: usize = 64;

/// Listing entry for a stored game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: GameId,
    pub players: Vec<String>,
    pub turn_count: usize,
    pub solved: bool,
    pub created_at: DateTime<Utc>,
}

impl GameSummary {
    fn of(game: &Game) -> Self {
        Self {
            id: game.id.clone(),
            players: game.players().iter().map(|p| p.name.clone()).collect(),
            turn_count: game.turns().len(),
            solved: game.is_solved(),
            created_at: game.created_at(),
        }
    }
}

/// Clue notebook backed by a repository.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use cluedo_notes::core::{Mark, NotebookConfig, Turn};
/// use cluedo_notes::store::{MemoryRepository, Notebook};
///
/// let mut notebook = Notebook::new(MemoryRepository::new(), NotebookConfig::new().with_seed(7));
/// let id = notebook.create_game(["A", "B", "C"]).unwrap();
/// notebook.set_initial_clues(&id, ["Rope", "Hall"]).unwrap();
///
/// let at = Utc.timestamp_opt(1_000, 0).unwrap();
/// let turn = Turn::suggestion("B", at, ["Miss Scarlett", "Dagger", "Study"], None);
/// let grid = notebook.submit_turn(&id, turn).unwrap();
///
/// assert_eq!(grid.get(&"Dagger".into(), &"C".into()), Some(Mark::No));
/// ```
#[derive(Debug)]
pub struct Notebook<R: GameRepository> {
    repo: R,
    config: NotebookConfig,
    ids: IdGenerator,
}

impl<R: GameRepository> Notebook<R> {
    /// Create a notebook over `repo`.
    pub fn new(repo: R, config: NotebookConfig) -> Self {
        let ids = match config.seed {
            Some(seed) => IdGenerator::new(seed),
            None => IdGenerator::from_entropy(),
        };
        Self { repo, config, ids }
    }

    #[must_use]
    pub fn config(&self) -> &NotebookConfig {
        &self.config
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Load a snapshot of a game.
    pub fn game(&self, id: &GameId) -> StoreResult<Game> {
        self.repo
            .load(id)
            .ok_or_else(|| StoreError::GameNotFound(id.clone()))
    }

    // =========================================================================
    // Games
    // =========================================================================

    /// Start a game with the given player names, seat 0 first.
    pub fn create_game<I, S>(&mut self, names: I) -> StoreResult<GameId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.create_game_at(names, Utc::now())
    }

    /// Start a game with an explicit creation time.
    pub fn create_game_at<I, S>(
        &mut self,
        names: I,
        created_at: DateTime<Utc>,
    ) -> StoreResult<GameId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.into().trim().to_string())
            .collect();
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(StoreError::DuplicatePlayerName(name.clone()));
            }
        }
        let players = names.into_iter().map(Player::named).collect();
        self.insert_game(players, created_at)
    }

    /// Start a new game with the same seating as `id`.
    pub fn rematch(&mut self, id: &GameId) -> StoreResult<GameId> {
        let previous = self.game(id)?;
        let new_id = self.insert_game(previous.players().to_vec(), Utc::now())?;
        debug!(from = %id, to = %new_id, "rematch");
        Ok(new_id)
    }

    fn insert_game(
        &mut self,
        players: Vec<Player>,
        created_at: DateTime<Utc>,
    ) -> StoreResult<GameId> {
        if players.len() < self.config.min_players {
            return Err(EngineError::TooFewPlayers {
                min: self.config.min_players,
                actual: players.len(),
            }
            .into());
        }

        let id = self.fresh_game_id();
        let game = Game::new(id.clone(), players, created_at)?;
        for player in game.players() {
            self.repo.remember_player(&player.name);
        }
        info!(game = %id, players = game.player_count(), "created game");
        self.repo.save(game);
        Ok(id)
    }

    fn fresh_game_id(&mut self) -> GameId {
        let alphabet = if self.config.game_id_alphabet.is_empty() {
            DEFAULT_GAME_ID_ALPHABET
        } else {
            self.config.game_id_alphabet.as_str()
        };
        let mut len = self.config.game_id_length.max(1);
        loop {
            for _ in 0..ID_ATTEMPTS {
                let id = GameId::new(self.ids.code(alphabet, len));
                if !self.repo.contains(&id) {
                    return id;
                }
            }
            len += 1;
        }
    }

    /// Move the player at seat `from` to seat `to`.
    ///
    /// Only allowed before the viewpoint's hand is entered: seat 0 owns
    /// those clues and the rotation drives every inference.
    pub fn reorder_players(&mut self, id: &GameId, from: usize, to: usize) -> StoreResult<()> {
        let mut game = self.game(id)?;
        if game.self_clues().is_some() || !game.turns().is_empty() {
            return Err(StoreError::RosterLocked(id.clone()));
        }
        if !game.move_player(from, to) {
            let seat = if from >= game.player_count() { from } else { to };
            return Err(StoreError::NoSuchSeat(seat));
        }
        self.repo.save(game);
        Ok(())
    }

    /// Record the clues the viewpoint player holds.
    ///
    /// The hand can be entered once; replacing it would rewrite the seed
    /// under an already admitted log.
    pub fn set_initial_clues<I, C>(&mut self, id: &GameId, clues: I) -> StoreResult<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<ClueId>,
    {
        let mut game = self.game(id)?;
        if game.self_clues().is_some() {
            return Err(StoreError::InitialCluesSet(id.clone()));
        }
        let mut held: Vec<ClueId> = Vec::new();
        for clue in clues {
            let clue = clue.into();
            if !self.config.catalog.contains(&clue) {
                return Err(StoreError::UnknownClue(clue));
            }
            if !held.contains(&clue) {
                held.push(clue);
            }
        }
        game.set_self_clues(held);
        self.repo.save(game);
        Ok(())
    }

    /// Summaries of every game, oldest first.
    #[must_use]
    pub fn games(&self) -> Vec<GameSummary> {
        let mut games: Vec<GameSummary> = self.repo.all().iter().map(GameSummary::of).collect();
        games.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        games
    }

    pub fn delete_game(&mut self, id: &GameId) -> StoreResult<()> {
        if !self.repo.delete(id) {
            return Err(StoreError::GameNotFound(id.clone()));
        }
        info!(game = %id, "deleted game");
        Ok(())
    }

    /// Names seen in any game.
    #[must_use]
    pub fn known_players(&self) -> Vec<String> {
        self.repo.known_players()
    }

    pub fn is_solved(&self, id: &GameId) -> StoreResult<bool> {
        Ok(self.game(id)?.is_solved())
    }

    // =========================================================================
    // Grid
    // =========================================================================

    /// Fixed facts after replaying the whole log.
    pub fn grid(&self, id: &GameId) -> StoreResult<Grid> {
        Ok(compute_full_grid(&self.game(id)?)?)
    }

    /// Note table over the configured catalog, manual marks included.
    pub fn table(&self, id: &GameId) -> StoreResult<NoteTable> {
        let game = self.game(id)?;
        let grid = compute_full_grid(&game)?;
        Ok(NoteTable::build(&game, &grid, self.config.catalog.iter()))
    }

    /// Toggle a manual mark. Fixed cells are left alone.
    pub fn toggle_mark(
        &mut self,
        id: &GameId,
        clue: &ClueId,
        holder: &PlayerId,
    ) -> StoreResult<ToggleOutcome> {
        let mut game = self.game(id)?;
        if !self.config.catalog.contains(clue) {
            return Err(StoreError::UnknownClue(clue.clone()));
        }
        if !game.has_holder(holder) {
            return Err(EngineError::UnknownPlayer(holder.clone()).into());
        }

        let fixed = compute_full_grid(&game)?;
        let outcome = toggle_manual_mark(game.manual_marks_mut(), &fixed, clue, holder);
        if matches!(outcome, ToggleOutcome::Changed { .. }) {
            self.repo.save(game);
        }
        Ok(outcome)
    }

    // =========================================================================
    // Turns
    // =========================================================================

    /// Draft and merge a turn without recording it.
    pub fn preview_turn(&self, id: &GameId, turn: &Turn) -> StoreResult<MergeOutcome> {
        let game = self.game(id)?;
        self.check_turn(&game, turn)?;
        let current = compute_full_grid(&game)?;
        let draft = compute_draft(turn, &game)?;
        Ok(merge_draft(&current, &draft))
    }

    /// Record a turn if its inferences agree with the current grid.
    ///
    /// Returns the merged grid. Turns without an id get a fresh one.
    pub fn submit_turn(&mut self, id: &GameId, turn: Turn) -> StoreResult<Grid> {
        let mut game = self.game(id)?;
        self.check_turn(&game, &turn)?;

        let turn = match turn.id {
            Some(_) => turn,
            None => {
                let turn_id = self.ids.turn_id();
                turn.with_id(turn_id)
            }
        };

        let current = compute_full_grid(&game)?;
        let draft = compute_draft(&turn, &game)?;
        let outcome = merge_draft(&current, &draft);
        if !outcome.is_admissible() {
            warn!(game = %id, conflicts = outcome.conflicts.len(), "rejected turn");
            return Err(StoreError::Conflicts(outcome.conflicts));
        }

        if let TurnKind::Suggestion {
            suggestions,
            disproved: Some(disproof),
        } = &turn.kind
        {
            if disproof.clue.is_none() {
                flag_disproved_clues(
                    game.manual_marks_mut(),
                    &outcome.grid,
                    &disproof.player,
                    suggestions,
                );
            }
        }

        info!(game = %id, player = %turn.player, "{}", turn);
        game.push_turn(turn);
        self.repo.save(game);
        Ok(outcome.grid)
    }

    /// Remove a turn (matched by id and timestamp).
    ///
    /// Returns the number of removed log entries.
    pub fn delete_turn(&mut self, id: &GameId, turn: &Turn) -> StoreResult<usize> {
        let mut game = self.game(id)?;
        let removed = game.remove_turn(turn);
        if removed > 0 {
            debug!(game = %id, removed, "deleted turn");
            self.repo.save(game);
        }
        Ok(removed)
    }

    /// The player seated after whoever acted last, if anyone has acted.
    pub fn next_player(&self, id: &GameId) -> StoreResult<Option<Player>> {
        let game = self.game(id)?;
        let Some(last) = game.last_turn() else {
            return Ok(None);
        };
        Ok(Some(game.rotation().next_after(&last.player)?.clone()))
    }

    fn check_turn(&self, game: &Game, turn: &Turn) -> StoreResult<()> {
        if game.self_clues().is_none() {
            return Err(StoreError::InitialCluesPending(game.id.clone()));
        }
        if game.is_solved() {
            return Err(StoreError::GameSolved(game.id.clone()));
        }
        match &turn.kind {
            TurnKind::Idle => Ok(()),
            TurnKind::Suggestion { suggestions, .. } => {
                Ok(self.config.catalog.check_triple(suggestions)?)
            }
            TurnKind::Accusation { accusations, .. } => {
                Ok(self.config.catalog.check_triple(accusations)?)
            }
        }
    }
}
