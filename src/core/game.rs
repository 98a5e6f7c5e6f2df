//! Game record: the unit of persistence.
//!
//! ## Game
//!
//! - Ordered player list (seat 0 is the viewpoint player)
//! - Self-known clues (`None` until the owner has entered them)
//! - Append-only turn log
//! - Sparse manual-mark overlay
//!
//! The engine only reads a `Game`. All mutation goes through the store,
//! which uses the conflict-checked append path for turns.

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use super::clue::ClueId;
use super::error::{EngineError, EngineResult};
use super::player::{Player, PlayerId, Rotation};
use super::turn::Turn;
use crate::grid::Grid;

/// Smallest playable table.
pub const MIN_PLAYERS: usize = 2;

/// Game identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tracked game.
///
/// Uses an `im` vector for the turn log so snapshots handed to the engine
/// are O(1) clones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,

    players: Vec<Player>,

    /// Clues the viewpoint player holds.
    clues: Option<Vec<ClueId>>,

    turns: Vector<Turn>,

    /// Manual annotations, keyed like the computed grid.
    marks: Grid,

    created_at: DateTime<Utc>,
}

impl Game {
    /// Create a game with an empty log.
    ///
    /// Fails if the roster is too small, has duplicates, or uses the
    /// case-file id.
    pub fn new(id: GameId, players: Vec<Player>, created_at: DateTime<Utc>) -> EngineResult<Self> {
        let game = Self {
            id,
            players,
            clues: None,
            turns: Vector::new(),
            marks: Grid::new(),
            created_at,
        };
        game.validate()?;
        Ok(game)
    }

    /// Check roster invariants.
    pub fn validate(&self) -> EngineResult<()> {
        if self.players.len() < MIN_PLAYERS {
            return Err(EngineError::TooFewPlayers {
                min: MIN_PLAYERS,
                actual: self.players.len(),
            });
        }
        for (i, player) in self.players.iter().enumerate() {
            if player.id.is_case_file() {
                return Err(EngineError::ReservedPlayerId(player.id.clone()));
            }
            if self.players[..i].iter().any(|p| p.id == player.id) {
                return Err(EngineError::DuplicatePlayer(player.id.clone()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // === Players ===

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Circular seating order.
    #[must_use]
    pub fn rotation(&self) -> Rotation<'_> {
        Rotation::new(&self.players)
    }

    /// The notebook owner (seat 0).
    #[must_use]
    pub fn viewpoint(&self) -> Option<&Player> {
        self.players.first()
    }

    /// Every grid column: the case file, then players in seating order.
    pub fn holders(&self) -> impl Iterator<Item = PlayerId> + '_ {
        std::iter::once(PlayerId::case_file()).chain(self.players.iter().map(|p| p.id.clone()))
    }

    /// Check if `id` is a grid column of this game.
    #[must_use]
    pub fn has_holder(&self, id: &PlayerId) -> bool {
        id.is_case_file() || self.players.iter().any(|p| &p.id == id)
    }

    /// Move a player to another seat.
    ///
    /// Returns false if either index is out of range.
    pub fn move_player(&mut self, from: usize, to: usize) -> bool {
        if from >= self.players.len() || to >= self.players.len() {
            return false;
        }
        let player = self.players.remove(from);
        self.players.insert(to, player);
        true
    }

    // === Self-known clues ===

    /// Clues the viewpoint player holds, if configured.
    #[must_use]
    pub fn self_clues(&self) -> Option<&[ClueId]> {
        self.clues.as_deref()
    }

    pub fn set_self_clues(&mut self, clues: Vec<ClueId>) {
        self.clues = Some(clues);
    }

    // === Turn log ===

    /// Turns in insertion order.
    #[must_use]
    pub fn turns(&self) -> &Vector<Turn> {
        &self.turns
    }

    /// Turns in replay order: ascending creation time, ties kept in
    /// insertion order.
    #[must_use]
    pub fn turns_in_order(&self) -> Vec<&Turn> {
        let mut ordered: Vec<&Turn> = self.turns.iter().collect();
        ordered.sort_by_key(|t| t.created_at);
        ordered
    }

    /// Most recent turn in replay order.
    #[must_use]
    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns_in_order().pop()
    }

    /// Append a turn. Callers must have checked it for conflicts.
    pub fn push_turn(&mut self, turn: Turn) {
        self.turns.push_back(turn);
    }

    /// Remove every log entry that is the same turn as `turn`.
    ///
    /// Returns the number of removed entries.
    pub fn remove_turn(&mut self, turn: &Turn) -> usize {
        let before = self.turns.len();
        self.turns.retain(|t| !t.is_same_turn(turn));
        before - self.turns.len()
    }

    /// Check if someone has already solved the case.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.turns.iter().any(Turn::is_winning_accusation)
    }

    // === Manual marks ===

    #[must_use]
    pub fn manual_marks(&self) -> &Grid {
        &self.marks
    }

    pub fn manual_marks_mut(&mut self) -> &mut Grid {
        &mut self.marks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn seats(names: &[&str]) -> Vec<Player> {
        names.iter().copied().map(Player::named).collect()
    }

    fn game(names: &[&str]) -> Game {
        Game::new(GameId::new("G1"), seats(names), at(0)).unwrap()
    }

    #[test]
    fn test_new_game_defaults() {
        let game = game(&["A", "B", "C"]);

        assert_eq!(game.player_count(), 3);
        assert_eq!(game.viewpoint().unwrap().id.as_str(), "A");
        assert!(game.self_clues().is_none());
        assert!(game.turns().is_empty());
        assert!(game.manual_marks().is_empty());
    }

    #[test]
    fn test_roster_validation() {
        assert_eq!(
            Game::new(GameId::new("x"), seats(&["A"]), at(0)),
            Err(EngineError::TooFewPlayers { min: 2, actual: 1 })
        );
        assert_eq!(
            Game::new(GameId::new("x"), seats(&["A", "B", "A"]), at(0)),
            Err(EngineError::DuplicatePlayer("A".into()))
        );
        assert_eq!(
            Game::new(GameId::new("x"), seats(&["A", "-"]), at(0)),
            Err(EngineError::ReservedPlayerId(PlayerId::case_file()))
        );
    }

    #[test]
    fn test_holders_start_with_case_file() {
        let game = game(&["A", "B"]);
        let holders: Vec<_> = game.holders().collect();

        assert_eq!(holders, vec![PlayerId::case_file(), "A".into(), "B".into()]);
        assert!(game.has_holder(&PlayerId::case_file()));
        assert!(!game.has_holder(&"Z".into()));
    }

    #[test]
    fn test_turns_in_order_sorts_by_timestamp() {
        let mut game = game(&["A", "B"]);
        game.push_turn(Turn::idle("A", at(30)));
        game.push_turn(Turn::idle("B", at(10)));
        game.push_turn(Turn::idle("A", at(20)));

        let order: Vec<_> = game.turns_in_order().iter().map(|t| t.created_at).collect();
        assert_eq!(order, vec![at(10), at(20), at(30)]);
        assert_eq!(game.last_turn().unwrap().created_at, at(30));
    }

    #[test]
    fn test_remove_turn_by_identity() {
        use crate::core::TurnId;

        let mut game = game(&["A", "B"]);
        let first = Turn::idle("A", at(1)).with_id(TurnId::new("one"));
        let second = Turn::idle("B", at(2)).with_id(TurnId::new("two"));
        game.push_turn(first.clone());
        game.push_turn(second);

        assert_eq!(game.remove_turn(&first), 1);
        assert_eq!(game.turns().len(), 1);
        assert_eq!(game.remove_turn(&first), 0);
    }

    #[test]
    fn test_is_solved() {
        let mut game = game(&["A", "B"]);
        game.push_turn(Turn::accusation("B", at(1), ["Rope"], false));
        assert!(!game.is_solved());

        game.push_turn(Turn::accusation("B", at(2), ["Rope"], true));
        assert!(game.is_solved());
    }

    #[test]
    fn test_move_player() {
        let mut game = game(&["A", "B", "C"]);
        assert!(game.move_player(2, 0));

        let ids: Vec<_> = game.players().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
        assert!(!game.move_player(3, 0));
    }

    #[test]
    fn test_game_serialization() {
        let mut game = game(&["A", "B"]);
        game.set_self_clues(vec!["Rope".into()]);
        game.push_turn(Turn::idle("A", at(5)));

        let json = serde_json::to_string(&game).unwrap();
        assert!(json.contains("\"createdAt\""));
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }
}
