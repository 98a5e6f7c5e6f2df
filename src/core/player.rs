//! Player identification and turn rotation.
//!
//! ## PlayerId
//!
//! Opaque player identifier, unique within a game. The special
//! [`PlayerId::case_file`] sentinel stands for the hidden solution and takes
//! part in the grid like a player, but never in the rotation.
//!
//! ## Rotation
//!
//! The player list order is circular. `Rotation` answers "who comes next"
//! and "who was asked before the disprover" with modulo arithmetic.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Serialized form of the case-file sentinel.
pub const CASE_FILE_ID: &str = "-";

/// Opaque player identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The case-file (answer) sentinel.
    #[must_use]
    pub fn case_file() -> Self {
        Self(CASE_FILE_ID.to_string())
    }

    /// Check if this is the case-file sentinel.
    #[must_use]
    pub fn is_case_file(&self) -> bool {
        self.0 == CASE_FILE_ID
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A seated player: identifier plus display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a player with distinct id and name.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Create a player whose id is its name.
    ///
    /// ```
    /// use cluedo_notes::core::Player;
    ///
    /// let alice = Player::named("Alice");
    /// assert_eq!(alice.id.as_str(), "Alice");
    /// assert_eq!(alice.name, "Alice");
    /// ```
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: PlayerId::new(name.clone()),
            name,
        }
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Circular view over a player list.
///
/// Position 0 is the viewpoint player (the notebook owner).
#[derive(Clone, Copy, Debug)]
pub struct Rotation<'a> {
    players: &'a [Player],
}

impl<'a> Rotation<'a> {
    /// Create a rotation over the given seating order.
    #[must_use]
    pub fn new(players: &'a [Player]) -> Self {
        Self { players }
    }

    /// Number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if nobody is seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Seat index of a player.
    pub fn position(&self, player: &PlayerId) -> EngineResult<usize> {
        self.players
            .iter()
            .position(|p| &p.id == player)
            .ok_or_else(|| EngineError::UnknownPlayer(player.clone()))
    }

    /// Player at a seat index, wrapping around the table.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&'a Player> {
        if self.players.is_empty() {
            return None;
        }
        self.players.get(index % self.players.len())
    }

    /// The viewpoint player (seat 0).
    #[must_use]
    pub fn viewpoint(&self) -> Option<&'a Player> {
        self.players.first()
    }

    /// Check if a player sits at the viewpoint seat.
    #[must_use]
    pub fn is_viewpoint(&self, player: &PlayerId) -> bool {
        self.viewpoint().is_some_and(|p| &p.id == player)
    }

    /// The player seated after `player`.
    pub fn next_after(&self, player: &PlayerId) -> EngineResult<&'a Player> {
        let index = self.position(player)?;
        self.at(index + 1)
            .ok_or_else(|| EngineError::UnknownPlayer(player.clone()))
    }

    /// Players asked before someone could disprove a suggestion.
    ///
    /// These are the players strictly between `asker` and `disprover` in
    /// seating order. Without a disprover the window runs all the way around
    /// the table back to (but excluding) the asker. A disprover seated right
    /// after the asker yields an empty window.
    ///
    /// ```
    /// use cluedo_notes::core::{Player, PlayerId, Rotation};
    ///
    /// let players: Vec<_> = ["A", "B", "C", "D"].into_iter().map(Player::named).collect();
    /// let rotation = Rotation::new(&players);
    ///
    /// let asked = rotation.asked_before(&"A".into(), Some(&"C".into())).unwrap();
    /// assert_eq!(asked, vec![&PlayerId::new("B")]);
    ///
    /// let asked = rotation.asked_before(&"C".into(), Some(&"B".into())).unwrap();
    /// assert_eq!(asked, vec![&PlayerId::new("D"), &PlayerId::new("A")]);
    /// ```
    pub fn asked_before(
        &self,
        asker: &PlayerId,
        disprover: Option<&PlayerId>,
    ) -> EngineResult<Vec<&'a PlayerId>> {
        let count = self.len();
        let start = self.position(asker)?;

        let end = match disprover {
            Some(d) if d == asker => return Err(EngineError::SelfDisproof(d.clone())),
            Some(d) => self
                .position(d)
                .map_err(|_| EngineError::UnknownDisprover(d.clone()))?,
            None => start,
        };
        let end = if end <= start { end + count } else { end };

        Ok((start + 1..end)
            .map(|i| &self.players[i % count].id)
            .collect())
    }

    /// Iterate over player ids in seating order.
    pub fn ids(&self) -> impl Iterator<Item = &'a PlayerId> {
        self.players.iter().map(|p| &p.id)
    }
}
