//! Recorded turns.
//!
//! A turn is one entry of a game's append-only log: who acted, when, and
//! what they did. The creation timestamp is the replay ordering key and,
//! together with the optional `TurnId`, the turn's identity.
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use cluedo_notes::core::{Disproof, Turn};
//!
//! let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
//! let turn = Turn::suggestion(
//!     "A",
//!     at,
//!     ["Miss Scarlett", "Rope", "Library"],
//!     Some(Disproof::new("C")),
//! );
//!
//! assert_eq!(turn.clues().len(), 3);
//! assert_eq!(
//!     turn.to_string(),
//!     "Player A suggested Miss Scarlett, Rope, Library. Player C disproved."
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::clue::ClueId;
use super::player::PlayerId;

/// Clues named by a suggestion or accusation.
/// SmallVec keeps the usual one-per-category triple inline.
pub type ClueSet = SmallVec<[ClueId; 3]>;

/// Turn identity token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnId(String);

impl TurnId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who disproved a suggestion, and with which card if it was seen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disproof {
    pub player: PlayerId,

    /// Only known when the viewpoint player made the suggestion.
    pub clue: Option<ClueId>,
}

impl Disproof {
    /// A disproof whose card was not seen.
    pub fn new(player: impl Into<PlayerId>) -> Self {
        Self {
            player: player.into(),
            clue: None,
        }
    }

    /// Record the card that was shown.
    #[must_use]
    pub fn with_clue(mut self, clue: impl Into<ClueId>) -> Self {
        self.clue = Some(clue.into());
        self
    }
}

/// What happened during a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TurnKind {
    /// No informative action.
    Idle,

    /// One clue per category named; optionally disproved by another player.
    Suggestion {
        suggestions: ClueSet,
        disproved: Option<Disproof>,
    },

    /// Final guess of one clue per category.
    Accusation { accusations: ClueSet, success: bool },
}

/// One entry of the turn log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    #[serde(default)]
    pub id: Option<TurnId>,

    /// The acting player.
    pub player: PlayerId,

    pub created_at: DateTime<Utc>,

    #[serde(flatten)]
    pub kind: TurnKind,
}

impl Turn {
    /// A turn in which the player did nothing informative.
    pub fn idle(player: impl Into<PlayerId>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            player: player.into(),
            created_at,
            kind: TurnKind::Idle,
        }
    }

    /// A suggestion naming `clues`.
    pub fn suggestion<C: Into<ClueId>>(
        player: impl Into<PlayerId>,
        created_at: DateTime<Utc>,
        clues: impl IntoIterator<Item = C>,
        disproved: Option<Disproof>,
    ) -> Self {
        Self {
            id: None,
            player: player.into(),
            created_at,
            kind: TurnKind::Suggestion {
                suggestions: clues.into_iter().map(Into::into).collect(),
                disproved,
            },
        }
    }

    /// An accusation naming `clues`.
    pub fn accusation<C: Into<ClueId>>(
        player: impl Into<PlayerId>,
        created_at: DateTime<Utc>,
        clues: impl IntoIterator<Item = C>,
        success: bool,
    ) -> Self {
        Self {
            id: None,
            player: player.into(),
            created_at,
            kind: TurnKind::Accusation {
                accusations: clues.into_iter().map(Into::into).collect(),
                success,
            },
        }
    }

    /// Attach an identity token.
    #[must_use]
    pub fn with_id(mut self, id: TurnId) -> Self {
        self.id = Some(id);
        self
    }

    /// Clues named by this turn (empty for idle turns).
    #[must_use]
    pub fn clues(&self) -> &[ClueId] {
        match &self.kind {
            TurnKind::Idle => &[],
            TurnKind::Suggestion { suggestions, .. } => suggestions,
            TurnKind::Accusation { accusations, .. } => accusations,
        }
    }

    /// The disproving player of a suggestion, if any.
    #[must_use]
    pub fn disprover(&self) -> Option<&PlayerId> {
        match &self.kind {
            TurnKind::Suggestion {
                disproved: Some(d), ..
            } => Some(&d.player),
            _ => None,
        }
    }

    /// Check if this is a successful accusation.
    #[must_use]
    pub fn is_winning_accusation(&self) -> bool {
        matches!(self.kind, TurnKind::Accusation { success: true, .. })
    }

    /// Check if two log entries denote the same turn.
    ///
    /// Both the identity token and the timestamp must match.
    #[must_use]
    pub fn is_same_turn(&self, other: &Turn) -> bool {
        self.id == other.id && self.created_at == other.created_at
    }
}

fn join(clues: &[ClueId]) -> String {
    clues
        .iter()
        .map(ClueId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TurnKind::Idle => write!(f, "Player {} did nothing.", self.player),
            TurnKind::Suggestion {
                suggestions,
                disproved,
            } => {
                write!(f, "Player {} suggested {}. ", self.player, join(suggestions))?;
                match disproved {
                    None => f.write_str("No one disproved."),
                    Some(Disproof {
                        player,
                        clue: Some(clue),
                    }) => write!(f, "Player {player} disproved with clue {clue}."),
                    Some(Disproof { player, clue: None }) => {
                        write!(f, "Player {player} disproved.")
                    }
                }
            }
            TurnKind::Accusation {
                accusations,
                success,
            } => {
                let outcome = if *success {
                    "and succeeded"
                } else {
                    "but failed"
                };
                write!(
                    f,
                    "Player {} accused {} {}.",
                    self.player,
                    join(accusations),
                    outcome
                )
            }
        }
    }
}
