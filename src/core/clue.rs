//! Clue identifiers and the clue catalog.
//!
//! The inference engine treats `ClueId` as an opaque string. The catalog
//! knows which category each clue belongs to; it seeds the note table and
//! lets the store check that a suggestion or accusation names exactly one
//! clue per category.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Clue identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClueId(String);

impl ClueId {
    /// Create a new clue ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClueId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ClueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clue category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Suspects.
    Who,
    /// Weapons.
    What,
    /// Rooms.
    Where,
}

impl Category {
    /// All categories in table order.
    pub const ALL: [Category; 3] = [Category::Who, Category::What, Category::Where];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Who => "who",
            Category::What => "what",
            Category::Where => "where",
        };
        f.write_str(name)
    }
}

/// Static description of one clue card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueDefinition {
    /// Full name, used as the identifier.
    pub id: ClueId,

    pub category: Category,

    /// Short label for narrow table columns.
    pub short: String,

    pub icon: String,
}

impl ClueDefinition {
    /// Create a clue definition. The short label defaults to the full name.
    pub fn new(id: impl Into<String>, category: Category) -> Self {
        let id = id.into();
        Self {
            short: id.clone(),
            id: ClueId::new(id),
            category,
            icon: String::new(),
        }
    }

    /// Set the short label.
    #[must_use]
    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short = short.into();
        self
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// Why a set of clues is not one-per-category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueSetError {
    #[error("unknown clue {0}")]
    UnknownClue(ClueId),

    #[error("category {0} is named more than once")]
    DuplicateCategory(Category),

    #[error("category {0} is missing")]
    MissingCategory(Category),
}

/// Closed universe of clues, in table order.
///
/// ## Example
///
/// ```
/// use cluedo_notes::core::{Category, ClueCatalog, ClueId};
///
/// let catalog = ClueCatalog::classic();
/// assert_eq!(catalog.len(), 21);
/// assert_eq!(catalog.category_of(&ClueId::new("Rope")), Some(Category::What));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ClueDefinition>", into = "Vec<ClueDefinition>")]
pub struct ClueCatalog {
    clues: Vec<ClueDefinition>,
    index: FxHashMap<ClueId, usize>,
}

impl ClueCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard board game deck: 6 suspects, 6 weapons, 9 rooms.
    #[must_use]
    pub fn classic() -> Self {
        let who = [
            ("Miss Scarlett", "Scarlett", "🔴"),
            ("Colonel Mustard", "Mustard", "🟡"),
            ("Dr. Orchid", "Orchid", "⚪️"),
            ("Mr. Green", "Green", "🟢"),
            ("Mrs. Peacock", "Peacock", "🔵"),
            ("Professor Plum", "Plum", "🟣"),
        ];
        let what = [
            ("Candlestick", "Candlestick", "🕯️"),
            ("Dagger", "Dagger", "🗡️"),
            ("Lead Pipe", "Pipe", "🚰"),
            ("Revolver", "Revolver", "🔫"),
            ("Rope", "Rope", "📿"),
            ("Wrench", "Wrench", "🔧"),
        ];
        let r#where = [
            ("Ballroom", "Ballroom", "🏀"),
            ("Billiard Room", "Billiard", "🎱"),
            ("Conservatory", "Conservatory", "🪴"),
            ("Dining Room", "Dining", "🍽️"),
            ("Hall", "Hall", "🏛️"),
            ("Kitchen", "Kitchen", "🍳"),
            ("Library", "Library", "🏫"),
            ("Lounge", "Lounge", "🛋️"),
            ("Study", "Study", "📖"),
        ];

        let mut catalog = Self::new();
        for (category, entries) in [
            (Category::Who, &who[..]),
            (Category::What, &what[..]),
            (Category::Where, &r#where[..]),
        ] {
            for &(full, short, icon) in entries {
                catalog.register(
                    ClueDefinition::new(full, category)
                        .with_short(short)
                        .with_icon(icon),
                );
            }
        }
        catalog
    }

    /// Register a clue.
    ///
    /// Panics if a clue with the same ID already exists.
    pub fn register(&mut self, clue: ClueDefinition) {
        if self.index.contains_key(&clue.id) {
            panic!("Clue {} already registered", clue.id);
        }
        self.index.insert(clue.id.clone(), self.clues.len());
        self.clues.push(clue);
    }

    /// Look up a clue definition.
    #[must_use]
    pub fn get(&self, id: &ClueId) -> Option<&ClueDefinition> {
        self.index.get(id).map(|&i| &self.clues[i])
    }

    /// Check if a clue is part of this catalog.
    #[must_use]
    pub fn contains(&self, id: &ClueId) -> bool {
        self.index.contains_key(id)
    }

    /// Category of a clue, if known.
    #[must_use]
    pub fn category_of(&self, id: &ClueId) -> Option<Category> {
        self.get(id).map(|c| c.category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    /// Iterate over definitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ClueDefinition> {
        self.clues.iter()
    }

    /// Clue IDs in table order.
    pub fn ids(&self) -> impl Iterator<Item = &ClueId> {
        self.clues.iter().map(|c| &c.id)
    }

    /// Clues of one category, in table order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &ClueDefinition> {
        self.clues.iter().filter(move |c| c.category == category)
    }

    /// Check that `clues` names every category exactly once.
    pub fn check_triple(&self, clues: &[ClueId]) -> Result<(), ClueSetError> {
        let mut seen = [false; 3];
        for clue in clues {
            let category = self
                .category_of(clue)
                .ok_or_else(|| ClueSetError::UnknownClue(clue.clone()))?;
            let slot = &mut seen[category as usize];
            if *slot {
                return Err(ClueSetError::DuplicateCategory(category));
            }
            *slot = true;
        }
        match Category::ALL.into_iter().find(|c| !seen[*c as usize]) {
            Some(missing) => Err(ClueSetError::MissingCategory(missing)),
            None => Ok(()),
        }
    }
}

impl From<Vec<ClueDefinition>> for ClueCatalog {
    fn from(clues: Vec<ClueDefinition>) -> Self {
        let mut catalog = Self::new();
        for clue in clues {
            // Later duplicates replace earlier entries.
            if let Some(&i) = catalog.index.get(&clue.id) {
                catalog.clues[i] = clue;
            } else {
                catalog.register(clue);
            }
        }
        catalog
    }
}

impl From<ClueCatalog> for Vec<ClueDefinition> {
    fn from(catalog: ClueCatalog) -> Self {
        catalog.clues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<ClueId> {
        names.iter().copied().map(ClueId::from).collect()
    }

    #[test]
    fn test_classic_catalog_counts() {
        let catalog = ClueCatalog::classic();
        assert_eq!(catalog.by_category(Category::Who).count(), 6);
        assert_eq!(catalog.by_category(Category::What).count(), 6);
        assert_eq!(catalog.by_category(Category::Where).count(), 9);
        assert_eq!(catalog.get(&"Lead Pipe".into()).unwrap().short, "Pipe");
    }

    #[test]
    fn test_table_order_is_registration_order() {
        let catalog = ClueCatalog::classic();
        let first: Vec<_> = catalog.ids().take(2).map(ClueId::as_str).collect();
        assert_eq!(first, vec!["Miss Scarlett", "Colonel Mustard"]);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration_panics() {
        let mut catalog = ClueCatalog::new();
        catalog.register(ClueDefinition::new("Rope", Category::What));
        catalog.register(ClueDefinition::new("Rope", Category::What));
    }

    #[test]
    fn test_check_triple() {
        let catalog = ClueCatalog::classic();

        assert!(catalog
            .check_triple(&ids(&["Mrs. Peacock", "Dagger", "Study"]))
            .is_ok());
        assert_eq!(
            catalog.check_triple(&ids(&["Rope", "Dagger", "Study"])),
            Err(ClueSetError::DuplicateCategory(Category::What))
        );
        assert_eq!(
            catalog.check_triple(&ids(&["Rope", "Study"])),
            Err(ClueSetError::MissingCategory(Category::Who))
        );
        assert_eq!(
            catalog.check_triple(&ids(&["Rope", "Study", "Butler"])),
            Err(ClueSetError::UnknownClue("Butler".into()))
        );
    }

    #[test]
    fn test_catalog_serialization_rebuilds_index() {
        let catalog = ClueCatalog::classic();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: ClueCatalog = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 21);
        assert_eq!(back.category_of(&"Study".into()), Some(Category::Where));
    }
}
