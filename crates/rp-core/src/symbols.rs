//! Symbol definitions and the game's fixed catalog

use serde::{Deserialize, Serialize};

/// A symbol definition
///
/// Created once at game setup from the catalog and never mutated. Win
/// matching compares symbols by `name`; `id` is the stable catalog key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Unique symbol ID
    pub id: u32,
    /// Symbol name (e.g., "h2", "ace", "nine"), used for win equality
    pub name: String,
    /// Credit value contributed to a winning row
    pub value: u32,
}

impl Symbol {
    /// Create a symbol
    pub fn new(id: u32, name: impl Into<String>, value: u32) -> Self {
        Self {
            id,
            name: name.into(),
            value,
        }
    }

    /// Check whether two symbols count as the same for win purposes
    pub fn matches(&self, other: &Symbol) -> bool {
        self.name == other.name
    }
}

/// The fixed symbol catalog for a game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolCatalog {
    pub symbols: Vec<Symbol>,
}

impl SymbolCatalog {
    /// Build a catalog from a symbol list
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Get symbol by ID
    pub fn get(&self, id: u32) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id == id)
    }

    /// Get symbol by name
    pub fn by_name(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// Number of symbol kinds
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// The classic nine-symbol card set: high symbols h2–h4, then ace down to
/// nine, with values descending from 9 to 1.
pub fn classic_card_set() -> SymbolCatalog {
    SymbolCatalog::new(vec![
        Symbol::new(0, "h2", 9),
        Symbol::new(1, "h3", 8),
        Symbol::new(2, "h4", 7),
        Symbol::new(3, "ace", 6),
        Symbol::new(4, "king", 5),
        Symbol::new(5, "queen", 4),
        Symbol::new(6, "jack", 3),
        Symbol::new(7, "ten", 2),
        Symbol::new(8, "nine", 1),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_catalog() {
        let catalog = classic_card_set();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.by_name("h2").map(|s| s.value), Some(9));
        assert_eq!(catalog.by_name("nine").map(|s| s.value), Some(1));
        assert_eq!(catalog.get(4).map(|s| s.name.as_str()), Some("king"));
    }

    #[test]
    fn test_symbol_matches_by_name() {
        let a = Symbol::new(0, "h2", 9);
        let b = Symbol::new(42, "h2", 9);
        let c = Symbol::new(0, "ace", 6);
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }
}
