/// Label classes the server trains on, in the order of their label index.
pub const SYMBOLS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// The currently selected symbol. Movement stops at both ends of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct SymbolCursor {
    index: usize,
}

impl SymbolCursor {
    /// Cursor at `index`, clamped into the catalog
    pub fn new(index: usize) -> Self {
        Self {
            index: index.min(SYMBOLS.len() - 1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn symbol(&self) -> &'static str {
        SYMBOLS[self.index]
    }

    pub fn select(&mut self, index: usize) {
        *self = Self::new(index);
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < SYMBOLS.len()
    }

    /// Step back one symbol. Returns false at the first symbol.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one symbol. Returns false at the last symbol.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(SYMBOLS.len(), 26);
        assert_eq!(SymbolCursor::default().symbol(), "A");
        assert_eq!(SymbolCursor::new(25).symbol(), "Z");
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let mut cursor = SymbolCursor::new(0);
        assert!(!cursor.previous());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_next_at_end_is_noop() {
        let mut cursor = SymbolCursor::new(25);
        assert!(!cursor.next());
        assert_eq!(cursor.index(), 25);
        assert_eq!(cursor.symbol(), "Z");
    }

    #[test]
    fn test_walk_through_catalog() {
        let mut cursor = SymbolCursor::default();
        let mut steps = 0;
        while cursor.next() {
            steps += 1;
        }
        assert_eq!(steps, SYMBOLS.len() - 1);
        assert!(cursor.previous());
        assert_eq!(cursor.symbol(), "Y");
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(SymbolCursor::new(99).index(), 25);
    }
}
