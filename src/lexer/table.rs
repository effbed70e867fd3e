//! The bidirectional kind <-> spelling table.
//!
//! The table is built once from a fixed entry list by sorting two index
//! arrays, one ordered by spelling and one ordered by kind. Each lookup
//! direction then binary-searches its own index, so both are O(log N).
//! Nothing is added, removed or changed after construction, which is what
//! makes the process-wide `TOKEN_TABLE` safe to read from any thread.

use lazy_static::lazy_static;
use thiserror::Error;

use super::tokens::{TokenKind, TOKEN_ENTRIES};

lazy_static! {
    /// The process-wide table built from every generated token kind.
    pub static ref TOKEN_TABLE: TokenTable =
        TokenTable::new(TOKEN_ENTRIES).expect("built-in token spellings are unique");
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("spelling {spelling:?} is used by both {first} and {second}")]
    DuplicateSpelling {
        spelling: &'static str,
        first: TokenKind,
        second: TokenKind,
    },
    #[error("kind {kind} appears more than once")]
    DuplicateKind { kind: TokenKind },
}

#[derive(Debug, Clone)]
pub struct TokenTable {
    entries: Vec<(TokenKind, &'static str)>,
    /// Indices into `entries`, sorted by spelling.
    by_spelling: Vec<usize>,
    /// Indices into `entries`, sorted by kind.
    by_kind: Vec<usize>,
}

impl TokenTable {
    /// Builds the table, rejecting duplicate spellings and duplicate kinds.
    pub fn new(entries: &[(TokenKind, &'static str)]) -> Result<Self, TableError> {
        let entries = entries.to_vec();

        let mut by_spelling: Vec<usize> = (0..entries.len()).collect();
        by_spelling.sort_by(|a, b| entries[*a].1.cmp(entries[*b].1));

        for pair in by_spelling.windows(2) {
            let (first, second) = (entries[pair[0]], entries[pair[1]]);
            if first.1 == second.1 {
                return Err(TableError::DuplicateSpelling {
                    spelling: first.1,
                    first: first.0,
                    second: second.0,
                });
            }
        }

        let mut by_kind: Vec<usize> = (0..entries.len()).collect();
        by_kind.sort_by(|a, b| entries[*a].0.cmp(&entries[*b].0));

        for pair in by_kind.windows(2) {
            if entries[pair[0]].0 == entries[pair[1]].0 {
                return Err(TableError::DuplicateKind {
                    kind: entries[pair[0]].0,
                });
            }
        }

        tracing::debug!(entries = entries.len(), "built token table");

        Ok(TokenTable {
            entries,
            by_spelling,
            by_kind,
        })
    }

    /// Kind whose canonical spelling is exactly `spelling`.
    pub fn kind_of(&self, spelling: &str) -> Option<TokenKind> {
        self.by_spelling
            .binary_search_by(|index| self.entries[*index].1.cmp(spelling))
            .ok()
            .map(|found| self.entries[self.by_spelling[found]].0)
    }

    /// Canonical spelling of `kind`.
    pub fn spelling_of(&self, kind: TokenKind) -> Option<&'static str> {
        self.by_kind
            .binary_search_by(|index| self.entries[*index].0.cmp(&kind))
            .ok()
            .map(|found| self.entries[self.by_kind[found]].1)
    }

    /// Looks up either direction: a spelling yields a kind, a kind yields a spelling.
    pub fn lookup<K: TableKey>(&self, key: K) -> Option<K::Output> {
        key.find_in(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(TokenKind, &'static str)> {
        self.entries.iter()
    }
}

/// A key usable with [`TokenTable::lookup`].
pub trait TableKey {
    type Output;

    fn find_in(self, table: &TokenTable) -> Option<Self::Output>;
}

impl TableKey for &str {
    type Output = TokenKind;

    fn find_in(self, table: &TokenTable) -> Option<TokenKind> {
        table.kind_of(self)
    }
}

impl TableKey for TokenKind {
    type Output = &'static str;

    fn find_in(self, table: &TokenTable) -> Option<&'static str> {
        table.spelling_of(self)
    }
}
