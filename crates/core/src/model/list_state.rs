use rand::Rng;

use crate::error::ListStateError;
use crate::shuffle::{shuffled, shuffled_with};

/// Where a list stands relative to its cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    /// Nothing loaded yet.
    Empty,
    Ready,
    /// Every item has been spoken.
    Exhausted,
}

/// Loaded items of one practice list plus the order they are practiced in.
///
/// `index` always satisfies `0 <= index <= shuffled.len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListState {
    items: Vec<String>,
    shuffled: Vec<String>,
    index: usize,
}

impl ListState {
    /// Fresh state with a new random order and the cursor at the start.
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        let shuffled = shuffled(&items);
        Self {
            items,
            shuffled,
            index: 0,
        }
    }

    /// Like [`ListState::new`], drawing the order from `rng`.
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(items: Vec<String>, rng: &mut R) -> Self {
        let shuffled = shuffled_with(&items, rng);
        Self {
            items,
            shuffled,
            index: 0,
        }
    }

    /// Rebuild a state from explicit parts.
    ///
    /// # Errors
    ///
    /// Returns `ListStateError::LengthMismatch` if `shuffled` is not the same length as `items`.
    /// Returns `ListStateError::CursorOutOfRange` if `index` is past the end.
    pub fn from_parts(
        items: Vec<String>,
        shuffled: Vec<String>,
        index: usize,
    ) -> Result<Self, ListStateError> {
        if items.len() != shuffled.len() {
            return Err(ListStateError::LengthMismatch {
                items: items.len(),
                shuffled: shuffled.len(),
            });
        }
        if index > shuffled.len() {
            return Err(ListStateError::CursorOutOfRange {
                index,
                len: shuffled.len(),
            });
        }
        Ok(Self {
            items,
            shuffled,
            index,
        })
    }

    #[must_use]
    pub fn phase(&self) -> ListPhase {
        if self.items.is_empty() {
            ListPhase::Empty
        } else if self.index >= self.shuffled.len() {
            ListPhase::Exhausted
        } else {
            ListPhase::Ready
        }
    }

    /// Items in the order the source returned them.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn shuffled(&self) -> &[String] {
        &self.shuffled
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shuffled.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shuffled.is_empty()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.shuffled.len().saturating_sub(self.index)
    }

    /// The item the cursor points at, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.shuffled.get(self.index).map(String::as_str)
    }

    /// Take the item under the cursor and move past it.
    ///
    /// Returns `None` without moving when the list is empty or exhausted.
    pub fn advance(&mut self) -> Option<String> {
        let item = self.shuffled.get(self.index)?.clone();
        self.index += 1;
        Some(item)
    }
}
