// SPDX-License-Identifier: MPL-2.0
//! Headless board state: named, ordered lists of text items and the
//! operations that rearrange them.
//!
//! Nothing here knows about Iced. The application update loop owns a
//! [`Board`] and mutates it through [`Board::move_item`],
//! [`Board::create_list`] and [`Board::push_item`]; the view layer re-reads
//! the board after every mutation. [`Board::revision`] increments on each
//! successful mutation so a presentation layer can cheaply detect that the
//! board changed since it last looked.

use std::fmt;

/// Identifier of a list within a [`Board`]. Unique per board; callers must
/// not rely on the naming scheme beyond uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(String);

impl ListId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single named list. Item order is the displayed and logical order.
#[derive(Debug, Clone)]
pub struct BoardList {
    id: ListId,
    items: Vec<String>,
}

impl BoardList {
    #[must_use]
    pub fn id(&self) -> &ListId {
        &self.id
    }

    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Errors produced by board mutations.
///
/// A failed mutation leaves the board untouched; the UI treats these as
/// silent no-ops (a stale drag target is not worth reporting to the user).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    UnknownList(ListId),
    IndexOutOfBounds {
        list: ListId,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::UnknownList(id) => write!(f, "unknown list: {}", id),
            MoveError::IndexOutOfBounds { list, index, len } => {
                write!(f, "index {} out of bounds for list {} (len {})", index, list, len)
            }
        }
    }
}

/// The full collection of lists, in creation order.
#[derive(Debug, Clone, Default)]
pub struct Board {
    lists: Vec<BoardList>,
    revision: u64,
}

impl Board {
    /// An empty board with no lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed starting board: three lists of three items each.
    #[must_use]
    pub fn seed() -> Self {
        let lists = (1u32..=3)
            .map(|n| BoardList {
                id: ListId(format!("list{n}")),
                items: ['a', 'b', 'c'].iter().map(|s| format!("Item {n}{s}")).collect(),
            })
            .collect();

        Self { lists, revision: 0 }
    }

    /// Appends a new empty list and returns its id.
    ///
    /// Naming is count-based (`list<N+1>`); lists are never removed, so the
    /// generated id cannot collide with an existing one.
    pub fn create_list(&mut self) -> ListId {
        let id = ListId(format!("list{}", self.lists.len() + 1));
        self.lists.push(BoardList {
            id: id.clone(),
            items: Vec::new(),
        });
        self.revision += 1;
        id
    }

    /// Appends `item` to the end of `list`.
    pub fn push_item(&mut self, list: &ListId, item: impl Into<String>) -> Result<(), MoveError> {
        let pos = self
            .position(list)
            .ok_or_else(|| MoveError::UnknownList(list.clone()))?;
        self.lists[pos].items.push(item.into());
        self.revision += 1;
        Ok(())
    }

    /// Removes the item at `from_index` in `from`, then inserts it at
    /// `to_index` in `to` (which may be the same list).
    ///
    /// Index semantics:
    /// - For same-list moves `to_index` is interpreted *after* removal, so
    ///   moving an item toward the end lands one slot earlier than the
    ///   pre-removal position would suggest.
    /// - An empty destination always receives the item at index 0, whatever
    ///   `to_index` says (a hover target can go stale while the gesture is
    ///   still in flight).
    /// - On a non-empty destination, `to_index` past the end appends.
    ///
    /// `from_index` out of range and unknown list ids are hard errors, and
    /// the board is left unchanged.
    pub fn move_item(
        &mut self,
        from: &ListId,
        from_index: usize,
        to: &ListId,
        to_index: usize,
    ) -> Result<(), MoveError> {
        let from_pos = self
            .position(from)
            .ok_or_else(|| MoveError::UnknownList(from.clone()))?;
        let to_pos = self
            .position(to)
            .ok_or_else(|| MoveError::UnknownList(to.clone()))?;

        let source_len = self.lists[from_pos].items.len();
        if from_index >= source_len {
            return Err(MoveError::IndexOutOfBounds {
                list: from.clone(),
                index: from_index,
                len: source_len,
            });
        }

        let item = self.lists[from_pos].items.remove(from_index);
        let dest = &mut self.lists[to_pos].items;
        let at = if dest.is_empty() { 0 } else { to_index.min(dest.len()) };
        dest.insert(at, item);

        self.revision += 1;
        Ok(())
    }

    #[must_use]
    pub fn lists(&self) -> &[BoardList] {
        &self.lists
    }

    #[must_use]
    pub fn get(&self, id: &ListId) -> Option<&BoardList> {
        self.position(id).map(|pos| &self.lists[pos])
    }

    #[must_use]
    pub fn contains(&self, id: &ListId) -> bool {
        self.position(id).is_some()
    }

    /// Number of lists on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Total number of items across all lists. Invariant under
    /// [`Board::move_item`].
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.lists.iter().map(|list| list.items.len()).sum()
    }

    /// Monotonic counter bumped on every successful mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn position(&self, id: &ListId) -> Option<usize> {
        self.lists.iter().position(|list| list.id == *id)
    }
}
