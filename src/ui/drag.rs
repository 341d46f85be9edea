// SPDX-License-Identifier: MPL-2.0
//! Drag-session sub-component: tracks one pointer gesture from pick-up to
//! drop.
//!
//! The view layer resolves raw pointer events to `(list, index)` slots before
//! they reach this module, so the whole gesture state machine is testable
//! without any pointer simulation. Exactly one session exists at a time; the
//! app update loop owns the [`State`] and applies the [`Effect`]s it emits.

use crate::board::ListId;

/// Where a drop would land right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub list: ListId,
    pub index: usize,
}

/// An in-progress gesture. The source slot is fixed when the item is picked
/// up; the target follows the pointer and may stay unset for the whole
/// gesture.
#[derive(Debug, Clone)]
struct Session {
    source_list: ListId,
    source_index: usize,
    target: Option<Target>,
}

/// Drag sub-component state. No session means no gesture is active.
#[derive(Debug, Clone, Default)]
pub struct State {
    session: Option<Session>,
}

/// Messages for the drag sub-component, already resolved to board slots.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer pressed on an item: the gesture starts here.
    Pick { list: ListId, index: usize },
    /// Pointer entered an item slot.
    HoverItem { list: ListId, index: usize },
    /// Pointer entered a list's empty region (not over any specific item);
    /// `len` is that list's current length, so cross-list drops append.
    HoverList { list: ListId, len: usize },
    /// Pointer released over a drop zone.
    Drop,
    /// Gesture aborted (released outside every drop zone, or Escape).
    Cancel,
}

/// Effects produced by drag messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// A drop landed on a valid target: move the item.
    Move {
        from: ListId,
        from_index: usize,
        to: ListId,
        to_index: usize,
    },
}

impl State {
    /// Handle a drag message.
    ///
    /// Takes `Message` by value following Iced's `update(message: Message)`
    /// pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Pick { list, index } => {
                self.session = Some(Session {
                    source_list: list,
                    source_index: index,
                    target: None,
                });
                Effect::None
            }
            Message::HoverItem { list, index } => {
                if let Some(session) = &mut self.session {
                    // Hovering the slot being dragged is not a target.
                    if list != session.source_list || index != session.source_index {
                        session.target = Some(Target { list, index });
                    }
                }
                Effect::None
            }
            Message::HoverList { list, len } => {
                if let Some(session) = &mut self.session {
                    if list != session.source_list {
                        session.target = Some(Target { list, index: len });
                    }
                }
                Effect::None
            }
            Message::Drop => match self.session.take() {
                Some(Session {
                    source_list,
                    source_index,
                    target: Some(target),
                }) => Effect::Move {
                    from: source_list,
                    from_index: source_index,
                    to: target.list,
                    to_index: target.index,
                },
                // Never hovered a valid target: the drop is a no-op.
                _ => Effect::None,
            },
            Message::Cancel => {
                self.session = None;
                Effect::None
            }
        }
    }

    /// Check if a gesture is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the given slot is the one being dragged. Drives the ghost
    /// styling of the picked-up card.
    #[must_use]
    pub fn is_dragging_item(&self, list: &ListId, index: usize) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.source_list == *list && s.source_index == index)
    }

    /// The current hover target, if the pointer has entered one.
    #[must_use]
    pub fn target(&self) -> Option<&Target> {
        self.session.as_ref().and_then(|s| s.target.as_ref())
    }
}
