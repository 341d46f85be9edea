// SPDX-License-Identifier: MPL-2.0
//! `iced_board` is a drag-and-drop list board built with the Iced GUI
//! framework.
//!
//! Items can be dragged within and across lists, and new empty lists can be
//! appended. The board state and the drag-session state machine are headless
//! ([`board`] and [`ui::drag`]); the Iced layer only resolves pointer events
//! to board slots and renders the result.

pub mod app;
pub mod board;
pub mod config;
pub mod error;
pub mod ui;
