// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows a component-based architecture with the Elm-style
//! "state down, messages up" pattern.
//!
//! - [`board_panel`] - Board view: list panels, item cards, drop zones
//! - [`drag`] - Drag-session sub-component (per-gesture state machine)
//! - [`styles`] - Centralized styling (panels, cards, buttons)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod board_panel;
pub mod design_tokens;
pub mod drag;
pub mod styles;
pub mod theming;
