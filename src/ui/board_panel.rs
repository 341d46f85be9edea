// SPDX-License-Identifier: MPL-2.0
//! Board view: list panels side by side, each a column of draggable item
//! cards with an empty-region drop strip underneath.
//!
//! The view resolves pointer events to board slots and emits
//! [`drag::Message`]s; it never touches drag or board state itself. Hover
//! wiring is unconditional: the drag state machine ignores hover and drop
//! messages while no gesture is active.

use crate::board::{Board, BoardList, ListId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::drag;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, mouse_area, text, Column, Container, Row, Space};
use iced::{mouse, Element, Length};

/// Messages emitted by the board panel.
#[derive(Debug, Clone)]
pub enum Message {
    Drag(drag::Message),
    CreateList,
}

/// Builds the whole board: one panel per list plus the add-list button.
///
/// The caller wraps this in a backdrop `mouse_area` so a release outside
/// every drop zone cancels the gesture.
pub fn view<'a>(
    board: &'a Board,
    drag_state: &'a drag::State,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let mut lanes = Row::new().spacing(spacing::MD).align_y(Vertical::Top);
    for list in board.lists() {
        lanes = lanes.push(list_panel(list, drag_state, scheme));
    }

    let add_button = button(text("Add New List").size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::add_list_button(scheme))
        .on_press(Message::CreateList);
    lanes = lanes.push(add_button);

    Container::new(lanes)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}

/// One list: its cards in order, then the strip that represents the list's
/// empty region (a cross-list drop there appends).
fn list_panel<'a>(
    list: &'a BoardList,
    drag_state: &'a drag::State,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let mut cards = Column::new().spacing(spacing::XS).height(Length::Fill);
    for (index, item) in list.items().iter().enumerate() {
        cards = cards.push(item_card(list.id(), index, item, drag_state, scheme));
    }

    let is_append_target = drag_state
        .target()
        .is_some_and(|t| t.list == *list.id() && t.index == list.len());
    let strip_style = styles::drop_strip(scheme, is_append_target);
    let strip = Container::new(
        Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::DROP_STRIP_MIN_HEIGHT)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_theme| strip_style);
    let strip = mouse_area(strip)
        .on_enter(Message::Drag(drag::Message::HoverList {
            list: list.id().clone(),
            len: list.len(),
        }))
        .on_release(Message::Drag(drag::Message::Drop));
    cards = cards.push(strip);

    let panel_style = styles::list_panel(scheme);
    let panel = Container::new(cards)
        .width(Length::Fixed(sizing::LIST_WIDTH))
        .height(Length::Fill)
        .padding(spacing::SM)
        .style(move |_theme| panel_style);

    // Catches releases over panel padding and gaps between cards.
    mouse_area(panel)
        .on_release(Message::Drag(drag::Message::Drop))
        .into()
}

fn item_card<'a>(
    list_id: &'a ListId,
    index: usize,
    label: &'a str,
    drag_state: &'a drag::State,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let is_source = drag_state.is_dragging_item(list_id, index);
    let is_target = drag_state
        .target()
        .is_some_and(|t| t.list == *list_id && t.index == index);

    let style = if is_source {
        styles::item_card_ghost(scheme)
    } else if is_target {
        styles::drop_target(scheme)
    } else {
        styles::item_card(scheme)
    };

    let card = Container::new(text(label).size(typography::BODY))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(move |_theme| style);

    let interaction = if drag_state.is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(card)
        .interaction(interaction)
        .on_press(Message::Drag(drag::Message::Pick {
            list: list_id.clone(),
            index,
        }))
        .on_enter(Message::Drag(drag::Message::HoverItem {
            list: list_id.clone(),
            index,
        }))
        .on_release(Message::Drag(drag::Message::Drop))
        .into()
}
