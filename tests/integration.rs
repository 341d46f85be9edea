// SPDX-License-Identifier: MPL-2.0
//! End-to-end gesture scenarios: the drag state machine driving the board
//! the way the app update loop wires them together.

use iced_board::board::{Board, ListId, MoveError};
use iced_board::ui::drag::{self, Effect};

/// Applies a drag effect to the board the way `App::update` does: a failed
/// move is swallowed.
fn apply(board: &mut Board, effect: Effect) {
    if let Effect::Move {
        from,
        from_index,
        to,
        to_index,
    } = effect
    {
        let _ = board.move_item(&from, from_index, &to, to_index);
    }
}

fn board_with(lists: &[(&str, &[&str])]) -> Board {
    let mut board = Board::new();
    for (expected_id, items) in lists {
        let id = board.create_list();
        assert_eq!(id.as_str(), *expected_id);
        for item in *items {
            board.push_item(&id, *item).expect("list was just created");
        }
    }
    board
}

#[test]
fn dragging_onto_an_empty_list_lands_at_the_top() {
    let mut board = board_with(&[("list1", &["x", "y"]), ("list2", &[])]);
    let mut drag = drag::State::default();

    drag.handle(drag::Message::Pick {
        list: ListId::from("list1"),
        index: 0,
    });
    drag.handle(drag::Message::HoverList {
        list: ListId::from("list2"),
        len: 0,
    });
    apply(&mut board, drag.handle(drag::Message::Drop));

    assert_eq!(board.get(&ListId::from("list1")).unwrap().items(), ["y"]);
    assert_eq!(board.get(&ListId::from("list2")).unwrap().items(), ["x"]);
}

#[test]
fn dragging_onto_anothers_empty_region_appends() {
    // {A:[x], B:[y]}: drop on B's empty region -> B:[y, x]
    let mut board = board_with(&[("list1", &["x"]), ("list2", &["y"])]);
    let mut drag = drag::State::default();

    drag.handle(drag::Message::Pick {
        list: ListId::from("list1"),
        index: 0,
    });
    drag.handle(drag::Message::HoverList {
        list: ListId::from("list2"),
        len: 1,
    });
    apply(&mut board, drag.handle(drag::Message::Drop));

    assert!(board.get(&ListId::from("list1")).unwrap().is_empty());
    assert_eq!(board.get(&ListId::from("list2")).unwrap().items(), ["y", "x"]);
}

#[test]
fn reordering_within_a_list_uses_the_post_removal_index() {
    let mut board = board_with(&[("list1", &["x", "y", "z"])]);
    let mut drag = drag::State::default();
    let list = ListId::from("list1");

    drag.handle(drag::Message::Pick {
        list: list.clone(),
        index: 0,
    });
    drag.handle(drag::Message::HoverItem {
        list: list.clone(),
        index: 2,
    });
    apply(&mut board, drag.handle(drag::Message::Drop));

    assert_eq!(board.get(&list).unwrap().items(), ["y", "z", "x"]);
}

#[test]
fn drop_without_ever_hovering_a_target_changes_nothing() {
    let mut board = Board::seed();
    let before = board.revision();
    let mut drag = drag::State::default();

    drag.handle(drag::Message::Pick {
        list: ListId::from("list1"),
        index: 1,
    });
    apply(&mut board, drag.handle(drag::Message::Drop));

    assert_eq!(board.revision(), before);
    assert_eq!(board.total_items(), 9);
}

#[test]
fn cancelling_mid_gesture_changes_nothing() {
    let mut board = Board::seed();
    let before = board.revision();
    let mut drag = drag::State::default();

    drag.handle(drag::Message::Pick {
        list: ListId::from("list1"),
        index: 0,
    });
    drag.handle(drag::Message::HoverItem {
        list: ListId::from("list3"),
        index: 2,
    });
    apply(&mut board, drag.handle(drag::Message::Cancel));

    assert_eq!(board.revision(), before);
    assert!(!drag.is_dragging());
}

#[test]
fn a_new_list_can_immediately_receive_a_drop() {
    let mut board = Board::seed();
    let mut drag = drag::State::default();

    let new_list = board.create_list();
    assert_eq!(board.len(), 4);
    assert!(board.get(&new_list).unwrap().is_empty());

    drag.handle(drag::Message::Pick {
        list: ListId::from("list2"),
        index: 2,
    });
    drag.handle(drag::Message::HoverList {
        list: new_list.clone(),
        len: 0,
    });
    apply(&mut board, drag.handle(drag::Message::Drop));

    assert_eq!(board.get(&new_list).unwrap().items(), ["Item 2c"]);
    assert_eq!(board.total_items(), 9);
}

#[test]
fn items_are_conserved_across_a_sequence_of_gestures() {
    let mut board = Board::seed();
    let mut drag = drag::State::default();

    let gestures: &[(&str, usize, drag::Message)] = &[
        (
            "list1",
            0,
            drag::Message::HoverItem {
                list: ListId::from("list2"),
                index: 0,
            },
        ),
        (
            "list2",
            3,
            drag::Message::HoverList {
                list: ListId::from("list3"),
                len: 3,
            },
        ),
        (
            "list3",
            1,
            drag::Message::HoverItem {
                list: ListId::from("list3"),
                index: 3,
            },
        ),
    ];

    for (source, index, hover) in gestures.iter().cloned() {
        drag.handle(drag::Message::Pick {
            list: ListId::from(source),
            index,
        });
        drag.handle(hover);
        apply(&mut board, drag.handle(drag::Message::Drop));
    }

    assert_eq!(board.total_items(), 9);

    // Every seeded item is still somewhere on the board, exactly once.
    let mut all: Vec<&str> = board
        .lists()
        .iter()
        .flat_map(|list| list.items().iter().map(String::as_str))
        .collect();
    all.sort_unstable();
    let expected = [
        "Item 1a", "Item 1b", "Item 1c", "Item 2a", "Item 2b", "Item 2c", "Item 3a", "Item 3b",
        "Item 3c",
    ];
    assert_eq!(all, expected);
}

#[test]
fn stale_drop_after_the_source_emptied_is_rejected() {
    let mut board = board_with(&[("list1", &["only"]), ("list2", &[])]);
    let mut drag = drag::State::default();

    // First gesture empties list1.
    drag.handle(drag::Message::Pick {
        list: ListId::from("list1"),
        index: 0,
    });
    drag.handle(drag::Message::HoverList {
        list: ListId::from("list2"),
        len: 0,
    });
    apply(&mut board, drag.handle(drag::Message::Drop));

    // A second gesture built from stale state now points at nothing.
    let effect = {
        drag.handle(drag::Message::Pick {
            list: ListId::from("list1"),
            index: 0,
        });
        drag.handle(drag::Message::HoverItem {
            list: ListId::from("list2"),
            index: 0,
        });
        drag.handle(drag::Message::Drop)
    };

    match effect {
        Effect::Move {
            from, from_index, ..
        } => {
            let err = board.move_item(&from, from_index, &ListId::from("list2"), 0);
            assert_eq!(
                err,
                Err(MoveError::IndexOutOfBounds {
                    list: ListId::from("list1"),
                    index: 0,
                    len: 0,
                })
            );
        }
        Effect::None => panic!("drop with a target should emit a move"),
    }

    assert_eq!(board.total_items(), 1);
}
