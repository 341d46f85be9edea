// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the board and the drag
//! tracker.
//!
//! The `App` struct owns the [`Board`] and the drag-session [`drag::State`]
//! and translates panel messages into mutations: a drag [`drag::Effect`] is
//! applied through [`Board::move_item`], the add-list button goes through
//! [`Board::create_list`]. All mutations happen synchronously in `update`;
//! there is no background work and exactly one gesture at a time.

use crate::board::Board;
use crate::config;
use crate::ui::board_panel;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::drag;
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, mouse_area, text, Column, Container, Row, Space};
use iced::{event, keyboard, window, Element, Length, Subscription, Task, Theme};

/// Values parsed from the command line before the app boots.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flags {
    /// Session-only theme override (`--theme light|dark|system`).
    pub theme: Option<ThemeMode>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 620;
pub const MIN_WINDOW_WIDTH: u32 = 520;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // Flags is Copy, so the boot closure satisfies the Fn bound directly.
    let boot = move || App::new(flags);

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Root Iced application state bridging the board, the drag tracker and
/// persisted preferences.
pub struct App {
    board: Board,
    drag: drag::State,
    theme_mode: ThemeMode,
    scheme: ColorScheme,
}

#[derive(Debug, Clone)]
pub enum Message {
    Panel(board_panel::Message),
    ThemeModeToggled,
}

impl Default for App {
    fn default() -> Self {
        Self {
            board: Board::seed(),
            drag: drag::State::default(),
            theme_mode: ThemeMode::System,
            scheme: ColorScheme::from_system(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and any
    /// command-line overrides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let theme_mode = flags.theme.unwrap_or(config.theme_mode);

        let app = App {
            theme_mode,
            scheme: ColorScheme::for_mode(theme_mode),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Board")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// While a gesture is active, Escape aborts it even if the pointer never
    /// reached a drop zone.
    fn subscription(&self) -> Subscription<Message> {
        if !self.drag.is_dragging() {
            return Subscription::none();
        }

        event::listen_with(|event, _status, _window| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::Panel(board_panel::Message::Drag(
                drag::Message::Cancel,
            ))),
            _ => None,
        })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Panel(board_panel::Message::Drag(msg)) => {
                match self.drag.handle(msg) {
                    drag::Effect::Move {
                        from,
                        from_index,
                        to,
                        to_index,
                    } => {
                        // A target that went stale mid-gesture is not worth
                        // surfacing; the drop just does nothing.
                        if let Err(err) = self.board.move_item(&from, from_index, &to, to_index) {
                            eprintln!("Ignoring drop: {err}");
                        }
                    }
                    drag::Effect::None => {}
                }
            }
            Message::Panel(board_panel::Message::CreateList) => {
                self.board.create_list();
            }
            Message::ThemeModeToggled => {
                self.theme_mode = self.theme_mode.toggled();
                self.scheme = ColorScheme::for_mode(self.theme_mode);

                let config = config::Config {
                    theme_mode: self.theme_mode,
                };
                if let Err(err) = config::save(&config) {
                    eprintln!("Failed to save config: {err}");
                }
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let toggle_label = if self.theme_mode.is_dark() {
            "Light mode"
        } else {
            "Dark mode"
        };
        let top_bar = Row::new()
            .padding([spacing::XS, spacing::LG])
            .push(Space::new().width(Length::Fill).height(Length::Shrink))
            .push(
                button(text(toggle_label).size(typography::CAPTION))
                    .padding([spacing::XS / 2.0, spacing::SM])
                    .on_press(Message::ThemeModeToggled),
            );

        let board = board_panel::view(&self.board, &self.drag, &self.scheme).map(Message::Panel);

        let surface_style = styles::board_surface(&self.scheme);
        let content = Container::new(Column::new().push(top_bar).push(board))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| surface_style);

        // A release that reaches the backdrop happened outside every drop
        // zone: the gesture is abandoned without touching the board.
        mouse_area(content)
            .on_release(Message::Panel(board_panel::Message::Drag(
                drag::Message::Cancel,
            )))
            .into()
    }
}
