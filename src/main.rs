use iced_board::app::{self, Flags};
use iced_board::ui::theming::ThemeMode;
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let theme_arg: Option<String> = args.opt_value_from_str("--theme").ok().flatten();
    let theme = theme_arg.and_then(|value| match value.as_str() {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        "system" => Some(ThemeMode::System),
        other => {
            eprintln!("Unknown theme '{other}', using the configured one");
            None
        }
    });

    app::run(Flags { theme })
}
