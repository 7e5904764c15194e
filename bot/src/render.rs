//! Plain-text rendering of replies, using the same markers as the chat keyboard.
use std::fmt::Write;

use sweeper_core::{BoardView, CellView};
use sweeper_protocol::{Menu, Reply};

pub const HIDDEN: &str = "❓";
pub const BLANK: &str = "▫️";
pub const MINE: &str = "💣";

pub fn marker(cell: CellView) -> String {
    match cell {
        CellView::Hidden => HIDDEN.to_owned(),
        CellView::Blank => BLANK.to_owned(),
        CellView::Digit(count) => count.to_string(),
        CellView::Mine => MINE.to_owned(),
    }
}

pub fn board(view: &BoardView) -> String {
    view.rows()
        .map(|row| {
            row.iter()
                .map(|&cell| marker(cell))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn menu(menu: Menu) -> String {
    menu.buttons()
        .into_iter()
        .map(|(label, action)| {
            let data = action.to_callback_data().unwrap_or_default();
            format!("[{label}] {data}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full text for a reply; empty for [`Reply::Ignored`].
pub fn reply(reply: &Reply) -> String {
    let mut out = String::new();
    match reply {
        Reply::Board {
            view,
            status: _,
            notice,
        } => {
            out.push_str(&board(view));
            if let Some(notice) = notice {
                let _ = write!(out, "\n{notice}");
            }
        }
        Reply::Menu { menu: kind, notice } => {
            let _ = write!(out, "{notice}\n{}", menu(*kind));
        }
        Reply::Notice { notice } => {
            let _ = write!(out, "{notice}");
        }
        Reply::Ignored => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{Board, Game};
    use sweeper_protocol::Notice;

    #[test]
    fn renders_in_progress_and_final_boards() {
        let mut game = Game::new(Board::from_mine_coords((2, 3), &[(0, 2)]).unwrap());
        game.select((0, 1)).unwrap();
        assert_eq!(board(&game.view()), "❓ 1 ❓\n❓ ❓ ❓");

        game.select((0, 2)).unwrap();
        assert_eq!(board(&game.view()), "▫️ 1 💣\n▫️ 1 1");
    }

    #[test]
    fn renders_menu_with_callback_data() {
        let text = reply(&Reply::Menu {
            menu: Menu::Main,
            notice: Notice::MainMenu,
        });

        assert_eq!(
            text,
            "Menu:\n[New game] menu_new_game\n[Settings] menu_settings\n[Rules] menu_help"
        );
    }

    #[test]
    fn ignored_reply_is_silent() {
        assert_eq!(reply(&Reply::Ignored), "");
    }
}
