use std::sync::Arc;
use std::thread;

use sweeper_bot::{Controller, SessionPhase, SessionStore};
use sweeper_core::{Board, CellView, GameConfig, GameStatus, Preset};
use sweeper_protocol::{Action, Notice, Reply, SessionId};

fn controller() -> Controller {
    Controller::new(Arc::new(SessionStore::new()), 2024)
}

fn press(controller: &Controller, id: SessionId, data: &str) -> Reply {
    controller.handle(id, Action::from_callback_data(data).unwrap())
}

fn say(controller: &Controller, id: SessionId, text: &str) -> Reply {
    controller.handle(id, Action::from_message(text))
}

#[test]
fn custom_game_from_menu_to_loss() {
    let controller = controller();
    let id = SessionId(42);

    say(&controller, id, "/start");
    press(&controller, id, "menu_settings");
    press(&controller, id, "set_custom");
    assert_eq!(
        say(&controller, id, "4,4"),
        Reply::from(Notice::InvalidSettingsFormat)
    );
    assert_eq!(
        say(&controller, id, "4,4,3"),
        Reply::from(Notice::CustomSettingsSaved {
            config: GameConfig::new_unchecked((4, 4), 3)
        })
    );

    let Reply::Board { view, .. } = say(&controller, id, "/new") else {
        panic!("expected a board");
    };
    assert_eq!(view.size(), (4, 4));

    // find a mine from the stored game and step on it
    let game = controller.store().get_game(id).unwrap();
    let (mine, _) = game
        .board()
        .cells()
        .indexed_iter()
        .find(|(_, cell)| cell.has_mine)
        .unwrap();
    let reply = press(&controller, id, &format!("cell_{}_{}", mine.0, mine.1));

    assert_eq!(reply.status(), Some(GameStatus::Lost));
    let Reply::Board { view, .. } = reply else {
        panic!("expected a board");
    };
    let mines = view
        .rows()
        .flat_map(|row| row.to_vec())
        .filter(|&cell| cell == CellView::Mine)
        .count();
    assert_eq!(mines, 3);
    assert_eq!(view.hidden_count(), 0);

    assert_eq!(
        press(&controller, id, "cell_0_0"),
        Reply::from(Notice::GameNotActive)
    );
}

#[test]
fn playing_every_safe_cell_wins() {
    let controller = controller();
    let id = SessionId(7);
    press(&controller, id, "set_easy");
    press(&controller, id, "menu_new_game");

    let board = controller.store().get_game(id).unwrap().board().clone();
    let mut last = Reply::Ignored;
    for ((row, col), cell) in board.cells().indexed_iter() {
        if cell.has_mine {
            continue;
        }
        let reply = press(&controller, id, &format!("cell_{row}_{col}"));
        // notices cover already-open cells and selections after the win
        if reply.status().is_some() {
            last = reply;
        }
    }

    assert_eq!(last.status(), Some(GameStatus::Won));
    assert_eq!(last.notice(), Some(&Notice::Won));
    assert_eq!(
        controller.store().get_or_create(id).phase(),
        SessionPhase::Ended(GameStatus::Won)
    );
}

#[test]
fn new_game_replaces_finished_game() {
    let controller = controller();
    let id = SessionId(3);
    controller.start_game_with_board(id, Board::from_mine_coords((1, 2), &[(0, 1)]).unwrap());
    press(&controller, id, "cell_0_1");
    assert_eq!(
        controller.store().get_or_create(id).phase(),
        SessionPhase::Ended(GameStatus::Lost)
    );

    let reply = press(&controller, id, "menu_new_game");

    assert_eq!(reply.status(), Some(GameStatus::InProgress));
    assert_eq!(
        controller.store().get_or_create(id).phase(),
        SessionPhase::InProgress
    );
}

#[test]
fn sessions_are_independent() {
    let controller = controller();
    let (a, b) = (SessionId(1), SessionId(2));

    press(&controller, a, "set_hard");
    press(&controller, b, "set_custom");

    assert_eq!(controller.store().get_settings(a), Preset::Hard.config());
    assert_eq!(controller.store().get_settings(b), GameConfig::default());
    assert!(!controller.store().is_awaiting_custom_input(a));
    assert!(controller.store().is_awaiting_custom_input(b));
    assert_eq!(say(&controller, a, "6,6,6"), Reply::Ignored);
}

#[test]
fn concurrent_sessions_stay_consistent() {
    let controller = controller();

    thread::scope(|scope| {
        for worker in 0..8_i64 {
            let controller = &controller;
            scope.spawn(move || {
                for round in 0..20_i64 {
                    let id = SessionId((worker + round) % 4);
                    controller.handle(id, Action::StartNewGame);
                    for row in 0..5 {
                        let reply = controller.handle(id, Action::SelectCell { row, col: row });
                        if let Reply::Board { view, status, .. } = reply {
                            // mines are exposed exactly when the game has ended
                            let has_mine = view
                                .rows()
                                .flat_map(|line| line.to_vec())
                                .any(|cell| cell == CellView::Mine);
                            assert_eq!(has_mine, status.is_final());
                        }
                    }
                }
            });
        }
    });

    assert_eq!(controller.store().len(), 4);
}
