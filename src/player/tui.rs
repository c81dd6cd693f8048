use crate::core::board::INNER;
use crate::core::{Board, Move, Player};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

/// カーソル操作で着手を選ぶ人間用コントローラ
pub struct TuiController {
    player: Player,
    name: String,
}

impl TuiController {
    pub fn new(player: Player, name: &str) -> Self {
        Self {
            player,
            name: name.to_string(),
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move> {
        let mut state = DisplayState::default();
        state.show_cursor = true;
        state.highlights = legal_moves.to_vec();
        state.status_msg = Some(format!("{}'s turn ({})", self.name, self.player));

        // 最初の合法手にカーソルを合わせる
        if let Some(&first) = legal_moves.first() {
            state.cursor = first;
        }

        loop {
            render_board(board, &state);
            print!("[Arrows]: Move | [Enter]: Place | [q]: Quit\r\n");

            if event::poll(Duration::from_millis(100)).unwrap() {
                if let Event::Key(KeyEvent { code, .. }) = event::read().unwrap() {
                    match code {
                        KeyCode::Char('q') => return None,
                        KeyCode::Up => {
                            if state.cursor.row > 1 {
                                state.cursor.row -= 1;
                            }
                        }
                        KeyCode::Down => {
                            if state.cursor.row < INNER {
                                state.cursor.row += 1;
                            }
                        }
                        KeyCode::Left => {
                            if state.cursor.col > 1 {
                                state.cursor.col -= 1;
                            }
                        }
                        KeyCode::Right => {
                            if state.cursor.col < INNER {
                                state.cursor.col += 1;
                            }
                        }
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            // 合法手以外のマスの確定はエラーにせず無視する
                            if legal_moves.contains(&state.cursor) {
                                return Some(state.cursor);
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}
