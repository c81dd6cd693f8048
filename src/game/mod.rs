use crate::core::{Board, Move, Player};
use crate::display::{render_board, DisplayState};
use crate::logic::{self, GameState};
use crate::player::PlayerController;
use crossterm::event::{self, Event};
use std::time::Duration;

/// 対局の進行役
///
/// 盤面と進行状態を所有し、終局までコントローラに合法手から 1 手選ばせる。
/// 合法手のない側は `resolve_turn` が自動的にパスとして解決する。
pub struct Game {
    pub board: Board,
    pub state: GameState,
    pub last_move: Option<Move>,
}

impl Game {
    pub fn new() -> Self {
        let board = Board::initial();
        let state = logic::resolve_turn(&board, Player::White);
        Game {
            board,
            state,
            last_move: None,
        }
    }

    /// 対局ループ。戻り値は最終スコア、途中終了 (投了/中断) なら None。
    pub fn play(
        &mut self,
        white: &dyn PlayerController,
        black: &dyn PlayerController,
    ) -> Option<i32> {
        loop {
            let to_move = match self.state {
                GameState::Ended { material } => {
                    self.show_result(material);
                    return Some(material);
                }
                GameState::InProgress { to_move } => to_move,
            };

            let legal = logic::find_moves(&self.board, to_move);
            let controller = match to_move {
                Player::White => white,
                Player::Black => black,
            };

            if controller.name().contains("AI") {
                let mut state = DisplayState::default();
                state.last_move = self.last_move;
                state.status_msg = Some(format!(
                    "{} ({}) is thinking...",
                    controller.name(),
                    to_move
                ));
                render_board(&self.board, &state);
                // 観戦者に手順が追えるよう少しウェイトを入れる
                std::thread::sleep(Duration::from_millis(300));
            }

            let mv = match controller.choose_move(&self.board, &legal) {
                Some(mv) => mv,
                None => return None,
            };

            match logic::apply_move(&self.board, mv, to_move) {
                Ok(next) => {
                    self.board = next;
                    self.last_move = Some(mv);
                    self.state = logic::resolve_turn(&self.board, to_move.opponent());
                }
                // 合法手集合の外は無視して選び直し
                Err(_) => continue,
            }
        }
    }

    fn show_result(&self, material: i32) {
        let mut state = DisplayState::default();
        state.last_move = self.last_move;
        state.status_msg = Some(
            if material > 0 {
                "WHITE WINS"
            } else if material < 0 {
                "BLACK WINS"
            } else {
                "IT'S A TIE"
            }
            .to_string(),
        );
        render_board(&self.board, &state);
        print!("Final score: {:+}  (press any key)\r\n", material);

        loop {
            if event::poll(Duration::from_millis(200)).unwrap_or(false) {
                if let Ok(Event::Key(_)) = event::read() {
                    break;
                }
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
