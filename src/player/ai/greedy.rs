use crate::core::{Board, Move, Player};
use crate::logic::{expand, Expansion};
use crate::player::PlayerController;

/// 1 手先の石数だけを見る貪欲戦略 (Black 側)
///
/// 展開した各盤面のセル値合計が最小になる候補を選ぶ。White が正・Black が
/// 負の符号規約なので、合計の最小化が Black の石数最大化に相当する。
pub struct GreedyAI {
    pub name: String,
}

impl GreedyAI {
    pub fn new(name: &str) -> Self {
        GreedyAI {
            name: name.to_string(),
        }
    }
}

/// 合計最小の候補手。同点なら (row, col) 昇順で最初のもの。
/// Black に合法手がなければ `None`。
pub fn pick_simple(board: &Board) -> Option<Move> {
    match expand(board, Player::Black) {
        Expansion::Moves { entries, .. } => entries
            .into_iter()
            .min_by_key(|(_, board)| board.material_sum())
            .map(|(mv, _)| mv),
        _ => None,
    }
}

impl PlayerController for GreedyAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, _legal_moves: &[Move]) -> Option<Move> {
        pick_simple(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    fn empty_board() -> Board {
        let mut board = Board::initial();
        for row in 1..=6 {
            for col in 1..=6 {
                board.set(row, col, 0);
            }
        }
        board
    }

    #[test]
    fn picks_the_largest_capture() {
        // (1,4) flips two discs, (2,3) and (3,3) flip one each
        let mut board = empty_board();
        board.set(1, 1, -1);
        board.set(1, 2, 1);
        board.set(1, 3, 1);
        board.set(2, 1, -1);
        board.set(2, 2, 1);

        assert_eq!(pick_simple(&board), Some(Move::new(1, 4)));
    }

    #[test]
    fn is_deterministic_on_ties() {
        // All four opening replies flip exactly one disc; the first in
        // (row, col) order wins the tie
        let board = Board::initial();
        let pick = pick_simple(&board);
        assert_eq!(pick, Some(Move::new(2, 4)));
        for _ in 0..10 {
            assert_eq!(pick_simple(&board), pick);
        }
    }

    #[test]
    fn returns_none_without_a_legal_move() {
        let mut board = empty_board();
        board.set(1, 1, 1);
        assert_eq!(pick_simple(&board), None);
    }
}
