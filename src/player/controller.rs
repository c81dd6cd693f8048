use crate::core::{Board, Move};

/// プレイヤー操作のtrait
///
/// `legal_moves` は手番側の合法手集合 (空でないことを呼び出し側が保証する)。
/// `None` は投了・中断。
pub trait PlayerController {
    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move>;
    fn name(&self) -> &str;
}
