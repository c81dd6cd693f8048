use serde::{Deserialize, Serialize};
use std::fmt;

/// 手番。White = +1 (先手・人間側), Black = -1 (後手・AI側)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Default for Player {
    fn default() -> Self {
        Player::White
    }
}

impl Player {
    /// 盤面セル値としての符号
    pub fn sign(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// 着手先の座標 (番兵込みの盤面インデックス、プレイ領域は 1..=6)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
