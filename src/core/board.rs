use serde::{Deserialize, Serialize};

/// 番兵の外周込みの盤の幅
pub const PADDED: usize = 8;
/// プレイ領域の幅 (インデックス 1..=6)
pub const INNER: usize = 6;
/// プレイ領域のマス数
pub const CELLS: usize = INNER * INNER;

/// 盤面
///
/// 8x8 のバッファに 6x6 のプレイ領域を埋め込む。外周 1 マス (行/列の 0 と 7)
/// は常に空きの番兵で、方向走査のたびに境界チェックをしなくて済む。
/// セル値は 0 = 空き, +1 = White, -1 = Black。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[i8; PADDED]; PADDED],
}

impl Board {
    /// オセロの初期配置 (中央 4 マスの対角パターン)
    pub fn initial() -> Self {
        let mut cells = [[0i8; PADDED]; PADDED];
        cells[3][4] = 1;
        cells[4][3] = 1;
        cells[3][3] = -1;
        cells[4][4] = -1;
        Board { cells }
    }

    /// 初期配置に戻す (リプレイ・シミュレーション用)
    pub fn reset(&mut self) {
        *self = Board::initial();
    }

    pub fn get(&self, row: usize, col: usize) -> i8 {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: i8) {
        self.cells[row][col] = value;
    }

    /// プレイ領域のセル値合計 (White 正, Black 負)
    pub fn material_sum(&self) -> i32 {
        let mut sum = 0i32;
        for row in 1..=INNER {
            for col in 1..=INNER {
                sum += self.cells[row][col] as i32;
            }
        }
        sum
    }

    /// 石が置かれているマスの数
    pub fn occupied_count(&self) -> usize {
        let mut count = 0;
        for row in 1..=INNER {
            for col in 1..=INNER {
                if self.cells[row][col] != 0 {
                    count += 1;
                }
            }
        }
        count
    }

    /// プレイ領域を行優先で平坦化した 36 要素ベクトル (学習特徴量)
    pub fn flatten_inner(&self) -> [i8; CELLS] {
        let mut out = [0i8; CELLS];
        for row in 1..=INNER {
            for col in 1..=INNER {
                out[(row - 1) * INNER + (col - 1)] = self.cells[row][col];
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_pattern() {
        let board = Board::initial();
        assert_eq!(board.get(3, 4), 1);
        assert_eq!(board.get(4, 3), 1);
        assert_eq!(board.get(3, 3), -1);
        assert_eq!(board.get(4, 4), -1);
        assert_eq!(board.occupied_count(), 4);
        assert_eq!(board.material_sum(), 0);
    }

    #[test]
    fn sentinel_border_is_empty() {
        let board = Board::initial();
        for i in 0..PADDED {
            assert_eq!(board.get(0, i), 0);
            assert_eq!(board.get(PADDED - 1, i), 0);
            assert_eq!(board.get(i, 0), 0);
            assert_eq!(board.get(i, PADDED - 1), 0);
        }
    }

    #[test]
    fn flatten_is_row_major_inner() {
        let board = Board::initial();
        let flat = board.flatten_inner();
        assert_eq!(flat.len(), CELLS);
        // Inner (3,3) maps to index (3-1)*6 + (3-1) = 14
        assert_eq!(flat[14], -1);
        assert_eq!(flat[15], 1); // (3,4)
        assert_eq!(flat[20], 1); // (4,3)
        assert_eq!(flat[21], -1); // (4,4)
        assert_eq!(flat.iter().filter(|&&v| v != 0).count(), 4);
    }

    #[test]
    fn reset_restores_initial() {
        let mut board = Board::initial();
        board.set(1, 1, 1);
        board.reset();
        assert_eq!(board, Board::initial());
    }
}
