use crate::core::board::INNER;
use crate::core::{Board, Move, Player};
use std::collections::BTreeSet;
use std::fmt;

/// 8 方向の走査ベクトル
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// 合法手集合に含まれない着手 (適用前に必ず検証される)
    InvalidMove(Move),
    /// モデル未ロードのままモデル戦略が呼ばれた
    ModelsUnavailable,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineError::InvalidMove(mv) => write!(f, "illegal move {}", mv),
            EngineError::ModelsUnavailable => write!(f, "scoring models are not loaded"),
        }
    }
}

impl std::error::Error for EngineError {}

/// 合法手生成
///
/// 自分の石それぞれから 8 方向へ走査する。隣が相手石なら列をたどり、最初の
/// 空きマスで終端した場合その空きマスが合法手。自石に当たるか、プレイ領域
/// (1..=6) を出たら打ち切り。重複は集合として潰し、(row, col) 昇順で返す。
pub fn find_moves(board: &Board, player: Player) -> Vec<Move> {
    let me = player.sign();
    let mut moves = BTreeSet::new();
    for row in 1..=INNER {
        for col in 1..=INNER {
            if board.get(row, col) != me {
                continue;
            }
            for (dr, dc) in DIRECTIONS {
                // 番兵のおかげで隣接参照は常に配列内
                let adj = board.get(
                    (row as isize + dr) as usize,
                    (col as isize + dc) as usize,
                );
                if adj != -me {
                    continue;
                }
                let mut r = row as isize + dr * 2;
                let mut c = col as isize + dc * 2;
                while (1..=INNER as isize).contains(&r) && (1..=INNER as isize).contains(&c) {
                    let cell = board.get(r as usize, c as usize);
                    if cell == 0 {
                        moves.insert(Move::new(r as usize, c as usize));
                        break;
                    } else if cell == me {
                        break;
                    }
                    r += dr;
                    c += dc;
                }
            }
        }
    }
    moves.into_iter().collect()
}

/// 着手適用 (値渡し)
///
/// `mv` が合法手集合に含まれるかを先に検証し、含まれなければ
/// `EngineError::InvalidMove` を返す。適用後の新しい盤面が正となる。
pub fn apply_move(board: &Board, mv: Move, player: Player) -> Result<Board, EngineError> {
    if !find_moves(board, player).contains(&mv) {
        return Err(EngineError::InvalidMove(mv));
    }
    Ok(apply_unchecked(board, mv, player))
}

/// 石を置き、方向ごとに独立して挟んだ相手石を裏返す。
/// 裏返しは仮盤面上で進め、自石で終端した方向だけ採用する
/// (空きマスや境界に抜けた方向は何も裏返さない)。
fn apply_unchecked(board: &Board, mv: Move, player: Player) -> Board {
    let me = player.sign();
    let mut next = board.clone();
    next.set(mv.row, mv.col, me);
    for (dr, dc) in DIRECTIONS {
        let adj = next.get(
            (mv.row as isize + dr) as usize,
            (mv.col as isize + dc) as usize,
        );
        if adj != -me {
            continue;
        }
        let mut speculative = next.clone();
        let mut r = mv.row as isize + dr;
        let mut c = mv.col as isize + dc;
        while (1..=INNER as isize).contains(&r) && (1..=INNER as isize).contains(&c) {
            let cell = speculative.get(r as usize, c as usize);
            if cell == me {
                next = speculative;
                break;
            } else if cell == -me {
                speculative.set(r as usize, c as usize, me);
                r += dr;
                c += dc;
            } else {
                break;
            }
        }
    }
    next
}

/// 1 手先の展開結果
#[derive(Debug, Clone)]
pub enum Expansion {
    /// 手番側に合法手がある
    Moves {
        mover: Player,
        entries: Vec<(Move, Board)>,
    },
    /// 手番側はパスし、相手側の着手で展開した
    Passed {
        mover: Player,
        entries: Vec<(Move, Board)>,
    },
    /// 双方に合法手がない終局。元の盤面が唯一の結果
    Terminal(Board),
}

impl Expansion {
    pub fn entries(&self) -> &[(Move, Board)] {
        match self {
            Expansion::Moves { entries, .. } | Expansion::Passed { entries, .. } => entries,
            Expansion::Terminal(_) => &[],
        }
    }

    /// 到達盤面の列挙 (終局なら元の盤面 1 つ)
    pub fn boards(&self) -> Vec<Board> {
        match self {
            Expansion::Moves { entries, .. } | Expansion::Passed { entries, .. } => {
                entries.iter().map(|(_, b)| b.clone()).collect()
            }
            Expansion::Terminal(board) => vec![board.clone()],
        }
    }
}

/// 1 手先の盤面列挙
///
/// 手番側に合法手がなければ一度だけ相手側で列挙し直す (パスの符号化)。
/// それも空なら `Terminal`。パスの再試行は明示的にこの 1 段のみで、
/// これより深い再帰はしない。
pub fn expand(board: &Board, player: Player) -> Expansion {
    let entries = expand_for(board, player);
    if !entries.is_empty() {
        return Expansion::Moves {
            mover: player,
            entries,
        };
    }
    let opponent = player.opponent();
    let entries = expand_for(board, opponent);
    if !entries.is_empty() {
        return Expansion::Passed {
            mover: opponent,
            entries,
        };
    }
    Expansion::Terminal(board.clone())
}

fn expand_for(board: &Board, player: Player) -> Vec<(Move, Board)> {
    find_moves(board, player)
        .into_iter()
        .map(|mv| (mv, apply_unchecked(board, mv, player)))
        .collect()
}

/// 対局の進行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress { to_move: Player },
    Ended { material: i32 },
}

/// 手番の解決
///
/// `to_move` に合法手があればそのまま。なければ手番を相手に渡し (パス)、
/// 相手にも合法手がなければ終局として最終スコアを確定する。
pub fn resolve_turn(board: &Board, to_move: Player) -> GameState {
    if !find_moves(board, to_move).is_empty() {
        return GameState::InProgress { to_move };
    }
    let opponent = to_move.opponent();
    if !find_moves(board, opponent).is_empty() {
        return GameState::InProgress { to_move: opponent };
    }
    GameState::Ended {
        material: board.material_sum(),
    }
}

/// 何手目か (初期配置 4 石、1 手につき 1 石増える)
pub fn move_number(board: &Board) -> usize {
    board.occupied_count() - 4
}
