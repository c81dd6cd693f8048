use crate::core::{Board, Move, Player};
use crate::logic::{expand, move_number, EngineError, Expansion};
use crate::ml::features;
use crate::ml::ModelBank;
use crate::player::ai::greedy::pick_simple;
use crate::player::PlayerController;

/// リッジ回帰モデルで候補盤面を採点する戦略 (Black 側)
///
/// モデル未ロード時や最終手 (31 手目) は貪欲戦略へ切り替える。
pub struct ModelAI {
    pub name: String,
    bank: Option<ModelBank>,
}

impl ModelAI {
    pub fn new(name: &str, bank: Option<ModelBank>) -> Self {
        ModelAI {
            name: name.to_string(),
            bank,
        }
    }

    /// モデル採点による選択。バンク未ロードなら `ModelsUnavailable`、
    /// Black に合法手がなければ `Ok(None)`。
    pub fn try_pick(&self, board: &Board) -> Result<Option<Move>, EngineError> {
        let bank = self.bank.as_ref().ok_or(EngineError::ModelsUnavailable)?;
        Ok(pick_model(bank, board))
    }
}

/// モデル採点による 1 手選択
///
/// 30 手目より前: 候補ごとに相手 (White) の応手を展開し、2 手先盤面の予測値の
/// 最大 (相手が自分に最良の応手を指す想定) をその候補の評価とし、
/// `models[move_number + 2]` で採点する。30 手目以降は展開を省き、候補盤面を
/// `models[move_number + 1]` で直接採点する。いずれも評価最小の候補を選ぶ。
/// モデルは低い予測値ほど Black 有利になるよう学習されており、この符号規約と
/// 最大→最小の枠組みは学習済み成果物との契約としてそのまま保存する。
pub fn pick_model(bank: &ModelBank, board: &Board) -> Option<Move> {
    let n = move_number(board);
    let entries = match expand(board, Player::Black) {
        Expansion::Moves { entries, .. } => entries,
        _ => return None,
    };

    let mut best: Option<(f64, Move)> = None;
    for (mv, candidate) in &entries {
        let score = if n < 30 {
            let model = bank.get(n + 2);
            expand(candidate, Player::White)
                .boards()
                .iter()
                .map(|reply| model.predict(&features::extract(reply)))
                .fold(f64::NEG_INFINITY, f64::max)
        } else {
            bank.get(n + 1).predict(&features::extract(candidate))
        };
        if best.map_or(true, |(s, _)| score < s) {
            best = Some((score, *mv));
        }
    }
    best.map(|(_, mv)| mv)
}

impl PlayerController for ModelAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, _legal_moves: &[Move]) -> Option<Move> {
        // 最終手はモデル表の範囲外なので石数だけで選ぶ
        if move_number(board) == 31 {
            return pick_simple(board);
        }
        match self.try_pick(board) {
            Ok(mv) => mv,
            // モデルがなければ素朴な戦略で代替
            Err(_) => pick_simple(board),
        }
    }
}
