//! Offline research harness.
//!
//! Mirrors the original experiment setup: random self-play produces one
//! feature table per move number plus a final-score label per game, a ridge
//! model is fitted per move number, and the resulting bot is benchmarked
//! against a uniform random player. Every simulation owns its Board; the
//! parallel benchmark aggregates results only after all games finish.

use crate::core::{Board, Player};
use crate::logic::{self, GameState};
use crate::ml::bank::{ModelBank, NUM_MODELS};
use crate::ml::features::{self, FEATURE_SIZE};
use crate::ml::ridge::RidgeModel;
use crate::player::ai::{greedy, model};
use anyhow::Context;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Self-play dataset
pub struct TrainingData {
    /// `features[move_number][game]`: board snapshot taken right after that
    /// move was played; stays all-zero when the game ended earlier
    pub features: Vec<Vec<[i8; FEATURE_SIZE]>>,
    /// `labels[game]`: final material sum in [-36, 36]
    pub labels: Vec<i8>,
}

/// Generate training data from random-vs-random games
pub fn random_simulations(games: usize) -> TrainingData {
    let mut features = vec![vec![[0i8; FEATURE_SIZE]; games]; NUM_MODELS];
    let mut labels = vec![0i8; games];
    let mut rng = rand::thread_rng();

    for game in 0..games {
        let mut board = Board::initial();
        let mut state = logic::resolve_turn(&board, Player::White);
        let mut move_count = 0usize;

        while let GameState::InProgress { to_move } = state {
            let moves = logic::find_moves(&board, to_move);
            // resolve_turn guarantees the side to move has a legal move
            let mv = match moves.choose(&mut rng) {
                Some(&mv) => mv,
                None => break,
            };
            board = match logic::apply_move(&board, mv, to_move) {
                Ok(next) => next,
                Err(_) => break,
            };
            features[move_count][game] = board.flatten_inner();
            move_count += 1;
            state = logic::resolve_turn(&board, to_move.opponent());
        }

        if let GameState::Ended { material } = state {
            labels[game] = material as i8;
        }
    }

    TrainingData { features, labels }
}

/// Write `y_sum.csv` plus one 36-column integer table per move number
pub fn write_csv(data: &TrainingData, dir: impl AsRef<Path>) -> anyhow::Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("creating data directory {}", dir.display()))?;

    let mut out = String::new();
    for &label in &data.labels {
        out.push_str(&label.to_string());
        out.push('\n');
    }
    fs::write(dir.join("y_sum.csv"), out).context("writing y_sum.csv")?;

    for (move_number, table) in data.features.iter().enumerate() {
        let mut out = String::new();
        for row in table {
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&v.to_string());
            }
            out.push('\n');
        }
        let name = format!("{}.csv", move_number);
        fs::write(dir.join(&name), out).with_context(|| format!("writing {}", name))?;
    }
    Ok(())
}

/// Read a dataset previously written by `write_csv`
pub fn read_csv(dir: impl AsRef<Path>) -> anyhow::Result<TrainingData> {
    let dir = dir.as_ref();

    let labels = fs::read_to_string(dir.join("y_sum.csv"))
        .context("reading y_sum.csv")?
        .lines()
        .map(|line| line.trim().parse::<i8>())
        .collect::<Result<Vec<_>, _>>()
        .context("parsing y_sum.csv")?;

    let mut features = Vec::with_capacity(NUM_MODELS);
    for move_number in 0..NUM_MODELS {
        let path = dir.join(format!("{}.csv", move_number));
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut table = Vec::with_capacity(labels.len());
        for line in text.lines() {
            let mut row = [0i8; FEATURE_SIZE];
            for (slot, field) in row.iter_mut().zip(line.split(',')) {
                *slot = field
                    .trim()
                    .parse()
                    .with_context(|| format!("parsing {}", path.display()))?;
            }
            table.push(row);
        }
        features.push(table);
    }

    Ok(TrainingData { features, labels })
}

/// Fit one ridge model per move number over the games that reached it
/// (all-zero snapshot rows are filtered out before fitting)
pub fn train_models(data: &TrainingData, alpha: f64) -> anyhow::Result<ModelBank> {
    let models: Vec<RidgeModel> = (0..NUM_MODELS)
        .into_par_iter()
        .map(|move_number| {
            let mut rows = Vec::new();
            let mut targets = Vec::new();
            for (snapshot, &label) in data.features[move_number].iter().zip(data.labels.iter()) {
                if snapshot.iter().any(|&v| v != 0) {
                    rows.push(features::widen(snapshot));
                    targets.push(label as f64);
                }
            }
            RidgeModel::fit(&rows, &targets, alpha)
        })
        .collect();
    ModelBank::new(models)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkStats {
    pub total_games: usize,
    /// Model bot (Black) wins: final material < 0
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub avg_material: f64,
    pub materials: Vec<i32>,
}

impl BenchmarkStats {
    pub fn from_materials(materials: Vec<i32>) -> Self {
        let total_games = materials.len();
        let wins = materials.iter().filter(|&&m| m < 0).count();
        let draws = materials.iter().filter(|&&m| m == 0).count();
        let losses = materials.iter().filter(|&&m| m > 0).count();
        let avg_material = if total_games == 0 {
            0.0
        } else {
            materials.iter().map(|&m| m as f64).sum::<f64>() / total_games as f64
        };
        BenchmarkStats {
            total_games,
            wins,
            draws,
            losses,
            avg_material,
            materials,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}

/// Benchmark the model bot (Black) against a uniform random White player
pub fn benchmark_vs_random(bank: &ModelBank, games: usize) -> BenchmarkStats {
    let materials: Vec<i32> = (0..games)
        .into_par_iter()
        .map(|_| play_vs_random(bank))
        .collect();
    BenchmarkStats::from_materials(materials)
}

/// One model-vs-random game; returns the final material sum
fn play_vs_random(bank: &ModelBank) -> i32 {
    let mut rng = rand::thread_rng();
    let mut board = Board::initial();
    let mut state = logic::resolve_turn(&board, Player::White);

    while let GameState::InProgress { to_move } = state {
        let mv = match to_move {
            Player::White => {
                let moves = logic::find_moves(&board, to_move);
                match moves.choose(&mut rng) {
                    Some(&mv) => mv,
                    None => break,
                }
            }
            Player::Black => {
                // The final ply is scored by material alone, as in play
                let pick = if logic::move_number(&board) == 31 {
                    greedy::pick_simple(&board)
                } else {
                    model::pick_model(bank, &board)
                };
                match pick {
                    Some(mv) => mv,
                    None => break,
                }
            }
        };
        board = match logic::apply_move(&board, mv, to_move) {
            Ok(next) => next,
            Err(_) => break,
        };
        state = logic::resolve_turn(&board, to_move.opponent());
    }

    board.material_sum()
}
