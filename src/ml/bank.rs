//! Persistence for the per-move-number model table.
//!
//! The bot consumes one ridge model per move number, 32 in total, stored as
//! `{move}_ridge.json` inside a models directory. Only the predict contract
//! matters to the engine; the bank is read-only at inference time.

use crate::ml::ridge::RidgeModel;
use anyhow::Context;
use std::fs::File;
use std::path::Path;

/// One model per move number on a 6x6 board (32 playable cells)
pub const NUM_MODELS: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelBank {
    models: Vec<RidgeModel>,
}

impl ModelBank {
    pub fn new(models: Vec<RidgeModel>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            models.len() == NUM_MODELS,
            "expected {} models, got {}",
            NUM_MODELS,
            models.len()
        );
        Ok(ModelBank { models })
    }

    pub fn get(&self, move_number: usize) -> &RidgeModel {
        &self.models[move_number]
    }

    /// Load `{0..31}_ridge.json` from `dir`
    pub fn load(dir: impl AsRef<Path>) -> anyhow::Result<ModelBank> {
        let dir = dir.as_ref();
        let mut models = Vec::with_capacity(NUM_MODELS);
        for move_number in 0..NUM_MODELS {
            let path = dir.join(format!("{}_ridge.json", move_number));
            let file = File::open(&path)
                .with_context(|| format!("opening model file {}", path.display()))?;
            let model: RidgeModel = serde_json::from_reader(file)
                .with_context(|| format!("parsing model file {}", path.display()))?;
            models.push(model);
        }
        ModelBank::new(models)
    }

    pub fn save(&self, dir: impl AsRef<Path>) -> anyhow::Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating models directory {}", dir.display()))?;
        for (move_number, model) in self.models.iter().enumerate() {
            let path = dir.join(format!("{}_ridge.json", move_number));
            let file = File::create(&path)
                .with_context(|| format!("writing model file {}", path.display()))?;
            serde_json::to_writer(file, model)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_arity() {
        assert!(ModelBank::new(vec![RidgeModel::zero(); NUM_MODELS]).is_ok());
        assert!(ModelBank::new(vec![RidgeModel::zero(); 5]).is_err());
    }

    #[test]
    fn test_bank_indexing() {
        let mut models = vec![RidgeModel::zero(); NUM_MODELS];
        models[7].intercept = 7.0;
        let bank = ModelBank::new(models).unwrap();
        assert_eq!(bank.get(7).intercept, 7.0);
        assert_eq!(bank.get(0).intercept, 0.0);
    }

    #[test]
    fn test_load_missing_directory_fails() {
        assert!(ModelBank::load("definitely/not/a/models/dir").is_err());
    }
}
