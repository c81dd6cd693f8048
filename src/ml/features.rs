//! Board feature extraction for the ridge scoring models.
//!
//! A position is represented as the playable 6x6 region flattened row-major
//! into 36 values in {-1, 0, +1}. The same layout is used for the training
//! tables and at inference time.

use crate::core::board::CELLS;
use crate::core::Board;

/// Length of the feature vector (one entry per playable cell)
pub const FEATURE_SIZE: usize = CELLS;

/// Extract the model input for a position
pub fn extract(board: &Board) -> [f64; FEATURE_SIZE] {
    widen(&board.flatten_inner())
}

/// Convert a stored integer snapshot into model input
pub fn widen(row: &[i8; FEATURE_SIZE]) -> [f64; FEATURE_SIZE] {
    let mut out = [0.0; FEATURE_SIZE];
    for (dst, &src) in out.iter_mut().zip(row.iter()) {
        *dst = src as f64;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    #[test]
    fn test_feature_size() {
        assert_eq!(FEATURE_SIZE, 36);
        let features = extract(&Board::initial());
        assert_eq!(features.len(), FEATURE_SIZE);
    }

    #[test]
    fn test_extract_initial_position() {
        let features = extract(&Board::initial());
        assert_eq!(features[14], -1.0);
        assert_eq!(features[15], 1.0);
        assert_eq!(features[20], 1.0);
        assert_eq!(features[21], -1.0);
        assert_eq!(features.iter().filter(|&&v| v == 0.0).count(), 32);
    }
}
