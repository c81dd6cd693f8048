//! Ridge regression over flattened board vectors.
//!
//! Each model is a plain linear function: 36 coefficients plus an intercept.
//! Fitting solves the centered normal equations `(Xc^T Xc + alpha I) w =
//! Xc^T yc` with Gaussian elimination, which matches an L2-regularized
//! least-squares fit with a free intercept.

use crate::ml::features::FEATURE_SIZE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidgeModel {
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl RidgeModel {
    /// A model that predicts zero everywhere
    pub fn zero() -> Self {
        RidgeModel {
            coef: vec![0.0; FEATURE_SIZE],
            intercept: 0.0,
        }
    }

    pub fn predict(&self, features: &[f64; FEATURE_SIZE]) -> f64 {
        self.intercept
            + self
                .coef
                .iter()
                .zip(features.iter())
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }

    /// Fit on `rows` against `targets` with regularization strength `alpha`.
    ///
    /// `alpha` must be positive so the normal-equation system stays
    /// nonsingular even when a feature column is constant. An empty dataset
    /// yields the zero model.
    pub fn fit(rows: &[[f64; FEATURE_SIZE]], targets: &[f64], alpha: f64) -> RidgeModel {
        let n = rows.len().min(targets.len());
        if n == 0 {
            return RidgeModel::zero();
        }

        // Column and target means for centering
        let mut x_mean = [0.0; FEATURE_SIZE];
        for row in &rows[..n] {
            for (m, &x) in x_mean.iter_mut().zip(row.iter()) {
                *m += x;
            }
        }
        for m in x_mean.iter_mut() {
            *m /= n as f64;
        }
        let y_mean = targets[..n].iter().sum::<f64>() / n as f64;

        // Gram matrix of the centered data, plus alpha on the diagonal
        let mut gram = vec![[0.0f64; FEATURE_SIZE]; FEATURE_SIZE];
        let mut rhs = [0.0f64; FEATURE_SIZE];
        for (row, &y) in rows[..n].iter().zip(targets[..n].iter()) {
            let mut centered = [0.0; FEATURE_SIZE];
            for ((c, &x), &m) in centered.iter_mut().zip(row.iter()).zip(x_mean.iter()) {
                *c = x - m;
            }
            let yc = y - y_mean;
            for i in 0..FEATURE_SIZE {
                rhs[i] += centered[i] * yc;
                for j in i..FEATURE_SIZE {
                    gram[i][j] += centered[i] * centered[j];
                }
            }
        }
        for i in 0..FEATURE_SIZE {
            for j in 0..i {
                gram[i][j] = gram[j][i];
            }
            gram[i][i] += alpha;
        }

        let coef = solve(&mut gram, &mut rhs);
        let intercept = y_mean
            - coef
                .iter()
                .zip(x_mean.iter())
                .map(|(w, m)| w * m)
                .sum::<f64>();

        RidgeModel { coef, intercept }
    }
}

/// Gaussian elimination with partial pivoting
fn solve(a: &mut [[f64; FEATURE_SIZE]], b: &mut [f64; FEATURE_SIZE]) -> Vec<f64> {
    let n = FEATURE_SIZE;
    for col in 0..n {
        let mut pivot = col;
        for row in col + 1..n {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if pivot != col {
            a.swap(col, pivot);
            b.swap(col, pivot);
        }
        let diag = a[col][col];
        if diag == 0.0 {
            continue;
        }
        for row in col + 1..n {
            let factor = a[row][col] / diag;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0f64; n];
    for col in (0..n).rev() {
        let mut acc = b[col];
        for k in col + 1..n {
            acc -= a[col][k] * x[k];
        }
        x[col] = if a[col][col] != 0.0 {
            acc / a[col][col]
        } else {
            0.0
        };
    }
    x
}
