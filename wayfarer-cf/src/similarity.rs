//! Cosine similarity between interaction rows.
#![forbid(unsafe_code)]

use std::cmp::Ordering;

use crate::UserItemMatrix;
use crate::error::SimilarityError;

/// Cosine similarity of two equal-length binary vectors.
///
/// Returns `0.0` when either vector is all zeros.
///
/// # Errors
/// Returns [`SimilarityError::DimensionMismatch`] when the lengths differ.
///
/// # Examples
/// ```
/// use wayfarer_cf::cosine_similarity;
///
/// let sim = cosine_similarity(&[1, 1], &[1, 0]).unwrap();
/// assert!((sim - 1.0 / 2.0_f64.sqrt()).abs() < 1e-12);
/// assert_eq!(cosine_similarity(&[0, 0], &[1, 0]).unwrap(), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "cosine similarity is a normalised dot product"
)]
pub fn cosine_similarity(left: &[u8], right: &[u8]) -> Result<f64, SimilarityError> {
    if left.len() != right.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    let (dot, left_sq, right_sq) = left.iter().zip(right).fold(
        (0.0_f64, 0.0_f64, 0.0_f64),
        |(dot, left_sq, right_sq), (&l, &r)| {
            let (l, r) = (f64::from(l), f64::from(r));
            (dot + l * r, left_sq + l * l, right_sq + r * r)
        },
    );
    if left_sq == 0.0 || right_sq == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (left_sq.sqrt() * right_sq.sqrt()))
}

/// Square matrix of pairwise user similarities.
///
/// Rows and columns follow [`UserItemMatrix::users`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    users: Vec<u64>,
    values: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Compute every pairwise similarity of `matrix`'s rows.
    ///
    /// # Errors
    /// Propagates [`SimilarityError`] from [`cosine_similarity`].
    pub fn compute(matrix: &UserItemMatrix) -> Result<Self, SimilarityError> {
        let rows: Vec<&[u8]> = matrix.rows().map(|(_, row)| row).collect();
        let values = rows
            .iter()
            .map(|left| {
                rows.iter()
                    .map(|right| cosine_similarity(left, right))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            users: matrix.users().to_vec(),
            values,
        })
    }

    /// Similarity between two users, if both are present.
    #[must_use]
    pub fn get(&self, left: u64, right: u64) -> Option<f64> {
        let row = self.position(left)?;
        let column = self.position(right)?;
        self.values.get(row)?.get(column).copied()
    }

    /// Other users with positive similarity to `user_id`, most similar first.
    ///
    /// Ties are broken by ascending user identifier. The user itself is never
    /// included.
    #[must_use]
    pub fn neighbours(&self, user_id: u64) -> Vec<(u64, f64)> {
        let Some(row) = self.position(user_id).and_then(|at| self.values.get(at)) else {
            return Vec::new();
        };
        let mut neighbours: Vec<(u64, f64)> = self
            .users
            .iter()
            .copied()
            .zip(row.iter().copied())
            .filter(|&(other, similarity)| other != user_id && similarity > 0.0)
            .collect();
        neighbours.sort_by(|a, b| by_similarity(*a, *b));
        neighbours
    }

    fn position(&self, user_id: u64) -> Option<usize> {
        self.users.binary_search(&user_id).ok()
    }
}

fn by_similarity(a: (u64, f64), b: (u64, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}
