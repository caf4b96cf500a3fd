//! Binary user-item interaction matrix.
#![forbid(unsafe_code)]

use std::collections::{BTreeSet, HashMap};

use wayfarer_core::Interaction;

/// Rows are users, columns are places, and a cell is `1` when the user
/// interacted with the place at least once.
///
/// Users and places are indexed in ascending identifier order, so building
/// from the same interactions always yields the same layout.
///
/// # Examples
/// ```
/// use wayfarer_cf::UserItemMatrix;
/// use wayfarer_core::Interaction;
///
/// let matrix = UserItemMatrix::from_interactions(&[
///     Interaction::click(1, 101),
///     Interaction::click(1, 101),
///     Interaction::click(2, 102),
/// ]);
/// assert_eq!(matrix.users(), &[1, 2]);
/// assert_eq!(matrix.items(), &[101, 102]);
/// assert_eq!(matrix.row(1), Some(&[1_u8, 0][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserItemMatrix {
    users: Vec<u64>,
    items: Vec<u64>,
    user_index: HashMap<u64, usize>,
    rows: Vec<Vec<u8>>,
}

impl UserItemMatrix {
    /// Build the matrix, collapsing duplicate `(user, place)` pairs.
    #[must_use]
    pub fn from_interactions(interactions: &[Interaction]) -> Self {
        let users: Vec<u64> = interactions
            .iter()
            .map(|interaction| interaction.user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let items: Vec<u64> = interactions
            .iter()
            .map(|interaction| interaction.place_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let user_index: HashMap<u64, usize> = users
            .iter()
            .enumerate()
            .map(|(position, &user)| (user, position))
            .collect();
        let item_index: HashMap<u64, usize> = items
            .iter()
            .enumerate()
            .map(|(position, &item)| (item, position))
            .collect();

        let mut rows = vec![vec![0_u8; items.len()]; users.len()];
        for interaction in interactions {
            let row = user_index
                .get(&interaction.user_id)
                .and_then(|&position| rows.get_mut(position));
            let column = item_index.get(&interaction.place_id).copied();
            if let (Some(row), Some(column)) = (row, column)
                && let Some(cell) = row.get_mut(column)
            {
                *cell = 1;
            }
        }

        Self {
            users,
            items,
            user_index,
            rows,
        }
    }

    /// User identifiers in row order.
    #[must_use]
    pub fn users(&self) -> &[u64] {
        &self.users
    }

    /// Place identifiers in column order.
    #[must_use]
    pub fn items(&self) -> &[u64] {
        &self.items
    }

    /// Report whether `user_id` has a row.
    #[must_use]
    pub fn contains_user(&self, user_id: u64) -> bool {
        self.user_index.contains_key(&user_id)
    }

    /// Interaction flags for `user_id`, one per entry of [`Self::items`].
    #[must_use]
    pub fn row(&self, user_id: u64) -> Option<&[u8]> {
        self.user_index
            .get(&user_id)
            .and_then(|&position| self.rows.get(position))
            .map(Vec::as_slice)
    }

    /// Iterate rows alongside their user identifiers.
    pub fn rows(&self) -> impl Iterator<Item = (u64, &[u8])> {
        self.users
            .iter()
            .copied()
            .zip(self.rows.iter().map(Vec::as_slice))
    }

    /// Places `user_id` interacted with.
    #[must_use]
    pub fn items_for(&self, user_id: u64) -> Vec<u64> {
        self.row(user_id)
            .map(|row| {
                self.items
                    .iter()
                    .zip(row)
                    .filter(|&(_, &flag)| flag == 1)
                    .map(|(&item, _)| item)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Report whether the matrix holds no interactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
