//! Display order of columns.
//!
//! Columns keep their creation index for life; the display order is a
//! permutation mapping display slots to creation indices. Until the first
//! reorder the order is the identity and no permutation is stored.

use crate::error::{Result, TableError};

/// Permutation from display slot to column creation index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOrder {
    order: Option<Vec<usize>>,
}

impl ColumnOrder {
    /// Identity order.
    #[must_use]
    pub const fn new() -> Self {
        Self { order: None }
    }

    /// Has the order ever been customized?
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.order.is_some()
    }

    /// Display slot of the column created at `creation`.
    #[must_use]
    pub fn display_index_of(&self, creation: usize) -> usize {
        match &self.order {
            None => creation,
            Some(order) => order
                .iter()
                .position(|&c| c == creation)
                .unwrap_or(creation),
        }
    }

    /// Creation index of the column shown in display slot `display`.
    #[must_use]
    pub fn creation_index_at(&self, display: usize) -> usize {
        match &self.order {
            None => display,
            Some(order) => order.get(display).copied().unwrap_or(display),
        }
    }

    /// The full order for `count` columns.
    #[must_use]
    pub fn to_vec(&self, count: usize) -> Vec<usize> {
        match &self.order {
            None => (0..count).collect(),
            Some(order) => order.clone(),
        }
    }

    /// Replace the order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidColumnOrder`] unless `order` is a
    /// permutation of `0..count`; the current order is left untouched.
    pub fn set(&mut self, order: &[usize], count: usize) -> Result<()> {
        validate_permutation(order, count)?;
        self.order = Some(order.to_vec());
        Ok(())
    }

    /// Account for a column inserted at creation index `creation`.
    ///
    /// Existing indices at or above it shift up and the new column takes the
    /// display slot matching its creation index.
    pub fn insert(&mut self, creation: usize) {
        if let Some(order) = &mut self.order {
            for c in order.iter_mut() {
                if *c >= creation {
                    *c += 1;
                }
            }
            let slot = creation.min(order.len());
            order.insert(slot, creation);
        }
    }

    /// Account for the removal of the column at creation index `creation`.
    pub fn remove(&mut self, creation: usize) {
        if let Some(order) = &mut self.order {
            order.retain(|&c| c != creation);
            for c in order.iter_mut() {
                if *c > creation {
                    *c -= 1;
                }
            }
        }
    }
}

fn validate_permutation(order: &[usize], count: usize) -> Result<()> {
    if order.len() != count {
        return Err(TableError::InvalidColumnOrder(format!(
            "expected {count} entries, got {}",
            order.len()
        )));
    }
    let mut seen = vec![false; count];
    for &c in order {
        match seen.get_mut(c) {
            None => {
                return Err(TableError::InvalidColumnOrder(format!(
                    "entry {c} out of range"
                )))
            }
            Some(true) => {
                return Err(TableError::InvalidColumnOrder(format!(
                    "duplicate entry {c}"
                )))
            }
            Some(slot) => *slot = true,
        }
    }
    Ok(())
}

/// Left edge of column `creation`, relative to the first display column.
///
/// `width_of` maps a creation index to that column's width.
#[must_use]
pub fn x_position_of(order: &ColumnOrder, creation: usize, width_of: impl Fn(usize) -> f32) -> f32 {
    let slot = order.display_index_of(creation);
    (0..slot)
        .map(|display| width_of(order.creation_index_at(display)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identity_by_default() {
        let order = ColumnOrder::new();
        assert!(!order.is_custom());
        assert_eq!(order.display_index_of(2), 2);
        assert_eq!(order.creation_index_at(1), 1);
        assert_eq!(order.to_vec(3), vec![0, 1, 2]);
    }

    #[test]
    fn test_set_and_query() {
        let mut order = ColumnOrder::new();
        order.set(&[2, 0, 1], 3).unwrap();
        assert!(order.is_custom());
        assert_eq!(order.display_index_of(2), 0);
        assert_eq!(order.display_index_of(0), 1);
        assert_eq!(order.creation_index_at(2), 1);
    }

    #[test]
    fn test_set_rejects_non_permutations() {
        let mut order = ColumnOrder::new();
        order.set(&[1, 0], 2).unwrap();
        assert!(order.set(&[0, 0], 2).is_err());
        assert!(order.set(&[0, 2], 2).is_err());
        assert!(order.set(&[0], 2).is_err());
        assert_eq!(order.to_vec(2), vec![1, 0]);
    }

    #[test]
    fn test_insert_and_remove_keep_permutation() {
        let mut order = ColumnOrder::new();
        order.set(&[2, 0, 1], 3).unwrap();
        order.insert(1);
        assert_eq!(order.to_vec(4), vec![3, 1, 0, 2]);
        order.remove(0);
        assert_eq!(order.to_vec(3), vec![2, 0, 1]);
    }

    #[test]
    fn test_x_position_follows_display_order() {
        let mut order = ColumnOrder::new();
        let widths = [10.0, 20.0, 30.0];
        let width_of = |c: usize| widths[c];
        assert_eq!(x_position_of(&order, 2, width_of), 30.0);
        order.set(&[2, 0, 1], 3).unwrap();
        assert_eq!(x_position_of(&order, 2, width_of), 0.0);
        assert_eq!(x_position_of(&order, 0, width_of), 30.0);
        assert_eq!(x_position_of(&order, 1, width_of), 40.0);
    }

    proptest! {
        #[test]
        fn prop_x_positions_tile_without_gaps(
            widths in prop::collection::vec(0.0f32..200.0, 1..8),
            seed in any::<u64>(),
        ) {
            let count = widths.len();
            let mut perm: Vec<usize> = (0..count).collect();
            // deterministic shuffle from the seed
            let mut s = seed;
            for i in (1..count).rev() {
                s = s.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                let j = (s >> 33) as usize % (i + 1);
                perm.swap(i, j);
            }
            let mut order = ColumnOrder::new();
            order.set(&perm, count).unwrap();

            let mut expected = 0.0f32;
            for display in 0..count {
                let creation = order.creation_index_at(display);
                let x = x_position_of(&order, creation, |c| widths[c]);
                prop_assert!((x - expected).abs() < 1e-3);
                expected += widths[creation];
            }
        }
    }
}
