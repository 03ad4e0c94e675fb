//! Board construction from a property catalog.
//!
//! A board is built once per match from 20 property names paired positionally
//! with 20 freshly randomized purchase values. Value and rent are fixed for
//! the match; only `owner` mutates afterwards (purchase or elimination
//! cleanup).

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Every board has exactly this many properties.
pub const BOARD_SIZE: usize = 20;

/// One board cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub estate: String,
    pub value: i64,
    pub rent: i64,
    /// Name of the owning player, if any. Cleared (never reassigned) when
    /// the owner is eliminated.
    pub owner: Option<String>,
}

/// The ordered 20-property board for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub cells: Vec<Property>,
}

impl Board {
    /// Pairs names with values positionally and derives each cell's rent.
    ///
    /// Errors if the sequences differ in length or the board would not be
    /// exactly [`BOARD_SIZE`] cells. Pure construction, no side effects.
    pub fn build(names: Vec<String>, values: &[i64]) -> Result<Self> {
        if names.len() != values.len() {
            return Err(SimError::CatalogMismatch {
                names: names.len(),
                values: values.len(),
            });
        }
        if names.len() != BOARD_SIZE {
            return Err(SimError::BoardSize {
                expected: BOARD_SIZE,
                found: names.len(),
            });
        }
        let cells = names
            .into_iter()
            .zip(values)
            .map(|(estate, &value)| Property {
                estate,
                value,
                rent: rent_for(value),
                owner: None,
            })
            .collect();
        Ok(Self { cells })
    }
}

/// Rent is 10% of the purchase value, rounded half-to-even (the source
/// host's round-half convention; ties are rare with random integer values).
pub(crate) fn rent_for(value: i64) -> i64 {
    (value as f64 * 0.10).round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Estate {i}")).collect()
    }

    #[test]
    fn test_build_shape() {
        let values: Vec<i64> = (0..BOARD_SIZE as i64).map(|i| 200 + i * 100).collect();
        let board = Board::build(names(BOARD_SIZE), &values).unwrap();
        assert_eq!(board.cells.len(), BOARD_SIZE);
        for (cell, value) in board.cells.iter().zip(&values) {
            assert_eq!(cell.value, *value);
            assert_eq!(cell.rent, rent_for(*value));
            assert!(cell.owner.is_none());
        }
    }

    #[test]
    fn test_build_preserves_catalog_order() {
        let values = vec![300; BOARD_SIZE];
        let board = Board::build(names(BOARD_SIZE), &values).unwrap();
        assert_eq!(board.cells[0].estate, "Estate 0");
        assert_eq!(board.cells[19].estate, "Estate 19");
    }

    #[test]
    fn test_build_rejects_length_mismatch() {
        let values = vec![300; BOARD_SIZE - 1];
        let err = Board::build(names(BOARD_SIZE), &values).unwrap_err();
        assert!(matches!(err, SimError::CatalogMismatch { names: 20, values: 19 }));
    }

    #[test]
    fn test_build_rejects_wrong_board_size() {
        let values = vec![300; 5];
        let err = Board::build(names(5), &values).unwrap_err();
        assert!(matches!(err, SimError::BoardSize { expected: 20, found: 5 }));
    }

    #[test]
    fn test_rent_examples() {
        assert_eq!(rent_for(1000), 100);
        assert_eq!(rent_for(333), 33); // 33.3 rounds down
        assert_eq!(rent_for(448), 45); // 44.8 rounds up
        assert_eq!(rent_for(200), 20);
    }

    proptest! {
        #[test]
        fn prop_board_cells_are_consistent(
            values in prop::collection::vec(200i64..4500, BOARD_SIZE)
        ) {
            let board = Board::build(names(BOARD_SIZE), &values).unwrap();
            prop_assert_eq!(board.cells.len(), BOARD_SIZE);
            for cell in &board.cells {
                prop_assert!(cell.owner.is_none());
                // Rent is 10% of value to within rounding.
                prop_assert!((cell.rent * 10 - cell.value).abs() <= 5);
            }
        }
    }
}
