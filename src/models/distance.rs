//! Building distance matrix.
//!
//! A symmetric matrix of inter-building distances. Currently a uniform
//! placeholder (every off-diagonal entry is 1); the placement phases do not
//! consult it. Kept for a future distance-aware preference ranking.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Symmetric building-to-building distance matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<i64>,
}

impl DistanceMatrix {
    /// Creates a zeroed `size × size` matrix.
    ///
    /// Fails with [`ScheduleError::Configuration`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(ScheduleError::Configuration(
                "distance matrix size must be positive".into(),
            ));
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Creates the uniform placeholder: all off-diagonal entries 1.
    pub fn uniform(size: usize) -> Result<Self> {
        let mut matrix = Self::new(size)?;
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    matrix.set(i, j, 1);
                }
            }
        }
        Ok(matrix)
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.cells[i * self.size + j]
    }

    /// Sets `(i, j)` and its mirror `(j, i)`.
    pub fn set(&mut self, i: usize, j: usize, value: i64) {
        self.cells[i * self.size + j] = value;
        self.cells[j * self.size + i] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_is_symmetric() {
        let mut m = DistanceMatrix::new(3).unwrap();
        m.set(0, 2, 4);
        assert_eq!(m.get(0, 2), 4);
        assert_eq!(m.get(2, 0), 4);
        assert_eq!(m.get(1, 2), 0);
    }

    #[test]
    fn test_uniform() {
        let m = DistanceMatrix::uniform(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 0 } else { 1 };
                assert_eq!(m.get(i, j), expected);
            }
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            DistanceMatrix::new(0),
            Err(ScheduleError::Configuration(_))
        ));
    }
}
