use serde::{Deserialize, Serialize};

/// A multi-hot ingredient vector: one 0/1 coordinate per vocabulary slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientVector {
    data: Vec<f32>,
}

impl IngredientVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// The all-zero vector of the given dimension.
    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mark the coordinate at `slot` as present.
    #[inline]
    pub fn set(&mut self, slot: usize) {
        self.data[slot] = 1.0;
    }

    /// Number of coordinates set to 1.
    #[inline]
    #[must_use]
    pub fn ones(&self) -> usize {
        self.data.iter().filter(|&&x| x != 0.0).count()
    }

    /// Squared Euclidean distance.
    ///
    /// For 0/1 vectors this equals `|a| + |b| - 2|a ∩ b|`, so values are
    /// exact small integers and ordering is fully deterministic.
    #[inline]
    pub fn l2_squared(&self, other: &IngredientVector) -> f32 {
        if self.dim() != other.dim() {
            return f32::INFINITY;
        }

        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| {
                let d = a - b;
                d * d
            })
            .sum()
    }
}
