use crate::{Error, IngredientVector, Result};

/// Exhaustive nearest-neighbor index over the encoded catalog.
///
/// One vector per recipe, stored in catalog order. Search compares the
/// query against every stored vector under squared Euclidean distance;
/// with a few hundred recipes and 0/1 coordinates there is nothing to be
/// gained from an approximation structure.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dim: usize,
    vectors: Vec<IngredientVector>,
}

impl FlatIndex {
    /// Store the catalog vectors. No preprocessing beyond a flat copy.
    pub fn build(dim: usize, vectors: Vec<IngredientVector>) -> Result<Self> {
        for vector in &vectors {
            if vector.dim() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    actual: vector.dim(),
                });
            }
        }
        Ok(Self { dim, vectors })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Exact k-NN search.
    ///
    /// Returns `(catalog position, distance)` pairs, ascending by distance
    /// with ties broken by ascending position. `k` is clamped to the
    /// catalog size; the result is never padded with sentinel entries.
    pub fn search(&self, query: &IngredientVector, k: usize) -> Result<Vec<(usize, f32)>> {
        if query.dim() != self.dim {
            return Err(Error::DimensionMismatch {
                expected: self.dim,
                actual: query.dim(),
            });
        }

        let mut hits: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(position, vector)| (position, query.l2_squared(vector)))
            .collect();

        hits.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        hits.truncate(k);
        Ok(hits)
    }
}
