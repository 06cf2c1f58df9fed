use super::InterpolationError;
use crate::tables::{Axis, Tensor};

/// Sample positions enclosing a coordinate along one axis.
///
/// `low == high` when the coordinate sits exactly on a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub low: usize,
    pub high: usize,
}

impl Bracket {
    /// Find the bracketing samples of `x` on `axis`.
    ///
    /// `axis_index` only labels the error.
    pub fn find(axis: &Axis, axis_index: usize, x: f64) -> Result<Self, InterpolationError> {
        let samples = axis.samples();
        let out_of_domain = || InterpolationError::OutOfDomain {
            axis: axis_index,
            value: x,
            min: axis.min(),
            max: axis.max(),
        };

        // Written so that NaN lands outside
        if !(x >= axis.min() && x <= axis.max()) {
            return Err(out_of_domain());
        }
        if samples.len() == 1 {
            return Ok(Self { low: 0, high: 0 });
        }

        for j in 0..samples.len() - 1 {
            if x == samples[j] {
                return Ok(Self { low: j, high: j });
            }
            if x == samples[j + 1] {
                return Ok(Self {
                    low: j + 1,
                    high: j + 1,
                });
            }
            if x > samples[j] && x < samples[j + 1] {
                return Ok(Self { low: j, high: j + 1 });
            }
        }
        Err(out_of_domain())
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }
}

/// The grid cell enclosing a query point, one bracket per axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hypercube {
    brackets: Vec<Bracket>,
}

impl Hypercube {
    pub fn locate(axes: &[&Axis], target: &[f64]) -> Result<Self, InterpolationError> {
        let brackets = axes
            .iter()
            .zip(target)
            .enumerate()
            .map(|(i, (axis, &x))| Bracket::find(axis, i, x))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { brackets })
    }

    #[inline]
    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        1 << self.brackets.len()
    }

    /// Grid index of corner `vertex`: bit `j` of `vertex` picks the high
    /// sample along axis `j`, a clear bit the low one.
    pub fn vertex(&self, vertex: usize, index: &mut [usize]) {
        for (j, bracket) in self.brackets.iter().enumerate() {
            index[j] = if (vertex >> j) & 1 == 1 {
                bracket.high
            } else {
                bracket.low
            };
        }
    }

    /// Tensor values at every corner, ordered by vertex ordinal
    pub fn corner_values(&self, tensor: &Tensor) -> Vec<f64> {
        let mut index = vec![0; self.brackets.len()];
        (0..self.vertex_count())
            .map(|v| {
                self.vertex(v, &mut index);
                tensor.get(&index)
            })
            .collect()
    }

    /// Low and high coordinates of the cell along every axis
    pub fn bounds(&self, axes: &[&Axis]) -> Vec<(f64, f64)> {
        self.brackets
            .iter()
            .zip(axes)
            .map(|(b, axis)| (axis.samples()[b.low], axis.samples()[b.high]))
            .collect()
    }
}
