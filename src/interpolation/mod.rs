//! Piecewise multilinear interpolation over rectilinear grids.
//!
//! A query first locates the grid cell enclosing the target point
//! ([`Hypercube::locate`]), then blends the `2^n` corner samples one axis at a
//! time, starting from axis 0 ([`multilinear::collapse`]). There is no
//! extrapolation: a coordinate outside its axis range fails the whole query.

pub mod hypercube;
pub mod multilinear;

pub use hypercube::{Bracket, Hypercube};

use crate::tables::{Axis, Tensor};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    #[error("Point lies outside axis {axis}: {value} not in [{min}, {max}]")]
    OutOfDomain {
        axis: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Dimension mismatch: tensor has {tensor} axes, {axes} axes and {target} coordinates given")]
    DimensionMismatch {
        tensor: usize,
        axes: usize,
        target: usize,
    },

    #[error("Axis {axis} has {samples} samples but the tensor holds {points} along it")]
    AxisLengthMismatch {
        axis: usize,
        samples: usize,
        points: usize,
    },
}

/// Interpolate `tensor`, sampled on `axes`, at `target`.
///
/// At a grid coordinate the stored sample is returned exactly.
pub fn interpolate(
    axes: &[&Axis],
    tensor: &Tensor,
    target: &[f64],
) -> Result<f64, InterpolationError> {
    let n = tensor.dimensions();
    if axes.len() != n || target.len() != n {
        return Err(InterpolationError::DimensionMismatch {
            tensor: n,
            axes: axes.len(),
            target: target.len(),
        });
    }
    for (axis, (samples, &points)) in axes.iter().zip(tensor.shape()).enumerate() {
        if samples.len() != points {
            return Err(InterpolationError::AxisLengthMismatch {
                axis,
                samples: samples.len(),
                points,
            });
        }
    }

    let cube = Hypercube::locate(axes, target)?;
    let corners = cube.corner_values(tensor);
    let bounds = cube.bounds(axes);
    Ok(multilinear::collapse(corners, &bounds, target))
}
