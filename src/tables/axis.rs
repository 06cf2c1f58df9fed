use strum::{Display, EnumCount, EnumIter, IntoStaticStr};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AxisError {
    #[error("Axis has no samples")]
    Empty,
    #[error("Axis samples are not strictly increasing at position {position}: {previous} then {value}")]
    NotIncreasing {
        position: usize,
        previous: f64,
        value: f64,
    },
}

/// The sampled physical axes of the aerodynamic data set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum AxisId {
    /// Angle of attack, full range (deg)
    Alpha1,
    /// Angle of attack, leading edge flap range (deg)
    Alpha2,
    /// Sideslip (deg)
    Beta1,
    /// Elevator deflection, five samples (deg)
    Dh1,
    /// Elevator deflection, three samples (deg)
    Dh2,
}

impl AxisId {
    /// Number of samples stored for this axis
    pub const fn len(self) -> usize {
        match self {
            AxisId::Alpha1 => 20,
            AxisId::Alpha2 => 14,
            AxisId::Beta1 => 19,
            AxisId::Dh1 => 5,
            AxisId::Dh2 => 3,
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.dat", self)
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}

/// Strictly increasing sample coordinates along one axis
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    samples: Vec<f64>,
}

impl Axis {
    pub fn new(samples: Vec<f64>) -> Result<Self, AxisError> {
        if samples.is_empty() {
            return Err(AxisError::Empty);
        }
        for (position, pair) in samples.windows(2).enumerate() {
            // `!(a < b)` also rejects NaN samples
            if !(pair[0] < pair[1]) {
                return Err(AxisError::NotIncreasing {
                    position: position + 1,
                    previous: pair[0],
                    value: pair[1],
                });
            }
        }
        Ok(Self { samples })
    }

    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.samples[0]
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }
}

/// The axis combinations a table can depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisSet {
    Alpha1,
    Alpha2,
    Dh1,
    Alpha1Beta1,
    Alpha2Beta1,
    Alpha1Beta1Dh1,
    Alpha1Beta1Dh2,
}

impl AxisSet {
    pub const fn axes(self) -> &'static [AxisId] {
        match self {
            AxisSet::Alpha1 => &[AxisId::Alpha1],
            AxisSet::Alpha2 => &[AxisId::Alpha2],
            AxisSet::Dh1 => &[AxisId::Dh1],
            AxisSet::Alpha1Beta1 => &[AxisId::Alpha1, AxisId::Beta1],
            AxisSet::Alpha2Beta1 => &[AxisId::Alpha2, AxisId::Beta1],
            AxisSet::Alpha1Beta1Dh1 => &[AxisId::Alpha1, AxisId::Beta1, AxisId::Dh1],
            AxisSet::Alpha1Beta1Dh2 => &[AxisId::Alpha1, AxisId::Beta1, AxisId::Dh2],
        }
    }

    /// Tensor shape implied by the axis lengths
    pub fn shape(self) -> Vec<usize> {
        self.axes().iter().map(|a| a.len()).collect()
    }

    pub fn dimensions(self) -> usize {
        self.axes().len()
    }
}
