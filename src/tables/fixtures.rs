//! Synthetic table data for unit tests.
//!
//! The axes carry the real sample points; every table is affine in its
//! inputs so interpolated values can be computed by hand.

use super::{Axis, AxisId, TableId, TableRegistry, Tensor};
use std::collections::HashMap;
use strum::IntoEnumIterator;

pub fn samples(id: AxisId) -> Vec<f64> {
    match id {
        AxisId::Alpha1 => vec![
            -20.0, -15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0,
            50.0, 55.0, 60.0, 70.0, 80.0, 90.0,
        ],
        AxisId::Alpha2 => (0..14).map(|i| -20.0 + 5.0 * i as f64).collect(),
        AxisId::Beta1 => vec![
            -30.0, -25.0, -20.0, -15.0, -10.0, -8.0, -6.0, -4.0, -2.0, 0.0, 2.0, 4.0, 6.0, 8.0,
            10.0, 15.0, 20.0, 25.0, 30.0,
        ],
        AxisId::Dh1 => vec![-25.0, -10.0, 0.0, 10.0, 25.0],
        AxisId::Dh2 => vec![-25.0, 0.0, 25.0],
    }
}

fn slope(axis: AxisId) -> f64 {
    match axis {
        AxisId::Alpha1 | AxisId::Alpha2 => 0.01,
        AxisId::Beta1 => 0.001,
        AxisId::Dh1 | AxisId::Dh2 => 0.002,
    }
}

/// `k * (1 + 0.01 alpha + 0.001 beta + 0.002 el)` over the table's own axes,
/// with `k` the catalogue position plus one
pub fn affine_value(id: TableId, alpha: f64, beta: f64, el: f64) -> f64 {
    let k = (id.slot() + 1) as f64;
    let v = id.axis_set().axes().iter().fold(1.0, |v, &axis| {
        let x = match axis {
            AxisId::Alpha1 | AxisId::Alpha2 => alpha,
            AxisId::Beta1 => beta,
            AxisId::Dh1 | AxisId::Dh2 => el,
        };
        v + slope(axis) * x
    });
    k * v
}

/// Registry of affine tables. `poison` fills one table with NaN.
pub fn affine_registry(poison: Option<TableId>) -> TableRegistry {
    let axes: HashMap<_, _> = AxisId::iter()
        .map(|id| (id, Axis::new(samples(id)).unwrap()))
        .collect();
    let tables = TableId::iter()
        .map(|id| {
            let k = (id.slot() + 1) as f64;
            let set = id.axis_set().axes();
            let shape = id.shape();
            let mut tensor = Tensor::zeros(&shape).unwrap();
            for (flat, value) in tensor.as_mut_slice().iter_mut().enumerate() {
                let mut rest = flat;
                let mut v = 1.0;
                for (&axis, &n) in set.iter().zip(&shape) {
                    v += slope(axis) * samples(axis)[rest % n];
                    rest /= n;
                }
                *value = if Some(id) == poison { f64::NAN } else { k * v };
            }
            (id, tensor)
        })
        .collect();
    TableRegistry::from_parts(axes, tables).unwrap()
}
