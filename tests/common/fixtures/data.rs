use f16_aero::tables::{AxisId, TableId};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tempfile::TempDir;

pub fn axis_samples(id: AxisId) -> Vec<f64> {
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

fn catalogue_index(id: TableId) -> usize {
    TableId::iter().position(|t| t == id).unwrap()
}

/// Small, table specific affine data: every table is
/// `0.01 * (k + 1) * (1 + 0.01 alpha + 0.001 beta + 0.002 el)` over its own
/// axes, with `k` the catalogue position.
pub fn synthetic_value(id: TableId, alpha: f64, beta: f64, el: f64) -> f64 {
    let scale = 0.01 * (catalogue_index(id) + 1) as f64;
    let v = id.axis_set().axes().iter().fold(1.0, |v, axis| {
        v + match axis {
            AxisId::Alpha1 | AxisId::Alpha2 => 0.01 * alpha,
            AxisId::Beta1 => 0.001 * beta,
            AxisId::Dh1 | AxisId::Dh2 => 0.002 * el,
        }
    });
    scale * v
}

fn table_values(id: TableId) -> Vec<f64> {
    let axes = id.axis_set().axes();
    let shape = id.shape();
    let count: usize = shape.iter().product();

    (0..count)
        .map(|flat| {
            // Axis 0 varies fastest
            let mut rest = flat;
            let mut point = [0.0; 3];
            for (&axis, &n) in axes.iter().zip(&shape) {
                let x = axis_samples(axis)[rest % n];
                rest /= n;
                match axis {
                    AxisId::Alpha1 | AxisId::Alpha2 => point[0] = x,
                    AxisId::Beta1 => point[1] = x,
                    AxisId::Dh1 | AxisId::Dh2 => point[2] = x,
                }
            }
            synthetic_value(id, point[0], point[1], point[2])
        })
        .collect()
}

fn write_values(path: &Path, values: &[f64]) {
    let text: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    fs::write(path, text.join("\n")).unwrap();
}

/// A temporary directory holding a complete synthetic data set
pub struct SyntheticData {
    dir: TempDir,
}

impl SyntheticData {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        for id in AxisId::iter() {
            write_values(&dir.path().join(id.file_name()), &axis_samples(id));
        }
        for id in TableId::iter() {
            write_values(&dir.path().join(id.file_name()), &table_values(id));
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn remove(&self, id: TableId) {
        fs::remove_file(self.path().join(id.file_name())).unwrap();
    }

    pub fn truncate(&self, id: TableId, keep: usize) {
        let mut values = table_values(id);
        values.truncate(keep);
        write_values(&self.path().join(id.file_name()), &values);
    }

    pub fn overwrite_axis(&self, id: AxisId, values: &[f64]) {
        write_values(&self.path().join(id.file_name()), values);
    }
}
