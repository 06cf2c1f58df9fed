use super::axis::{Axis, AxisId};
use super::catalogue::TableId;
use super::loader::{load_axis, load_table};
use super::tensor::Tensor;
use super::TableError;
use crate::interpolation::{interpolate, InterpolationError};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use strum::{EnumCount, IntoEnumIterator};
use tracing::info;

/// A table together with the axes it is sampled on
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    pub id: TableId,
    pub tensor: &'a Tensor,
    pub axes: Vec<&'a Axis>,
}

impl TableView<'_> {
    pub fn interpolate(&self, target: &[f64]) -> Result<f64, InterpolationError> {
        interpolate(&self.axes, self.tensor, target)
    }
}

/// Every catalogue table and axis, loaded once and read-only afterwards.
///
/// A registry can only be constructed complete and consistent, so holding
/// one means interpolation may proceed.
#[derive(Debug, Clone)]
pub struct TableRegistry {
    axes: Vec<Axis>,
    tables: Vec<Tensor>,
}

impl TableRegistry {
    /// Load all axes and tables from `dir`.
    pub fn load(dir: &Path) -> Result<Self, TableError> {
        info!("loading aerodynamic data from '{}'", dir.display());

        let axes = AxisId::iter()
            .map(|id| load_axis(dir, id))
            .collect::<Result<Vec<_>, _>>()?;

        // Gather every outcome in catalogue order before picking the first
        // failure; a parallel collect into Result keeps whichever error
        // finished first.
        let ids: Vec<TableId> = TableId::iter().collect();
        let tables = ids
            .par_iter()
            .map(|&id| load_table(dir, id))
            .collect::<Vec<Result<_, _>>>()
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "loaded {} axes and {} tables",
            AxisId::COUNT,
            TableId::COUNT
        );
        Ok(Self { axes, tables })
    }

    /// Assemble a registry from data already in memory. Every catalogue
    /// entry must be present with the shape its axes dictate.
    pub fn from_parts(
        mut axes: HashMap<AxisId, Axis>,
        mut tables: HashMap<TableId, Tensor>,
    ) -> Result<Self, TableError> {
        let axes = AxisId::iter()
            .map(|id| {
                let axis = axes.remove(&id).ok_or_else(|| TableError::LoadFailure {
                    name: id.to_string(),
                    reason: "axis missing".to_string(),
                })?;
                if axis.len() != id.len() {
                    return Err(TableError::ShapeMismatch {
                        name: id.to_string(),
                        expected: vec![id.len()],
                        actual: vec![axis.len()],
                    });
                }
                Ok(axis)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let tables = TableId::iter()
            .map(|id| {
                let tensor = tables.remove(&id).ok_or_else(|| TableError::LoadFailure {
                    name: id.to_string(),
                    reason: "table missing".to_string(),
                })?;
                let expected = id.shape();
                if tensor.shape() != expected.as_slice() {
                    return Err(TableError::ShapeMismatch {
                        name: id.to_string(),
                        expected,
                        actual: tensor.shape().to_vec(),
                    });
                }
                Ok(tensor)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { axes, tables })
    }

    #[inline]
    pub fn axis(&self, id: AxisId) -> &Axis {
        &self.axes[id.slot()]
    }

    #[inline]
    pub fn tensor(&self, id: TableId) -> &Tensor {
        &self.tables[id.slot()]
    }

    pub fn table(&self, id: TableId) -> TableView<'_> {
        TableView {
            id,
            tensor: self.tensor(id),
            axes: id
                .axis_set()
                .axes()
                .iter()
                .map(|&axis| self.axis(axis))
                .collect(),
        }
    }

    /// Look a table up by its catalogue name, e.g. `"CX0120"`
    pub fn lookup(&self, name: &str) -> Result<TableView<'_>, TableError> {
        let id = TableId::from_str(name).map_err(|_| TableError::UnknownTable(name.to_string()))?;
        Ok(self.table(id))
    }

    pub fn interpolate(&self, id: TableId, target: &[f64]) -> Result<f64, InterpolationError> {
        self.table(id).interpolate(target)
    }
}
