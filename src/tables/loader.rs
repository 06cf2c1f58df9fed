use super::axis::{Axis, AxisId};
use super::catalogue::TableId;
use super::tensor::Tensor;
use super::TableError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Resolve `file_name` against the data directory. An empty directory means
/// the current one.
fn data_path(dir: &Path, file_name: &str) -> PathBuf {
    if dir.as_os_str().is_empty() {
        PathBuf::from(file_name)
    } else {
        dir.join(file_name)
    }
}

/// Read the first `count` whitespace-separated numbers of a sample file.
/// Trailing values beyond `count` are ignored.
fn read_samples(path: &Path, count: usize) -> Result<Vec<f64>, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;

    let mut samples = Vec::with_capacity(count);
    for token in text.split_whitespace().take(count) {
        let value = token
            .parse::<f64>()
            .map_err(|e| format!("{}: bad sample '{}': {}", path.display(), token, e))?;
        samples.push(value);
    }

    if samples.len() < count {
        return Err(format!(
            "{}: expected {} samples, found {}",
            path.display(),
            count,
            samples.len()
        ));
    }
    Ok(samples)
}

pub fn load_axis(dir: &Path, id: AxisId) -> Result<Axis, TableError> {
    let path = data_path(dir, &id.file_name());
    let fail = |reason: String| {
        error!("failed to load axis {}: {}", id, reason);
        TableError::LoadFailure {
            name: id.to_string(),
            reason,
        }
    };

    let samples = read_samples(&path, id.len()).map_err(fail)?;
    let axis = Axis::new(samples).map_err(|e| fail(e.to_string()))?;
    info!("load {} successfully", path.display());
    Ok(axis)
}

pub fn load_table(dir: &Path, id: TableId) -> Result<Tensor, TableError> {
    let path = data_path(dir, id.file_name());
    debug!("loading table {} from {}", id, path.display());
    let fail = |reason: String| {
        error!("failed to load table {}: {}", id, reason);
        TableError::LoadFailure {
            name: id.to_string(),
            reason,
        }
    };

    let shape = id.shape();
    let count = shape.iter().product();
    let samples = read_samples(&path, count).map_err(fail)?;
    let tensor = Tensor::from_vec(&shape, samples).map_err(|e| fail(e.to_string()))?;
    info!("load {} successfully", path.display());
    Ok(tensor)
}
