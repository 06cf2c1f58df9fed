use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    #[error("Shape {shape:?} holds {expected} samples but {actual} were given")]
    LengthMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },
    #[error("Shape {0:?} has a zero-length axis")]
    EmptyAxis(Vec<usize>),
}

/// Sample values on an N-dimensional grid, stored flat.
///
/// Indexing law: the coordinate `idx` lives at
/// `sum_i idx[i] * P_i` with `P_i = shape[0] * ... * shape[i - 1]`.
/// Axis 0 varies fastest. Data files are laid out in this order, so the law
/// is part of the on-disk format.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl Tensor {
    /// Zero-filled tensor of the given shape
    pub fn zeros(shape: &[usize]) -> Result<Self, TensorError> {
        Self::check_shape(shape)?;
        let len = shape.iter().product();
        Ok(Self {
            shape: shape.to_vec(),
            data: vec![0.0; len],
        })
    }

    pub fn from_vec(shape: &[usize], data: Vec<f64>) -> Result<Self, TensorError> {
        Self::check_shape(shape)?;
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(TensorError::LengthMismatch {
                shape: shape.to_vec(),
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            shape: shape.to_vec(),
            data,
        })
    }

    fn check_shape(shape: &[usize]) -> Result<(), TensorError> {
        if shape.iter().any(|&n| n == 0) {
            return Err(TensorError::EmptyAxis(shape.to_vec()));
        }
        Ok(())
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn dimensions(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Flat position of `index`. Callers guarantee every component is in range.
    pub fn linear_index(&self, index: &[usize]) -> usize {
        debug_assert_eq!(index.len(), self.shape.len());
        let mut stride = 1;
        let mut linear = 0;
        for (&i, &n) in index.iter().zip(&self.shape) {
            debug_assert!(i < n);
            linear += i * stride;
            stride *= n;
        }
        linear
    }

    #[inline]
    pub fn get(&self, index: &[usize]) -> f64 {
        self.data[self.linear_index(index)]
    }
}
