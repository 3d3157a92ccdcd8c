//! Caller-owned float storage for matrix upload.
//!
//! `FloatBuffer` keeps a write cursor and a read limit the way GPU staging
//! buffers usually do: `clear` rewinds for writing, `put` appends, `flip`
//! turns what was written into the readable region. `MatrixSink` applies the
//! same clear/fill discipline to any destination a matrix can be written to.

use crate::numerics::error::{NumericsError, Result};
use crate::numerics::types::matrix::Matrix4x4;
use crate::numerics::types::traits::FloatingPoint;

/// Number of floats in one exported matrix.
pub const MATRIX_FLOATS: usize = 16;

/// Fixed-capacity float storage with a write position and a read limit.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatBuffer<T: FloatingPoint = f32> {
    /// Backing storage, always `capacity` long
    data: Vec<T>,
    /// Next slot to write (while filling) or read (after `flip`)
    position: usize,
    /// End of the writable or readable region
    limit: usize,
}

impl<T: FloatingPoint> FloatBuffer<T> {
    /// Create a zero-filled buffer ready for writing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![T::zero(); capacity],
            position: 0,
            limit: capacity,
        }
    }

    /// A buffer sized for exactly one matrix.
    pub fn for_matrix() -> Self {
        Self::with_capacity(MATRIX_FLOATS)
    }

    /// Rewind for writing. Existing contents become garbage.
    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.data.len();
    }

    /// Append one value at the current position.
    pub fn put(&mut self, value: T) -> Result<()> {
        if self.position >= self.limit {
            return Err(NumericsError::BufferOverflow {
                required: self.position + 1,
                available: self.limit,
            });
        }
        self.data[self.position] = value;
        self.position += 1;
        Ok(())
    }

    /// Append a run of values; nothing is written if they do not all fit.
    pub fn put_slice(&mut self, values: &[T]) -> Result<()> {
        if values.len() > self.remaining() {
            return Err(NumericsError::BufferOverflow {
                required: self.position + values.len(),
                available: self.limit,
            });
        }
        let end = self.position + values.len();
        self.data[self.position..end].copy_from_slice(values);
        self.position = end;
        Ok(())
    }

    /// Make the written region readable from the start.
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
    }

    /// Read the next value, advancing the position.
    pub fn get(&mut self) -> Option<T> {
        if self.position >= self.limit {
            return None;
        }
        let value = self.data[self.position];
        self.position += 1;
        Some(value)
    }

    /// The region between position and limit.
    pub fn as_slice(&self) -> &[T] {
        &self.data[self.position..self.limit]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }
}

/// Destination for a matrix's sixteen column-major floats.
///
/// After a successful write the sink's readable contents are exactly those
/// sixteen values; whatever it held before is discarded.
pub trait MatrixSink<T: FloatingPoint> {
    fn write_matrix(&mut self, values: &[T; MATRIX_FLOATS]) -> Result<()>;
}

impl<T: FloatingPoint> MatrixSink<T> for FloatBuffer<T> {
    fn write_matrix(&mut self, values: &[T; MATRIX_FLOATS]) -> Result<()> {
        if self.capacity() < MATRIX_FLOATS {
            return Err(NumericsError::BufferOverflow {
                required: MATRIX_FLOATS,
                available: self.capacity(),
            });
        }
        self.clear();
        self.put_slice(values)?;
        self.flip();
        Ok(())
    }
}

impl<T: FloatingPoint> MatrixSink<T> for Vec<T> {
    fn write_matrix(&mut self, values: &[T; MATRIX_FLOATS]) -> Result<()> {
        self.clear();
        self.extend_from_slice(values);
        Ok(())
    }
}

/// Slices keep their length; the matrix occupies the first sixteen slots.
impl<T: FloatingPoint> MatrixSink<T> for [T] {
    fn write_matrix(&mut self, values: &[T; MATRIX_FLOATS]) -> Result<()> {
        if self.len() < MATRIX_FLOATS {
            return Err(NumericsError::BufferOverflow {
                required: MATRIX_FLOATS,
                available: self.len(),
            });
        }
        self[..MATRIX_FLOATS].copy_from_slice(values);
        Ok(())
    }
}

impl<T: FloatingPoint> Matrix4x4<T> {
    /// Write the column-major cells into caller-owned storage.
    ///
    /// For a `FloatBuffer` this clears, fills and flips, leaving the buffer
    /// positioned to read the sixteen values from the start.
    pub fn write_into<S>(&self, sink: &mut S) -> Result<()>
    where
        S: MatrixSink<T> + ?Sized,
    {
        sink.write_matrix(&self.to_cols_array())
    }
}
