//! Array broadcasting for element-wise likelihood evaluation.
//!
//! Shapes are combined with the usual right-aligned broadcasting rule: the
//! shorter shape is padded with leading 1s, and along every axis the lengths
//! must either match or one of them must be 1. Zero-length axes broadcast
//! like any other length.
use crate::distribution::errors::{LaterError, LaterResult};
use ndarray::{ArrayD, ArrayViewD};

/// Combine two shapes under broadcasting rules.
///
/// # Errors
/// Returns [`LaterError::ShapeMismatch`] when some axis has two different
/// lengths, neither of which is 1.
pub fn broadcast_pair(lhs: &[usize], rhs: &[usize]) -> LaterResult<Vec<usize>> {
    let ndim = lhs.len().max(rhs.len());
    let mut out = Vec::with_capacity(ndim);
    for axis in 0..ndim {
        let a = axis_len(lhs, ndim, axis);
        let b = axis_len(rhs, ndim, axis);
        let len = match (a, b) {
            (a, b) if a == b => a,
            (1, b) => b,
            (a, 1) => a,
            _ => {
                return Err(LaterError::ShapeMismatch { lhs: lhs.to_vec(), rhs: rhs.to_vec() });
            }
        };
        out.push(len);
    }
    Ok(out)
}

/// Combine any number of shapes under broadcasting rules.
///
/// An empty list yields the scalar shape `[]`.
///
/// # Errors
/// Returns [`LaterError::ShapeMismatch`] for the first incompatible pair,
/// reporting the accumulated shape and the shape that failed to join it.
pub fn broadcast_shapes(shapes: &[&[usize]]) -> LaterResult<Vec<usize>> {
    shapes.iter().try_fold(Vec::new(), |acc, shape| broadcast_pair(&acc, shape))
}

/// Broadcast a view to `shape`.
///
/// `shape` is expected to come from [`broadcast_shapes`] over a set that
/// includes `array`; the error branch guards direct callers.
///
/// # Errors
/// Returns [`LaterError::ShapeMismatch`] if `array` cannot be stretched to
/// `shape`.
pub fn broadcast_to<'a>(
    array: &'a ArrayD<f64>, shape: &[usize],
) -> LaterResult<ArrayViewD<'a, f64>> {
    array.broadcast(shape).ok_or_else(|| LaterError::ShapeMismatch {
        lhs: array.shape().to_vec(),
        rhs: shape.to_vec(),
    })
}

#[inline]
fn axis_len(shape: &[usize], ndim: usize, axis: usize) -> usize {
    let offset = ndim - shape.len();
    if axis < offset { 1 } else { shape[axis - offset] }
}
