//! Safe normalisation of arrays along one axis.

use super::stable_sum;
use ndarray::{Array, ArrayBase, ArrayViewD, Axis, Data, Dimension, Zip};

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOptions<'a> {
    /// Divisor for every element. When absent, the sum of `x` along `axis` is
    /// used.
    pub reference: Option<ArrayViewD<'a, f64>>,
    /// Negative values count back from the last axis.
    pub axis: isize,
    /// Output wherever the reference is exactly zero.
    pub fill: f64,
}

impl Default for NormalizeOptions<'_> {
    fn default() -> Self {
        Self {
            reference: None,
            axis: 0,
            fill: 0.0,
        }
    }
}

impl<'a> NormalizeOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference(mut self, reference: ArrayViewD<'a, f64>) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_axis(mut self, axis: isize) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_fill(mut self, fill: f64) -> Self {
        self.fill = fill;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("normalization axis {axis} is out of bounds for an array with {ndim} dimensions")]
    AxisOutOfBounds { axis: isize, ndim: usize },
    #[error("normalization reference of shape {reference:?} cannot broadcast to {target:?}")]
    IncompatibleReference {
        reference: Vec<usize>,
        target: Vec<usize>,
    },
}

/// Scale `x` so that it sums to one along `options.axis`.
///
/// Every element is divided by the matching element of the reference, which
/// is either `options.reference` broadcast to the shape of `x` or the axis sum
/// of `x` stretched back over that axis. Elements whose reference is exactly
/// zero are set to `options.fill` instead, so an all-zero slice never
/// produces NaN or infinity.
pub fn normalize<S, D>(
    x: &ArrayBase<S, D>,
    options: NormalizeOptions<'_>,
) -> Result<Array<f64, D>, NormalizeError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let axis = resolve_axis(options.axis, x.ndim())?;

    let totals;
    let reference = match &options.reference {
        Some(reference) => reference.view(),
        None => {
            totals = x
                .view()
                .into_dyn()
                .map_axis(axis, |lane| stable_sum(lane.iter().copied()))
                .insert_axis(axis);
            totals.view()
        }
    };

    let broadcast = reference.broadcast(x.raw_dim()).ok_or_else(|| {
        NormalizeError::IncompatibleReference {
            reference: reference.shape().to_vec(),
            target: x.shape().to_vec(),
        }
    })?;

    let mut output = Array::from_elem(x.raw_dim(), options.fill);
    Zip::from(&mut output)
        .and(x)
        .and(&broadcast)
        .for_each(|out, &value, &divisor| {
            if divisor != 0.0 {
                *out = value / divisor;
            }
        });

    Ok(output)
}

fn resolve_axis(axis: isize, ndim: usize) -> Result<Axis, NormalizeError> {
    let resolved = if axis < 0 {
        ndim.checked_sub(axis.unsigned_abs())
    } else {
        Some(axis.unsigned_abs())
    };

    resolved
        .filter(|&index| index < ndim)
        .map(Axis)
        .ok_or(NormalizeError::AxisOutOfBounds { axis, ndim })
}
