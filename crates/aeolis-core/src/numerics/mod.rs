pub mod interp;
pub mod normalize;

pub use interp::{InterpOptions, InterpolationError, interp, interp_array};
pub use normalize::{NormalizeError, NormalizeOptions, normalize};

fn kahan_add(sum: &mut f64, correction: &mut f64, value: f64) {
    let corrected = value - *correction;
    let next = *sum + corrected;
    *correction = (next - *sum) - corrected;
    *sum = next;
}

/// Compensated sum, robust against mixing large and small magnitudes.
pub fn stable_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut correction = 0.0;

    for value in values {
        kahan_add(&mut sum, &mut correction, value);
    }

    sum
}
