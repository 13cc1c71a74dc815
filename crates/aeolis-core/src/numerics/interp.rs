//! Piecewise-linear interpolation of one or many series on a shared abscissa.

use faer::{Mat, MatRef};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InterpOptions {
    /// Value returned for queries below the first abscissa. Defaults to the
    /// first ordinate.
    pub left: Option<f64>,
    /// Value returned for queries above the last abscissa. Defaults to the
    /// last ordinate.
    pub right: Option<f64>,
    /// Treat the abscissa as periodic with this period. `left` and `right`
    /// are ignored when set.
    pub period: Option<f64>,
}

impl InterpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_left(mut self, left: f64) -> Self {
        self.left = Some(left);
        self
    }

    pub fn with_right(mut self, right: f64) -> Self {
        self.right = Some(right);
        self
    }

    pub fn with_period(mut self, period: f64) -> Self {
        self.period = Some(period);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InterpolationError {
    #[error("interpolation abscissa must not be empty")]
    EmptyAbscissa,
    #[error("interpolation length mismatch: abscissa={abscissa}, ordinate rows={rows}")]
    LengthMismatch { abscissa: usize, rows: usize },
    #[error("interpolation period must be non-zero")]
    ZeroPeriod,
}

/// Linearly interpolate `fp`, sampled at `xp`, at every query in `x`.
///
/// `xp` is expected to be increasing; this is not checked. Queries outside
/// the abscissa range return `left`/`right` from `options`, or the boundary
/// ordinates when those are unset. NaN queries yield NaN.
pub fn interp(
    x: &[f64],
    xp: &[f64],
    fp: &[f64],
    options: InterpOptions,
) -> Result<Vec<f64>, InterpolationError> {
    if xp.len() != fp.len() {
        return Err(InterpolationError::LengthMismatch {
            abscissa: xp.len(),
            rows: fp.len(),
        });
    }

    let grid = PreparedGrid::new(x, xp, options)?;
    let ordinates = grid.ordinates(|row| fp[row]);
    Ok(grid.evaluate(&ordinates).collect())
}

/// Interpolate every column of `fp` at the queries `x`.
///
/// Column `i` of `fp` is a series sampled at `xp`, so `fp` must have
/// `xp.len()` rows. Row `i` of the result holds series `i` evaluated at each
/// query, giving a `(fp.ncols(), x.len())` matrix.
pub fn interp_array(
    x: &[f64],
    xp: &[f64],
    fp: MatRef<'_, f64>,
    options: InterpOptions,
) -> Result<Mat<f64>, InterpolationError> {
    if xp.len() != fp.nrows() {
        return Err(InterpolationError::LengthMismatch {
            abscissa: xp.len(),
            rows: fp.nrows(),
        });
    }

    let grid = PreparedGrid::new(x, xp, options)?;
    let mut output = Mat::<f64>::zeros(fp.ncols(), x.len());
    for series in 0..fp.ncols() {
        let ordinates = grid.ordinates(|row| fp[(row, series)]);
        for (query, value) in grid.evaluate(&ordinates).enumerate() {
            output[(series, query)] = value;
        }
    }

    Ok(output)
}

/// Abscissa and queries after period folding, shared by every series.
struct PreparedGrid {
    abscissa: Vec<f64>,
    // Source row feeding each abscissa entry.
    rows: Vec<usize>,
    queries: Vec<f64>,
    left: Option<f64>,
    right: Option<f64>,
}

impl PreparedGrid {
    fn new(x: &[f64], xp: &[f64], options: InterpOptions) -> Result<Self, InterpolationError> {
        if xp.is_empty() {
            return Err(InterpolationError::EmptyAbscissa);
        }

        let Some(period) = options.period else {
            return Ok(Self {
                abscissa: xp.to_vec(),
                rows: (0..xp.len()).collect(),
                queries: x.to_vec(),
                left: options.left,
                right: options.right,
            });
        };

        if period == 0.0 {
            return Err(InterpolationError::ZeroPeriod);
        }
        let period = period.abs();

        let folded: Vec<f64> = xp.iter().map(|value| value.rem_euclid(period)).collect();
        let mut order: Vec<usize> = (0..folded.len()).collect();
        order.sort_by(|lhs, rhs| folded[*lhs].total_cmp(&folded[*rhs]));

        let first = order[0];
        let last = order[order.len() - 1];

        // One wrapped sample on each side closes the cycle.
        let mut rows = Vec::with_capacity(order.len() + 2);
        rows.push(last);
        rows.extend_from_slice(&order);
        rows.push(first);

        let mut abscissa = Vec::with_capacity(rows.len());
        abscissa.push(folded[last] - period);
        abscissa.extend(order.iter().map(|&row| folded[row]));
        abscissa.push(folded[first] + period);

        Ok(Self {
            abscissa,
            rows,
            queries: x.iter().map(|value| value.rem_euclid(period)).collect(),
            left: None,
            right: None,
        })
    }

    fn ordinates(&self, sample: impl Fn(usize) -> f64) -> Vec<f64> {
        self.rows.iter().map(|&row| sample(row)).collect()
    }

    fn evaluate<'a>(&'a self, ordinates: &'a [f64]) -> impl Iterator<Item = f64> + 'a {
        let left = self.left.unwrap_or(ordinates[0]);
        let right = self.right.unwrap_or(ordinates[ordinates.len() - 1]);
        self.queries
            .iter()
            .map(move |&query| interpolate_point(query, &self.abscissa, ordinates, left, right))
    }
}

fn interpolate_point(query: f64, xp: &[f64], fp: &[f64], left: f64, right: f64) -> f64 {
    if query.is_nan() {
        return f64::NAN;
    }

    let last = xp.len() - 1;
    if query < xp[0] {
        return left;
    }
    if query > xp[last] {
        return right;
    }

    let upper = xp.partition_point(|&value| value <= query).max(1);
    if upper > last {
        return fp[last];
    }

    let lower = upper - 1;
    let x0 = xp[lower];
    if query == x0 {
        return fp[lower];
    }

    let slope = (fp[upper] - fp[lower]) / (xp[upper] - x0);
    let value = fp[lower] + slope * (query - x0);
    if !value.is_nan() {
        return value;
    }

    // Infinite ordinates: anchoring on the upper sample avoids `inf - inf`.
    let value = fp[upper] + slope * (query - xp[upper]);
    if value.is_nan() && fp[lower] == fp[upper] {
        return fp[lower];
    }
    value
}
