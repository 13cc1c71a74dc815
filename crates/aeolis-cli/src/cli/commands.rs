use super::CliError;
use super::helpers::{
    InterpRequest, InterpResponse, NormalizeRequest, ShapedArray, matrix_from_rows, matrix_rows,
    read_request, write_response,
};
use aeolis_core::domain::AeolisError;
use aeolis_core::{InterpOptions, NormalizeOptions, interp_array, normalize};
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct InterpArgs {
    /// JSON request with `x`, `xp`, `fp` and optional `left`, `right`, `period` ("-" for stdin)
    #[arg(long)]
    input: PathBuf,

    /// JSON response path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct NormalizeArgs {
    /// JSON request with `shape`, `data` and optional `reference` ("-" for stdin)
    #[arg(long)]
    input: PathBuf,

    /// JSON response path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Axis whose slices are scaled to sum to one (negative counts from the end)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    axis: isize,

    /// Value written wherever the reference is zero
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    fill: f64,
}

pub(super) fn run_interp_command(args: InterpArgs) -> Result<i32, CliError> {
    let request: InterpRequest = read_request(&args.input)?;
    let fp = matrix_from_rows(&request.fp)?;
    let options = InterpOptions {
        left: request.left,
        right: request.right,
        period: request.period,
    };

    tracing::debug!(
        queries = request.x.len(),
        samples = request.xp.len(),
        series = fp.ncols(),
        periodic = options.period.is_some(),
        "interpolating series"
    );

    let result = interp_array(&request.x, &request.xp, fp.as_ref(), options)
        .map_err(AeolisError::from)?;
    let response = InterpResponse {
        series: matrix_rows(&result),
    };
    write_response(args.output.as_ref(), &response)?;

    tracing::info!(series = result.nrows(), queries = result.ncols(), "interpolation complete");
    Ok(0)
}

pub(super) fn run_normalize_command(args: NormalizeArgs) -> Result<i32, CliError> {
    let request: NormalizeRequest = read_request(&args.input)?;
    let values = request.values.into_array("values")?;
    let reference = request
        .reference
        .map(|reference| reference.into_array("reference"))
        .transpose()?;

    tracing::debug!(
        shape = ?values.shape(),
        axis = args.axis,
        fill = args.fill,
        explicit_reference = reference.is_some(),
        "normalizing array"
    );

    let mut options = NormalizeOptions::new()
        .with_axis(args.axis)
        .with_fill(args.fill);
    if let Some(reference) = reference.as_ref() {
        options = options.with_reference(reference.view());
    }

    let result = normalize(&values, options).map_err(AeolisError::from)?;
    write_response(args.output.as_ref(), &ShapedArray::from_array(&result))?;

    tracing::info!(elements = result.len(), "normalization complete");
    Ok(0)
}
