use super::CliError;
use aeolis_core::domain::AeolisError;
use anyhow::Context;
use faer::Mat;
use ndarray::{ArrayD, IxDyn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

const STDIO_PATH: &str = "-";

#[derive(Debug, Deserialize)]
pub(super) struct InterpRequest {
    pub(super) x: Vec<f64>,
    pub(super) xp: Vec<f64>,
    /// Row `r` holds every series sampled at `xp[r]`.
    pub(super) fp: Vec<Vec<f64>>,
    #[serde(default)]
    pub(super) left: Option<f64>,
    #[serde(default)]
    pub(super) right: Option<f64>,
    #[serde(default)]
    pub(super) period: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct InterpResponse {
    pub(super) series: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct NormalizeRequest {
    #[serde(flatten)]
    pub(super) values: ShapedArray,
    #[serde(default)]
    pub(super) reference: Option<ShapedArray>,
}

/// Row-major array payload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(super) struct ShapedArray {
    pub(super) shape: Vec<usize>,
    pub(super) data: Vec<f64>,
}

impl ShapedArray {
    pub(super) fn into_array(self, label: &str) -> Result<ArrayD<f64>, CliError> {
        let actual = self.data.len();
        let Some(expected) = self
            .shape
            .iter()
            .try_fold(1_usize, |count, &extent| count.checked_mul(extent))
        else {
            return Err(CliError::Compute(AeolisError::input_validation(
                "INPUT.CLI_SHAPE",
                format!("{label} shape {:?} has too many elements", self.shape),
            )));
        };

        ArrayD::from_shape_vec(IxDyn(&self.shape), self.data).map_err(|_| {
            CliError::Compute(AeolisError::input_validation(
                "INPUT.CLI_SHAPE",
                format!("{label} shape expects {expected} values, got {actual}"),
            ))
        })
    }

    pub(super) fn from_array(array: &ArrayD<f64>) -> Self {
        Self {
            shape: array.shape().to_vec(),
            data: array.iter().copied().collect(),
        }
    }
}

pub(super) fn matrix_from_rows(rows: &[Vec<f64>]) -> Result<Mat<f64>, CliError> {
    let width = rows.first().map_or(0, Vec::len);
    if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(CliError::Compute(AeolisError::input_validation(
            "INPUT.CLI_RAGGED_ROWS",
            format!(
                "fp row {index} has {} values, expected {width} like row 0",
                row.len()
            ),
        )));
    }

    Ok(Mat::from_fn(rows.len(), width, |row, col| rows[row][col]))
}

pub(super) fn matrix_rows(matrix: &Mat<f64>) -> Vec<Vec<f64>> {
    (0..matrix.nrows())
        .map(|row| (0..matrix.ncols()).map(|col| matrix[(row, col)]).collect())
        .collect()
}

pub(super) fn read_request<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let source = if path == Path::new(STDIO_PATH) {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read request from stdin")?;
        source
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read request '{}'", path.display()))?
    };

    serde_json::from_str(&source).map_err(|error| {
        CliError::Compute(AeolisError::input_validation(
            "INPUT.CLI_REQUEST",
            format!("failed to parse request '{}': {error}", path.display()),
        ))
    })
}

pub(super) fn write_response<T: Serialize>(
    output: Option<&PathBuf>,
    response: &T,
) -> Result<(), CliError> {
    let rendered = render_response(response)?;

    match output {
        Some(path) if path.as_path() != Path::new(STDIO_PATH) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory '{}'", parent.display())
                })?;
            }
            fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("failed to write response '{}'", path.display()))?;
        }
        _ => println!("{rendered}"),
    }

    Ok(())
}

fn render_response<T: Serialize>(response: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(response).map_err(|error| {
        CliError::Compute(AeolisError::internal(
            "INTERNAL.CLI_RESPONSE",
            format!("failed to serialize response: {error}"),
        ))
    })
}
