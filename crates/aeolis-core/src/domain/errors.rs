use crate::numerics::{InterpolationError, NormalizeError};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AeolisErrorCategory {
    InputValidationError,
    IoSystemError,
    InternalError,
}

impl AeolisErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::InternalError => "InternalError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AeolisError {
    category: AeolisErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl AeolisError {
    pub fn new(
        category: AeolisErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            AeolisErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AeolisErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AeolisErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> AeolisErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}

impl Display for AeolisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.as_str(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for AeolisError {}

// Shape problems come from caller data, so they are input errors rather than
// computation failures.
impl From<InterpolationError> for AeolisError {
    fn from(error: InterpolationError) -> Self {
        let placeholder = match error {
            InterpolationError::EmptyAbscissa => "INPUT.INTERP_EMPTY_ABSCISSA",
            InterpolationError::LengthMismatch { .. } => "INPUT.INTERP_LENGTH_MISMATCH",
            InterpolationError::ZeroPeriod => "INPUT.INTERP_ZERO_PERIOD",
        };
        Self::input_validation(placeholder, error.to_string())
    }
}

impl From<NormalizeError> for AeolisError {
    fn from(error: NormalizeError) -> Self {
        let placeholder = match error {
            NormalizeError::AxisOutOfBounds { .. } => "INPUT.NORMALIZE_AXIS",
            NormalizeError::IncompatibleReference { .. } => "INPUT.NORMALIZE_REFERENCE",
        };
        Self::input_validation(placeholder, error.to_string())
    }
}
