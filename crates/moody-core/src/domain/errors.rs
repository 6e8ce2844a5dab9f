use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MoodyResult<T> = Result<T, MoodyError>;
pub type ParserResult<T> = MoodyResult<T>;

/// Fatal error classes. Consistency findings are not errors; they are
/// warnings produced by `worksheet::checks` and never abort a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodyErrorCategory {
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl MoodyErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
            Self::InternalError => "InternalError",
        }
    }
}

/// Error with a stable placeholder code, suitable for both operator
/// diagnostics and exit-code mapping at the CLI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodyError {
    category: MoodyErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl MoodyError {
    pub fn new(
        category: MoodyErrorCategory,
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
            MoodyErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(MoodyErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(MoodyErrorCategory::ComputationError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(MoodyErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> MoodyErrorCategory {
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

impl Display for MoodyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.label(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for MoodyError {}

#[cfg(test)]
mod tests {
    use super::{MoodyError, MoodyErrorCategory};

    #[test]
    fn exit_code_mapping_is_stable() {
        let cases = [
            (MoodyErrorCategory::InputValidationError, 2),
            (MoodyErrorCategory::IoSystemError, 3),
            (MoodyErrorCategory::ComputationError, 4),
            (MoodyErrorCategory::InternalError, 5),
        ];

        for (category, exit_code) in cases {
            assert_eq!(category.exit_code(), exit_code);
        }
    }

    #[test]
    fn fatal_error_renders_diagnostic_lines() {
        let error = MoodyError::input_validation(
            "INPUT.CONFIG_PARSE",
            "unable to parse line 3 of data file Config.txt",
        );

        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.CONFIG_PARSE] unable to parse line 3 of data file Config.txt"
        );
        assert_eq!(error.fatal_exit_line(), "FATAL EXIT CODE: 2");
    }
}
