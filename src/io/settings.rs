use derive_builder::Builder;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Text output formatting for vectors and matrices.
///
/// The defaults write the values of a row separated by single spaces, with
/// one row per line for matrices.  Setting `trailing_separator` reproduces
/// the classic `"1 2 3 "` layout in which every value is followed by a
/// separator.
///
/// Separators must be non-empty and consist only of whitespace so that
/// anything written can be read back as tokens.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct PrintSettings {
    ///separator written between values within a row
    #[builder(default = r#"" ".to_string()"#)]
    pub separator: String,

    ///also write a separator after the last value of each row
    #[builder(default = "false")]
    pub trailing_separator: bool,

    ///terminator written after each matrix row
    #[builder(default = r#""\n".to_string()"#)]
    pub row_terminator: String,
}

impl Default for PrintSettings {
    fn default() -> PrintSettings {
        PrintSettingsBuilder::default().build().unwrap()
    }
}

impl PrintSettings {
    /// Checks that the settings are valid.  Useful when fields have been
    /// modified directly rather than through the builder.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_whitespace("separator", &self.separator)?;
        validate_whitespace("row_terminator", &self.row_terminator)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for PrintSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        PrintSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl PrintSettingsBuilder {
    /// check that the separators are usable as token delimiters
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref separator) = self.separator {
            validate_whitespace("separator", separator)?;
        }
        if let Some(ref row_terminator) = self.row_terminator {
            validate_whitespace("row_terminator", row_terminator)?;
        }
        Ok(())
    }
}

fn validate_whitespace(field: &'static str, value: &str) -> Result<(), SettingsError> {
    if value.is_empty() || !value.chars().all(char::is_whitespace) {
        return Err(SettingsError::BadFieldValue(field));
    }
    Ok(())
}
