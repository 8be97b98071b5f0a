//! Generator configuration and its named-parameter parsing.

use crate::error::RustyLetterError;
use crate::generator::options::OptionsError::InvalidParameter;
use thiserror::Error;

/// Template used until the user provides one.
pub const DEFAULT_TEMPLATE: &str =
    "Dear [NAME],\n\nI am writing to express my interest in the position at [COMPANY]...";

#[derive(Error, Debug)]
pub enum OptionsError {
    /// Invalid parameter provided to the generator
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },
}

/// Settings of a [`crate::LetterGenerator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Leading part of suggested export file names
    pub file_prefix: String,
    /// Joins the prefix and the row values in export file names
    pub separator: String,
    /// Export file extension, without the dot
    pub extension: String,
    /// Initial template text
    pub template: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            file_prefix: "cover-letter".to_owned(),
            separator: "-".to_owned(),
            extension: "txt".to_owned(),
            template: DEFAULT_TEMPLATE.to_owned(),
        }
    }
}

/// A named generator setting that can be supplied as text.
pub trait NamedParam<T> {
    /// Returns the parameter name
    fn name() -> &'static str;

    /// Parses and validates the textual value
    fn parse(value: &str) -> Result<T, OptionsError>;
}

/// File prefix parameter handler
struct FilePrefixParam;

/// Separator parameter handler
struct SeparatorParam;

/// Extension parameter handler
struct ExtensionParam;

/// Template parameter handler
struct TemplateParam;

impl NamedParam<String> for FilePrefixParam {
    fn name() -> &'static str {
        "file_prefix"
    }

    fn parse(value: &str) -> Result<String, OptionsError> {
        Ok(value.trim().to_owned())
    }
}

impl NamedParam<String> for SeparatorParam {
    fn name() -> &'static str {
        "separator"
    }

    fn parse(value: &str) -> Result<String, OptionsError> {
        if value.contains(['/', '\\']) {
            Err(InvalidParameter {
                name: Self::name().to_string(),
                message: format!("'{value}' contains a path separator"),
            })
        } else {
            Ok(value.to_owned())
        }
    }
}

impl NamedParam<String> for ExtensionParam {
    fn name() -> &'static str {
        "extension"
    }

    fn parse(value: &str) -> Result<String, OptionsError> {
        let extension = value.trim().trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\', '.']) {
            Err(InvalidParameter {
                name: Self::name().to_string(),
                message: format!("'{value}' is not a file extension"),
            })
        } else {
            Ok(extension.to_owned())
        }
    }
}

impl NamedParam<String> for TemplateParam {
    fn name() -> &'static str {
        "template"
    }

    fn parse(value: &str) -> Result<String, OptionsError> {
        Ok(value.to_owned())
    }
}

impl GeneratorOptions {
    /// Builds options from named textual parameters, starting from the defaults.
    /// Later occurrences of a name override earlier ones.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown parameter names and for values that fail validation.
    pub fn from_params<'a, I>(params: I) -> Result<Self, RustyLetterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();
        for (name, value) in params {
            match name {
                _ if name == FilePrefixParam::name() => options.file_prefix = FilePrefixParam::parse(value)?,
                _ if name == SeparatorParam::name() => options.separator = SeparatorParam::parse(value)?,
                _ if name == ExtensionParam::name() => options.extension = ExtensionParam::parse(value)?,
                _ if name == TemplateParam::name() => options.template = TemplateParam::parse(value)?,
                _ => Err(InvalidParameter {
                    name: name.to_owned(),
                    message: "unknown parameter".to_owned(),
                })?,
            }
        }
        Ok(options)
    }

    /// Builds the suggested export file name for a row's values.
    pub fn file_name<'a, I>(&self, values: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let values = values.into_iter().collect::<Vec<_>>().join(&self.separator);
        if self.file_prefix.is_empty() {
            format!("{}.{}", values, self.extension)
        } else {
            format!("{}{}{}.{}", self.file_prefix, self.separator, values, self.extension)
        }
    }
}
