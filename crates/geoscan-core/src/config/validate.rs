//! Configuration validation.

use crate::error::ConfigError;
use crate::pipeline::ImageClassifier;

use super::Config;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

impl Config {
    /// Validate configuration values.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for ext in &self.scan.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ConfigError::ValidationError(format!(
                    "scan.extensions entry {ext:?} must be a dot followed by a suffix"
                )));
            }
        }

        Self::check_file_name("output.csv_file_name", &self.output.csv_file_name)?;
        Self::check_file_name("output.html_file_name", &self.output.html_file_name)?;
        let classifier = ImageClassifier::from_config(&self.scan);
        for (field, name) in [
            ("output.csv_file_name", &self.output.csv_file_name),
            ("output.html_file_name", &self.output.html_file_name),
        ] {
            if classifier.is_image(name) {
                return Err(ConfigError::ValidationError(format!(
                    "{field} {name:?} would be scanned as an image"
                )));
            }
        }
        if self.output.csv_file_name == self.output.html_file_name {
            return Err(ConfigError::ValidationError(
                "output.csv_file_name and output.html_file_name must differ".into(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be one of {}",
                LOG_FORMATS.join(", ")
            )));
        }
        Ok(())
    }

    fn check_file_name(field: &str, name: &str) -> Result<(), ConfigError> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(ConfigError::ValidationError(format!(
                "{field} must be a plain file name"
            )));
        }
        Ok(())
    }
}
