//! Configuration loader with TOML parsing and environment variable substitution
//!
//! Loading order:
//! 1. Read the TOML file
//! 2. Substitute `${VAR}` placeholders from the environment (comments skipped)
//! 3. Parse into [`StevedoreConfig`]
//! 4. Validate, reporting every missing/invalid field at once

use super::schema::StevedoreConfig;
use crate::domain::errors::StevedoreError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// # Errors
///
/// Returns a `Configuration` error if the file cannot be read, a
/// referenced environment variable is unset, TOML parsing fails, or
/// validation finds missing/invalid fields.
pub fn load_config(path: impl AsRef<Path>) -> Result<StevedoreConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(StevedoreError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        StevedoreError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: StevedoreConfig = toml::from_str(&contents)
        .map_err(|e| StevedoreError::Configuration(format!("Failed to parse TOML: {e}")))?;

    config.validate().map_err(|e| {
        StevedoreError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched so documentation examples in the file
/// don't trigger missing-variable errors.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(StevedoreError::Configuration(format!(
            "Missing environment variables referenced in configuration: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}
