// Common validation utilities for lcsharp commands

use crate::utils::error::{LcError, Result};
use regex::Regex;
use std::path::{Component, Path};
use std::sync::OnceLock;

fn identifier_regex() -> &'static Regex {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
    })
}

/// Check whether `name` is an identifier-style file base name
pub fn is_identifier(name: &str) -> bool {
    identifier_regex().is_match(name)
}

/// Validate a solution file base name (no extension)
pub fn validate_solution_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(LcError::ValidationError(
            "Solution name cannot be empty.\n\nProvide a name containing the problem number:\n  lcsharp new TwoSum0001".to_string()
        ));
    }

    if !is_identifier(name) {
        return Err(LcError::ValidationError(format!(
            "Invalid solution name '{name}' - must look like a C# identifier.\n\nValid names:\n  ✓ TwoSum0001\n  ✓ _704_BinarySearch\n  ✗ 704BinarySearch\n  ✗ two-sum"
        )));
    }

    Ok(())
}

/// Validation message shown by interactive prompts, or `None` when accepted
pub fn solution_name_prompt_error(name: &str) -> Option<String> {
    if is_identifier(name) {
        None
    } else {
        Some("File name must be a valid C# identifier (letters, digits, '_'; not starting with a digit)".to_string())
    }
}

/// Validate that the workspace root exists and is a directory
pub fn validate_workspace_root(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LcError::ValidationError(format!(
            "Workspace folder '{}' does not exist.",
            path.display()
        )));
    }

    if !path.is_dir() {
        return Err(LcError::ValidationError(format!(
            "'{}' is not a directory.\n\nChoose a folder to use as the workspace root.",
            path.display()
        )));
    }

    Ok(())
}

/// Validate a directory path that must stay inside the workspace root
pub fn validate_relative_dir(value: &str, field: &str) -> Result<()> {
    let path = Path::new(value);

    if value.trim().is_empty() {
        return Err(LcError::ConfigError(format!("'{field}' cannot be empty")));
    }

    if path.is_absolute() || path.has_root() {
        return Err(LcError::ConfigError(format!(
            "'{field}' must be relative to the workspace root, got '{value}'"
        )));
    }

    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(LcError::ConfigError(format!(
            "'{field}' cannot contain '..' references"
        )));
    }

    Ok(())
}

/// Validate a file extension given without the leading dot
pub fn validate_extension(extension: &str) -> Result<()> {
    if extension.is_empty()
        || !extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(LcError::ConfigError(format!(
            "Invalid extension '{extension}' (use letters and digits only, without a leading dot)"
        )));
    }
    Ok(())
}
