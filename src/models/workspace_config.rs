use serde::{Deserialize, Serialize};

use crate::utils::error::{LcError, Result};
use crate::utils::validation::{is_identifier, validate_extension, validate_relative_dir};

/// External command used to create the console project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldCommand {
    /// Program to execute (looked up on PATH)
    pub program: String,
    /// Arguments passed to the program
    pub args: Vec<String>,
}

impl Default for ScaffoldCommand {
    fn default() -> Self {
        Self {
            program: "dotnet".to_string(),
            args: vec!["new".to_string(), "console".to_string()],
        }
    }
}

impl ScaffoldCommand {
    /// Command line as shown to the user
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Workspace settings read from lcsharp.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Directory holding solution files, relative to the workspace root
    pub solutions_dir: String,
    /// Solution file extension, without the dot
    pub extension: String,
    /// Namespace label prefix, followed by the problem number
    pub namespace_prefix: String,
    /// Editor command used to open new files
    pub editor: Option<String>,
    /// Inline boilerplate template
    pub template: Option<String>,
    /// Template file, relative to the workspace root
    pub template_file: Option<String>,
    pub scaffold: ScaffoldCommand,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            solutions_dir: "solutions".to_string(),
            extension: "cs".to_string(),
            namespace_prefix: "Problem".to_string(),
            editor: None,
            template: None,
            template_file: None,
            scaffold: ScaffoldCommand::default(),
        }
    }
}

impl WorkspaceConfig {
    pub fn validate(&self) -> Result<()> {
        validate_relative_dir(&self.solutions_dir, "solutions_dir")?;
        validate_extension(&self.extension)?;

        if !is_identifier(&self.namespace_prefix) {
            return Err(LcError::ConfigError(format!(
                "namespace_prefix '{}' must be a valid identifier",
                self.namespace_prefix
            )));
        }

        if self.scaffold.program.trim().is_empty() {
            return Err(LcError::ConfigError(
                "scaffold.program cannot be empty".to_string(),
            ));
        }

        if self.template.is_some() && self.template_file.is_some() {
            return Err(LcError::ConfigError(
                "set either 'template' or 'template_file', not both".to_string(),
            ));
        }

        if let Some(template_file) = &self.template_file {
            validate_relative_dir(template_file, "template_file")?;
        }

        if matches!(&self.editor, Some(editor) if editor.trim().is_empty()) {
            return Err(LcError::ConfigError("'editor' cannot be empty".to_string()));
        }

        Ok(())
    }
}
