use std::fmt;
use std::path::PathBuf;
use serde::Serialize;

use crate::extract::problem_namespace;
use crate::utils::error::Result;
use crate::utils::validation::validate_solution_name;

/// Boilerplate written into new solution files
pub const DEFAULT_TEMPLATE: &str = "namespace {{NAMESPACE}}
{
\tpublic class Solution
\t{
\t\tpublic
\t}
}
";

/// A validated solution file base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionName(String);

impl SolutionName {
    pub fn parse(name: &str) -> Result<Self> {
        validate_solution_name(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace label derived from the longest number in the name
    pub fn namespace(&self, prefix: &str) -> String {
        problem_namespace(&self.0, prefix)
    }

    /// File name with the given extension
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }
}

impl fmt::Display for SolutionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fill a boilerplate template for a solution
pub fn render_template(template: &str, name: &SolutionName, namespace: &str) -> String {
    let rendered = template
        .replace("{{NAMESPACE}}", namespace)
        .replace("{{NAME}}", name.as_str());

    if let Some(start) = rendered.find("{{") {
        if let Some(end) = rendered[start..].find("}}") {
            tracing::warn!(
                placeholder = &rendered[start..start + end + 2],
                "unreplaced placeholder in solution template"
            );
        }
    }

    rendered
}

/// Outcome of creating (or reopening) a solution file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionFile {
    pub name: String,
    pub path: PathBuf,
    pub namespace: String,
    /// False when the file already existed and was left untouched
    pub created: bool,
}
