// Workspace scaffolding workflows: initialize a workspace, create solution files

use std::path::PathBuf;
use serde::Serialize;

use crate::models::solution::{render_template, SolutionFile, SolutionName};
use crate::models::workspace_config::WorkspaceConfig;
use crate::services::host::{Host, MessageKind};
use crate::services::scaffold_tool::ScaffoldTool;
use crate::utils::config::ConfigParser;
use crate::utils::error::Result;
use crate::utils::fs_utils::{ensure_directory_exists, write_if_absent};
use crate::utils::validation::{solution_name_prompt_error, validate_workspace_root};

/// Result of a workflow the user may abandon midway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    Cancelled,
}

/// Summary of an initialized workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub root: PathBuf,
    pub solutions_dir: PathBuf,
    /// Command that was run, or `None` when skipped
    pub command: Option<String>,
}

/// Parameters of the create-solution workflow
#[derive(Debug, Clone, Default)]
pub struct CreateRequest {
    /// Name given up front; prompted for when `None`
    pub name: Option<String>,
    /// Replace an existing file with fresh boilerplate
    pub force: bool,
    pub open: bool,
}

pub const INIT_COMPLETE_MESSAGE: &str =
    "Initialization complete: created project and solutions folder";

/// Pick the workspace root: the explicit one when given, otherwise ask the host
pub fn resolve_root<H: Host>(host: &mut H, explicit: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let root = match explicit {
        Some(root) => root,
        None => match host.choose_directory()? {
            Some(root) => root,
            None => return Ok(None),
        },
    };

    validate_workspace_root(&root)?;
    Ok(Some(root))
}

pub struct WorkspaceService<H> {
    host: H,
    root: PathBuf,
    config: WorkspaceConfig,
}

impl<H: Host> WorkspaceService<H> {
    pub const fn new(host: H, root: PathBuf, config: WorkspaceConfig) -> Self {
        Self { host, root, config }
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn solutions_dir(&self) -> PathBuf {
        self.root.join(&self.config.solutions_dir)
    }

    /// Create the console project and the solutions folder.
    ///
    /// `tool` is `None` when only the folder should be created.
    pub async fn initialize<T: ScaffoldTool>(&mut self, tool: Option<&T>) -> Result<InitReport> {
        let command = if let Some(tool) = tool {
            self.host.show_message(
                MessageKind::Info,
                &format!("Initializing .NET console project ({})...", tool.describe()),
            );
            tool.run(&self.root).await?;
            Some(tool.describe())
        } else {
            tracing::debug!("scaffold tool skipped");
            None
        };

        let solutions_dir = self.solutions_dir();
        ensure_directory_exists(&solutions_dir).await?;

        self.host.show_message(MessageKind::Info, INIT_COMPLETE_MESSAGE);

        Ok(InitReport {
            root: self.root.clone(),
            solutions_dir,
            command,
        })
    }

    /// Create a solution file (or reuse an existing one) and open it
    pub async fn create_solution(&mut self, request: &CreateRequest) -> Result<Outcome<SolutionFile>> {
        let solutions_dir = self.solutions_dir();
        ensure_directory_exists(&solutions_dir).await?;

        let name = match &request.name {
            Some(name) => SolutionName::parse(name)?,
            None => {
                let answer = self.host.prompt_string(
                    "C# file name (no extension, include the problem number)",
                    &solution_name_prompt_error,
                )?;
                match answer {
                    Some(answer) => SolutionName::parse(&answer)?,
                    None => return Ok(Outcome::Cancelled),
                }
            }
        };

        let file_name = name.file_name(&self.config.extension);
        let path = solutions_dir.join(&file_name);
        let namespace = name.namespace(&self.config.namespace_prefix);

        let template = ConfigParser::load_template(&self.config, &self.root)?;
        let content = render_template(&template, &name, &namespace);
        let created = write_if_absent(&path, &content, request.force).await?;
        if created {
            tracing::info!(path = %path.display(), %namespace, "wrote solution file");
        } else {
            tracing::info!(path = %path.display(), "solution file exists, leaving it untouched");
        }

        if request.open {
            self.host.open_file(&path)?;
        }
        self.host
            .show_message(MessageKind::Info, &format!("Created/opened: {file_name}"));

        Ok(Outcome::Completed(SolutionFile {
            name: name.to_string(),
            path,
            namespace,
            created,
        }))
    }
}
