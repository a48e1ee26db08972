use clap::Args;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::cli::{print_cancelled, print_json, prepare_workspace, GlobalOptions};
use crate::services::scaffold_tool::ProcessScaffoldTool;
use crate::services::workspace::WorkspaceService;
use crate::utils::error::Result;

/// Initialize a practice workspace: console project plus solutions folder
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Workspace folder (prompted for when omitted)
    #[arg(long, env = "LCSHARP_ROOT")]
    pub root: Option<PathBuf>,

    /// Only create the solutions folder, do not run the scaffold tool
    #[arg(long)]
    pub skip_tool: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for init command
#[derive(Debug, Serialize, Deserialize)]
pub struct InitResponse {
    pub status: String,
    pub root: String,
    pub solutions_dir: String,
    pub command: Option<String>,
}

impl InitCommand {
    /// Execute the init command
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let Some((host, root, config)) = prepare_workspace(self.root.clone(), global)? else {
            return print_cancelled(self.json);
        };

        let tool = ProcessScaffoldTool::new(config.scaffold.clone(), self.json);
        let mut service = WorkspaceService::new(host, root, config);
        let report = service
            .initialize((!self.skip_tool).then_some(&tool))
            .await?;

        if self.json {
            print_json(&InitResponse {
                status: "success".to_string(),
                root: report.root.display().to_string(),
                solutions_dir: report.solutions_dir.display().to_string(),
                command: report.command,
            })?;
        } else {
            println!("Workspace ready at {}", report.root.display());
        }

        Ok(())
    }
}
