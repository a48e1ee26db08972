use clap::Args;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::cli::{print_cancelled, print_json, prepare_workspace, GlobalOptions};
use crate::services::workspace::{CreateRequest, Outcome, WorkspaceService};
use crate::utils::error::Result;

/// Create a solution file with boilerplate under the solutions folder
#[derive(Debug, Args)]
pub struct NewCommand {
    /// File name without extension, including the problem number (prompted for when omitted)
    pub name: Option<String>,

    /// Workspace folder (prompted for when omitted)
    #[arg(long, env = "LCSHARP_ROOT")]
    pub root: Option<PathBuf>,

    /// Overwrite an existing file with fresh boilerplate
    #[arg(long)]
    pub force: bool,

    /// Do not open the file in an editor
    #[arg(long)]
    pub no_open: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for new command
#[derive(Debug, Serialize, Deserialize)]
pub struct NewResponse {
    pub status: String,
    pub name: String,
    pub path: String,
    pub namespace: String,
    pub created: bool,
}

impl NewCommand {
    /// Execute the new command
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let Some((host, root, config)) = prepare_workspace(self.root.clone(), global)? else {
            return print_cancelled(self.json);
        };

        let mut service = WorkspaceService::new(host, root, config);
        let request = CreateRequest {
            name: self.name.clone(),
            force: self.force,
            // JSON consumers drive their own editor
            open: !self.no_open && !self.json,
        };

        let file = match service.create_solution(&request).await? {
            Outcome::Completed(file) => file,
            Outcome::Cancelled => return print_cancelled(self.json),
        };

        if self.json {
            print_json(&NewResponse {
                status: "success".to_string(),
                name: file.name,
                path: file.path.display().to_string(),
                namespace: file.namespace,
                created: file.created,
            })?;
        } else if file.created {
            println!("Created {} (namespace {})", file.path.display(), file.namespace);
        } else {
            println!("Opened existing {}", file.path.display());
        }

        Ok(())
    }
}
