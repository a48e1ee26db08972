// CLI module for command-line interface

pub mod init;
pub mod new;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::models::workspace_config::WorkspaceConfig;
use crate::services::host::TerminalHost;
use crate::services::workspace::resolve_root;
use crate::utils::config::ConfigParser;
use crate::utils::error::{LcError, Result};

use self::init::InitCommand;
use self::new::NewCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "lcsharp")]
#[command(about = "Scaffold a C# coding-practice workspace and numbered solution files")]
#[command(long_about = r#"lcsharp sets up a folder for solving practice problems in C#.

It creates a .NET console project with a solutions/ folder, then creates one
file per problem with a namespace derived from the problem number in the
file name (TwoSum0001 -> namespace Problem0001).

Examples:
  lcsharp init --root ~/leetcode       Create the console project and solutions/
  lcsharp new TwoSum0001               Create solutions/TwoSum0001.cs and open it
  lcsharp new                          Prompt for the file name

Settings are read from lcsharp.toml in the workspace folder."#)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GlobalOptions {
    /// Configuration file (default: <workspace>/lcsharp.toml, then the user config)
    #[arg(long, global = true, env = "LCSHARP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the workspace (runs `dotnet new console` and creates solutions/)
    #[command(long_about = r#"Initialize a practice workspace.

Runs the scaffold tool (default: dotnet new console) in the workspace folder
and creates the solutions folder. A failing tool aborts the command.

Examples:
  lcsharp init                          Prompt for the workspace folder
  lcsharp init --root .                 Use the current folder
  lcsharp init --root . --skip-tool     Only create solutions/"#)]
    Init(InitCommand),

    /// Create a solution file with boilerplate and open it
    #[command(long_about = r#"Create a solution file under the solutions folder.

The file name must look like a C# identifier and should contain the problem
number; the longest number in the name becomes the namespace suffix.
Existing files are never overwritten unless --force is given.

Examples:
  lcsharp new TwoSum0001                solutions/TwoSum0001.cs, namespace Problem0001
  lcsharp new Climb70 --no-open         Create without opening an editor
  lcsharp new Climb70 --json            Print the result as JSON"#)]
    New(NewCommand),
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub async fn execute(command: Commands, global: &GlobalOptions) -> Result<()> {
        match command {
            Commands::Init(cmd) => cmd.run(global).await,
            Commands::New(cmd) => cmd.run(global).await,
        }
    }
}

type StdioHost = TerminalHost<std::io::StdinLock<'static>, std::io::Stderr>;

/// Resolve the workspace root and its configuration.
///
/// Returns `None` when the user cancels the folder prompt.
pub(crate) fn prepare_workspace(
    explicit_root: Option<PathBuf>,
    global: &GlobalOptions,
) -> Result<Option<(StdioHost, PathBuf, WorkspaceConfig)>> {
    let current_dir = std::env::current_dir()?;
    let mut host = TerminalHost::stdio(None, current_dir);

    let Some(root) = resolve_root(&mut host, explicit_root)? else {
        return Ok(None);
    };

    let config = ConfigParser::load_for_workspace(global.config.as_deref(), &root)?;
    host.set_editor(config.editor.clone());
    tracing::debug!(root = %root.display(), solutions_dir = %config.solutions_dir, "workspace resolved");

    Ok(Some((host, root, config)))
}

pub(crate) fn print_json<T: Serialize>(response: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(response)
        .map_err(|e| LcError::ValidationError(format!("Failed to serialize JSON response: {}", e)))?;
    println!("{}", json_output);
    Ok(())
}

pub(crate) fn print_cancelled(json: bool) -> Result<()> {
    if json {
        print_json(&serde_json::json!({ "status": "cancelled" }))
    } else {
        eprintln!("Cancelled.");
        Ok(())
    }
}
