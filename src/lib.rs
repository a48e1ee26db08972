// lcsharp - C# coding-practice workspace scaffolder
// Core library functionality

pub mod cli;
pub mod extract;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use extract::{extract_longest_number, problem_namespace};
pub use services::host::{Host, MessageKind, TerminalHost};
pub use services::scaffold_tool::{ProcessScaffoldTool, ScaffoldTool};
pub use services::workspace::{CreateRequest, InitReport, Outcome, WorkspaceService};
