// Services module for workflows and host capabilities
pub mod host;
pub mod scaffold_tool;
pub mod workspace;
