// Models module for data structures
pub mod solution;
pub mod workspace_config;
