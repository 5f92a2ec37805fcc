pub mod cli;
pub mod config;
pub mod error;
pub mod path;
pub mod prompt;
pub mod render;
pub mod segment;
pub mod shell;
pub mod shell_exec;
pub mod styling;
pub mod vcs;

pub use config::Options;
pub use error::PromptError;
pub use prompt::{PromptBuilder, PromptEnv};
pub use segment::Segment;
pub use shell::Shell;
