#![forbid(unsafe_code)]

//! Authorization gate for chat-ops commands posted on GitHub issue threads.

pub mod config;
pub mod errors;
pub mod github;
pub mod models;
pub mod runner;
pub mod steps;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
pub use models::verdict::Verdict;
pub use runner::Outcome;
pub use steps::{AuthorOwnerCheck, ReplySender, SendReply};
