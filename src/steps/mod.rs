//! Steps the bot runs for a command: the ownership gate and its fallback reply.

pub mod author_owner;
pub mod send_reply;

use std::future::Future;
use std::pin::Pin;

pub use author_owner::AuthorOwnerCheck;
pub use send_reply::SendReply;

/// Notifies the issue thread that a command is not permitted.
///
/// Implementations own their delivery failures: they report them through
/// the returned flag instead of an error.
pub trait ReplySender: Send + Sync {
    /// Deliver the reply. Returns `false` if it was not delivered.
    fn perform(&self) -> Pin<Box<dyn Future<Output = bool> + Send + '_>>;
}
