//! Conversation session: message history, mood check-in, anonymity and turn-taking.
//!
//! `ConversationSession` is a synchronous state machine. Scheduling the delayed
//! reply is left to the caller through the `ReplyTimer` abstraction.

pub mod conversation;
pub mod state;
pub mod timer;

pub use conversation::ConversationSession;
pub use state::{PendingReply, ReplyDelays, ReplyOrigin, SessionState};
pub use timer::{ReplyTimer, TokioReplyTimer};
