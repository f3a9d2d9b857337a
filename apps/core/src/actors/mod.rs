//! # Actors Module
//!
//! Asynchronous edges of the companion: the session actor that owns a
//! conversation, the remote backend client, the transport adapter with its local
//! fallback, and the host speech capability.
//!
//! ## Components
//! - `session`: `SessionHandle` and its runner, one task per conversation
//! - `messages`: mailbox messages, published events and snapshots
//! - `backend`: HTTP client for the remote support backend
//! - `transport`: remote-first replies with local fallback
//! - `speech`: text-to-speech through a host program
//! - `traits`: seams for the backend and speech implementations

pub mod backend;
pub mod messages;
pub mod session;
pub mod speech;
pub mod traits;
pub mod transport;

pub use backend::HttpChatBackend;
pub use messages::{SessionEvent, SessionSnapshot};
pub use session::{SessionHandle, SessionOptions};
pub use speech::{clean_text_for_speech, CommandSpeech, NoSpeech};
pub use traits::{ChatBackend, SpeechCapability};
pub use transport::TransportAdapter;
