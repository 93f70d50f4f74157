//! Turn sequencing: phases, inputs, notifications and the session loop.

mod event;
mod manager;
mod session;

pub use event::{GameInput, NoticeKind, Notification, Phase, PromptKind};
pub use manager::TurnManager;
pub use session::run_session;
