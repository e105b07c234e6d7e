mod messages;

pub use messages::{Command, SessionEvent};
