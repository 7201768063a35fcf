pub mod intent;
pub mod replies;
pub mod responder;

pub use intent::{classify, parse, CommandError, Intent, IntentKind};
pub use responder::{execute, respond};
