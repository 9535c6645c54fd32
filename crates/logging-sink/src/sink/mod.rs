mod guard;
mod message_sink;

pub use guard::LineModeGuard;
pub use message_sink::MessageSink;
