//! Browser console logging
//!
//! A `tracing` layer that writes events to the devtools console at the
//! matching console level.

use std::fmt::{self, Write};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;
use web_sys::console;

pub struct ConsoleLayer {
    max_level: Level,
}

impl ConsoleLayer {
    pub const fn new(max_level: Level) -> Self {
        Self { max_level }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _: Context<'_, S>) -> bool {
        metadata.level() <= &self.max_level
    }

    fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
        let mut recorder = MessageRecorder::default();
        event.record(&mut recorder);

        let meta = event.metadata();
        let line = format!("{} {}: {}", meta.level(), meta.target(), recorder.0);

        let log = match *meta.level() {
            Level::TRACE | Level::DEBUG => console::debug_1,
            Level::INFO => console::info_1,
            Level::WARN => console::warn_1,
            Level::ERROR => console::error_1,
        };
        log(&line.into());
    }
}

/// Collects the message first, then `key = value` pairs
#[derive(Default)]
struct MessageRecorder(String);

impl Visit for MessageRecorder {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}{}", self.0);
        } else {
            let _ = write!(self.0, " {} = {:?};", field.name(), value);
        }
    }
}

/// Install the console layer as the global subscriber
pub fn init(max_level: Level) {
    let subscriber = Registry::default().with(ConsoleLayer::new(max_level));
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        console::warn_1(&format!("Logging already initialised: {e}").into());
    }
}
