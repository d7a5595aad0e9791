//! Logger implementation on top of `tracing`

use plugin_logging::{LogLevel, Logger, HOST_LOG_TARGET};

/// Forwards plugin log lines to the host's `tracing` subscriber
///
/// Messages are prefixed with the plugin name and emitted on
/// [`HOST_LOG_TARGET`], which the runtime's forwarding layer skips.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    plugin_name: String,
    min_level: LogLevel,
}

impl TracingLogger {
    pub fn new(plugin_name: impl Into<String>) -> Self {
        let min_level = if cfg!(debug_assertions) {
            LogLevel::Debug
        } else {
            LogLevel::Info
        };

        Self {
            plugin_name: plugin_name.into(),
            min_level,
        }
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl Logger for TracingLogger {
    fn log(&self, message: &str, level: LogLevel) {
        if level < self.min_level {
            return;
        }

        let plugin = self.plugin_name.as_str();
        match level {
            LogLevel::Debug => {
                tracing::debug!(target: HOST_LOG_TARGET, plugin, "[{}] {}", plugin, message)
            }
            LogLevel::Info => {
                tracing::info!(target: HOST_LOG_TARGET, plugin, "[{}] {}", plugin, message)
            }
            LogLevel::Warning => {
                tracing::warn!(target: HOST_LOG_TARGET, plugin, "[{}] {}", plugin, message)
            }
            LogLevel::Error => {
                tracing::error!(target: HOST_LOG_TARGET, plugin, "[{}] {}", plugin, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::Registry;

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<(Level, String, String)>>>,
    }

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{:?}", value);
            }
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.events.lock().unwrap().push((
                *event.metadata().level(),
                event.metadata().target().to_string(),
                visitor.0,
            ));
        }
    }

    fn capture<F: FnOnce()>(f: F) -> Vec<(Level, String, String)> {
        let layer = CaptureLayer::default();
        let events = Arc::clone(&layer.events);
        let subscriber = Registry::default().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        let captured = events.lock().unwrap().clone();
        captured
    }

    #[test]
    fn test_levels_map_to_tracing() {
        let logger = TracingLogger::new("fixture").with_min_level(LogLevel::Debug);

        let events = capture(|| {
            logger.debug("d");
            logger.info("i");
            logger.warning("w");
            logger.error("e");
        });

        let levels: Vec<Level> = events.iter().map(|(level, _, _)| *level).collect();
        assert_eq!(
            levels,
            vec![Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR]
        );
        assert!(events.iter().all(|(_, target, _)| target == HOST_LOG_TARGET));
        assert_eq!(events[1].2, "[fixture] i");
    }

    #[test]
    fn test_min_level_filters() {
        let logger = TracingLogger::new("fixture").with_min_level(LogLevel::Warning);

        let events = capture(|| {
            logger.debug("dropped");
            logger.info("dropped");
            logger.warning("kept");
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].2, "[fixture] kept");
    }

    #[test]
    fn test_empty_message_is_logged() {
        let logger = TracingLogger::new("fixture").with_min_level(LogLevel::Debug);
        let events = capture(|| logger.log("", LogLevel::Info));
        assert_eq!(events.len(), 1);
    }
}
