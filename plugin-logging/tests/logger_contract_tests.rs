//! Contract tests for the logger trait using a recording implementation

use plugin_logging::{LogLevel, Logger};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Default)]
struct RecordingLogger {
    messages: Mutex<Vec<(String, LogLevel)>>,
}

impl RecordingLogger {
    fn messages(&self) -> Vec<(String, LogLevel)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str, level: LogLevel) {
        self.messages.lock().unwrap().push((message.to_string(), level));
    }
}

#[test]
fn test_each_level_is_recorded() {
    for level in LogLevel::ALL {
        let logger = RecordingLogger::default();
        logger.log("message", level);

        let messages = logger.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], ("message".to_string(), level));
    }
}

#[test]
fn test_multiple_logging_levels_keep_call_order() {
    let logger = RecordingLogger::default();

    logger.error("Error message");
    logger.warning("Warning message");
    logger.info("Info message");
    logger.debug("Debug message");

    assert_eq!(
        logger.messages(),
        vec![
            ("Error message".to_string(), LogLevel::Error),
            ("Warning message".to_string(), LogLevel::Warning),
            ("Info message".to_string(), LogLevel::Info),
            ("Debug message".to_string(), LogLevel::Debug),
        ]
    );
}

#[test]
fn test_empty_message_is_accepted() {
    let logger = RecordingLogger::default();
    logger.log("", LogLevel::Info);
    assert_eq!(logger.messages(), vec![(String::new(), LogLevel::Info)]);
}

#[test]
fn test_shared_across_threads() {
    let logger = Arc::new(RecordingLogger::default());
    let sink: Arc<dyn Logger> = logger.clone();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || sink.info(&format!("worker {}", i)))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(logger.messages().len(), 8);
}
