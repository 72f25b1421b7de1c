#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use respira_guide_domain::{ClassifierConfig, InMemoryLogSink, RespiratoryClassifier};

// Initialize tracing once for all tests
static INIT: std::sync::Once = std::sync::Once::new();
pub fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Console writer whose contents stay readable while the classifier holds it
#[derive(Debug, Clone, Default)]
pub struct SharedConsole {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedConsole {
    pub fn lines(&self) -> Vec<String> {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(String::from)
            .collect()
    }
}

impl Write for SharedConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Classifier with default thresholds plus handles on its sink and console
pub fn create_test_classifier() -> (
    RespiratoryClassifier<InMemoryLogSink, SharedConsole>,
    InMemoryLogSink,
    SharedConsole,
) {
    initialize();
    let sink = InMemoryLogSink::new();
    let console = SharedConsole::default();
    let classifier =
        RespiratoryClassifier::with_console(ClassifierConfig::default(), sink.clone(), console.clone());
    (classifier, sink, console)
}
