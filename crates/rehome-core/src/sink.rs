//! Where confirmation messages go.

use std::sync::Mutex;

/// An output area whose content is overwritten by each message.
pub trait MessageSink {
    fn show(&self, message: &str);
}

/// Sink that remembers the last message shown.
#[derive(Debug, Default)]
pub struct MemorySink {
    last: Mutex<Option<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing content, as a page would before any click.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            last: Mutex::new(Some(content.into())),
        }
    }

    #[must_use]
    pub fn content(&self) -> Option<String> {
        self.last
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl MessageSink for MemorySink {
    fn show(&self, message: &str) {
        *self
            .last
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(message.to_string());
    }
}

impl<T: MessageSink + ?Sized> MessageSink for &T {
    fn show(&self, message: &str) {
        (**self).show(message);
    }
}
