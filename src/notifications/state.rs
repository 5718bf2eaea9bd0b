//! Last-notified signal per symbol.

use std::collections::HashMap;

use crate::models::signal::Signal;

/// Where the notifier remembers the last signal it alerted on. The
/// in-memory store lives for the process; other stores can persist it.
pub trait SignalStore: Send + Sync {
    fn last_signal(&self, symbol: &str) -> Option<Signal>;
    fn record(&mut self, symbol: &str, signal: Signal);
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySignalStore {
    last: HashMap<String, Signal>,
}

impl InMemorySignalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

impl SignalStore for InMemorySignalStore {
    fn last_signal(&self, symbol: &str) -> Option<Signal> {
        self.last.get(symbol).copied()
    }

    fn record(&mut self, symbol: &str, signal: Signal) {
        self.last.insert(symbol.to_string(), signal);
    }
}
