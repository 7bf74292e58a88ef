use std::collections::HashMap;

/// A single-namespace string store. Local storage in the browser, the eframe
/// state file on native, a plain map in tests and the headless simulator.
pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: String);
    fn flush(&mut self);
}

/// eframe's persistence backend already is a key-value store.
impl<'a> KeyValueStore for dyn eframe::Storage + 'a {
    fn get_string(&self, key: &str) -> Option<String> {
        eframe::Storage::get_string(self, key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        eframe::Storage::set_string(self, key, value);
    }

    fn flush(&mut self) {
        eframe::Storage::flush(self);
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    flushes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `flush` was called.
    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
