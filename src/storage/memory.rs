//! 内存键值后端
//!
//! 用于测试与不需要落盘的临时会话。

use dashmap::DashMap;

use super::KeyValueStore;
use crate::errors::Result;

#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
