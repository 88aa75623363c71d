use std::sync::Arc;

use crate::config::StorageConfig;
use crate::errors::{AssignTrackError, Result};

pub mod adapter;
pub mod json_file;
pub mod memory;
pub mod seed;

pub use adapter::PersistenceAdapter;
pub use seed::SeedData;

/// 两个固定的持久化槽位
pub const ASSIGNMENTS_KEY: &str = "assignments";
pub const SUBMISSIONS_KEY: &str = "submissions";

/// 键值后端
///
/// 每个槽位存放一个实体集合的 JSON 数组文本。后端只关心字符串的
/// 读写，序列化语义由 `PersistenceAdapter` 负责。
pub trait KeyValueStore: std::fmt::Debug + Send + Sync {
    // 读取槽位内容，槽位不存在时返回 None
    fn get(&self, key: &str) -> Result<Option<String>>;
    // 写入槽位内容（整体覆盖）
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// 根据配置选择存储后端
pub fn create_kv_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
    match config.backend.as_str() {
        "json" => Ok(Arc::new(json_file::JsonFileStore::new(&config.data_dir)?)),
        "memory" => Ok(Arc::new(memory::MemoryStore::new())),
        other => Err(AssignTrackError::storage_backend_not_found(format!(
            "unknown storage backend: '{other}', supported: json, memory"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_memory_backend() {
        let config = StorageConfig {
            backend: "memory".to_string(),
            ..Default::default()
        };
        assert!(create_kv_store(&config).is_ok());
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let config = StorageConfig {
            backend: "redis".to_string(),
            ..Default::default()
        };
        let err = create_kv_store(&config).unwrap_err();
        assert_eq!(err.code(), "E005");
    }
}
