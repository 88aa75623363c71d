//! 持久化适配层
//!
//! 在实体集合与键值后端之间做 JSON 转换。加载在首个查询服务前完成；
//! 每次变更后整体回写两个槽位。写入是尽力而为的：失败只记录日志，
//! 不回滚内存变更（运行中的进程以内存状态为准，持久化是附带保障）。

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use super::{ASSIGNMENTS_KEY, KeyValueStore, SUBMISSIONS_KEY, SeedData};
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::submissions::entities::Submission;

pub struct PersistenceAdapter {
    backend: Arc<dyn KeyValueStore>,
}

impl PersistenceAdapter {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// 加载两个集合，槽位缺失或解析失败时回退到对应的种子集合
    pub fn load(&self, seed: SeedData) -> (Vec<Assignment>, Vec<Submission>) {
        let assignments = self.load_slot(ASSIGNMENTS_KEY, seed.assignments);
        let submissions = self.load_slot(SUBMISSIONS_KEY, seed.submissions);
        (assignments, submissions)
    }

    /// 回写两个集合，失败只记录日志
    pub fn save(&self, assignments: &[Assignment], submissions: &[Submission]) {
        self.save_slot(ASSIGNMENTS_KEY, assignments);
        self.save_slot(SUBMISSIONS_KEY, submissions);
    }

    fn load_slot<T: DeserializeOwned>(&self, key: &str, seed: Vec<T>) -> Vec<T> {
        match self.backend.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    warn!("Slot '{}' holds unparseable data, using seed: {}", key, e);
                    seed
                }
            },
            Ok(None) => seed,
            Err(e) => {
                warn!("Failed to read slot '{}', using seed: {}", key, e);
                seed
            }
        }
    }

    fn save_slot<T: Serialize>(&self, key: &str, items: &[T]) {
        if let Err(e) = self.try_save_slot(key, items) {
            error!("Failed to persist slot '{}': {}", key, e);
        }
    }

    fn try_save_slot<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(key, &raw)
    }
}
