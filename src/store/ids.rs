//! ID 生成器
//!
//! 以毫秒时间戳为基础，进程内严格递增：同一毫秒内的连续请求
//! 在上一次发放值上加一。发放的 ID 可作为创建顺序的比较键，
//! 重复发放属于正确性缺陷而非可恢复错误。

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

#[derive(Debug, Default)]
pub struct IdGenerator {
    last_issued: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 发放下一个唯一 ID
    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last_issued.load(Ordering::Relaxed);
        loop {
            let candidate = if now > prev { now } else { prev + 1 };
            match self.last_issued.compare_exchange_weak(
                prev,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return candidate.to_string(),
                Err(observed) => prev = observed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique_and_increasing() {
        let ids = IdGenerator::new();
        let mut issued: Vec<i64> = (0..1000)
            .map(|_| ids.next_id().parse::<i64>().unwrap())
            .collect();

        for pair in issued.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        issued.dedup();
        assert_eq!(issued.len(), 1000);
    }

    #[test]
    fn test_id_tracks_wall_clock() {
        let ids = IdGenerator::new();
        let before = Utc::now().timestamp_millis();
        let id: i64 = ids.next_id().parse().unwrap();
        assert!(id >= before);
    }
}
