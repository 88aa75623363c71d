use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 作业实体
///
/// 由教师发布；本核心不提供编辑或删除操作，`id` 创建后不可变。
/// 持久化布局使用 camelCase 字段名。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID（生成器分配的不透明字符串）
    pub id: String,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: String,
    // 作业截止时间
    pub deadline: chrono::DateTime<chrono::Utc>,
    // 发布者 ID（弱引用，不做级联删除）
    pub instructor_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_deadline;

    #[test]
    fn test_camel_case_layout() {
        let assignment = Assignment {
            id: "1".to_string(),
            title: "React Components Project".to_string(),
            description: "Build a product catalog.".to_string(),
            deadline: parse_deadline("2024-02-15T23:59:59").unwrap(),
            instructor_id: "1".to_string(),
        };
        let json = serde_json::to_string(&assignment).unwrap();
        assert!(json.contains("\"instructorId\":\"1\""));
        assert!(json.contains("\"deadline\""));

        let back: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, assignment.id);
        assert_eq!(back.deadline, assignment.deadline);
    }
}
