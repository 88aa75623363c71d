use serde::Deserialize;
use ts_rs::TS;

/// 创建作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: String,
    pub deadline: String, // ISO 8601 格式，如 "2024-02-15T23:59:59"
    pub instructor_id: String,
}
