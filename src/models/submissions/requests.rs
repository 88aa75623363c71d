use serde::Deserialize;
use ts_rs::TS;

use super::entities::{AssignmentSnapshot, StudentSnapshot, SubmissionStatus};

/// 创建提交请求
///
/// `student` / `assignment` 为调用方在提交时捕获的展示快照。
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionRequest {
    pub assignment_id: String,
    pub student_id: String,
    pub submission_url: String,
    pub note: Option<String>,
    pub student: StudentSnapshot,
    pub assignment: AssignmentSnapshot,
}

/// 评审提交请求
///
/// 教师可在 pending / accepted / rejected 之间任意改判。
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct ReviewSubmissionRequest {
    pub status: SubmissionStatus,
    pub feedback: Option<String>,
}
