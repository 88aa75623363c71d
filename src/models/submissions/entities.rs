use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::User;

// 提交状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Pending,  // 待评审
    Accepted, // 已通过（终态，关闭该学生的重交资格）
    Rejected, // 已退回（允许重交）
}

impl SubmissionStatus {
    pub const PENDING: &'static str = "pending";
    pub const ACCEPTED: &'static str = "accepted";
    pub const REJECTED: &'static str = "rejected";
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SubmissionStatus::PENDING => Ok(SubmissionStatus::Pending),
            SubmissionStatus::ACCEPTED => Ok(SubmissionStatus::Accepted),
            SubmissionStatus::REJECTED => Ok(SubmissionStatus::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: pending, accepted, rejected"
            ))),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "{}", SubmissionStatus::PENDING),
            SubmissionStatus::Accepted => write!(f, "{}", SubmissionStatus::ACCEPTED),
            SubmissionStatus::Rejected => write!(f, "{}", SubmissionStatus::REJECTED),
        }
    }
}

/// 提交时捕获的学生展示快照
///
/// 写入时缓存，不与用户记录做实时关联；之后用户信息变化不回填，
/// 反映的是"提交当时"的事实。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct StudentSnapshot {
    pub name: String,
    pub email: String,
}

impl From<&User> for StudentSnapshot {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// 提交时捕获的作业展示快照
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct AssignmentSnapshot {
    pub title: String,
}

/// 提交实体
///
/// 由学生创建，初始状态 pending；此后只通过评审操作修改
/// status / feedback，其余字段不再变化，也从不删除。
/// 可选字段缺省时直接省略而非写 null，保证持久化往返稳定。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    // 唯一 ID
    pub id: String,
    // 关联的作业 ID（创建时必须存在）
    pub assignment_id: String,
    // 提交者 ID
    pub student_id: String,
    // 提交内容链接
    pub submission_url: String,
    // 学生附言
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    // 教师反馈
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    // 提交状态
    pub status: SubmissionStatus,
    // 提交时间（生成器分配）
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // 学生展示快照
    pub student: StudentSnapshot,
    // 作业展示快照
    pub assignment: AssignmentSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::utils::time::parse_deadline;

    fn sample() -> Submission {
        Submission {
            id: "1".to_string(),
            assignment_id: "1".to_string(),
            student_id: "2".to_string(),
            submission_url: "https://github.com/student/react-components-project".to_string(),
            note: None,
            feedback: None,
            status: SubmissionStatus::Pending,
            submitted_at: parse_deadline("2024-02-10T14:30:00").unwrap(),
            student: StudentSnapshot {
                name: "John Student".to_string(),
                email: "student@example.com".to_string(),
            },
            assignment: AssignmentSnapshot {
                title: "React Components Project".to_string(),
            },
        }
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("\"note\""));
        assert!(!json.contains("\"feedback\""));
        assert!(json.contains("\"assignmentId\""));
        assert!(json.contains("\"submittedAt\""));
    }

    #[test]
    fn test_optional_fields_preserved_when_present() {
        let mut submission = sample();
        submission.note = Some("Extra animations included.".to_string());
        submission.feedback = Some("Excellent work!".to_string());
        submission.status = SubmissionStatus::Accepted;

        let json = serde_json::to_string(&submission).unwrap();
        let back: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(back.note.as_deref(), Some("Extra animations included."));
        assert_eq!(back.feedback.as_deref(), Some("Excellent work!"));
        assert_eq!(back.status, SubmissionStatus::Accepted);
    }

    #[test]
    fn test_snapshot_from_user() {
        let user = User {
            id: "2".to_string(),
            name: "John Student".to_string(),
            email: "student@example.com".to_string(),
            role: UserRole::Student,
        };
        let snapshot = StudentSnapshot::from(&user);
        assert_eq!(snapshot.name, "John Student");
        assert_eq!(snapshot.email, "student@example.com");
    }

    #[test]
    fn test_invalid_status_rejected() {
        assert!(serde_json::from_str::<SubmissionStatus>("\"graded\"").is_err());
    }
}
