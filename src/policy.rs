//! 截止时间与提交资格策略
//!
//! 对作业与当前时间的纯函数，无任何状态。资格判断只有一个事实来源
//! （`can_submit`），作业列表、提交表单与重交入口都必须调用它，
//! 避免各处各算一套导致界面状态不一致。

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::models::assignments::entities::Assignment;
use crate::models::submissions::entities::{Submission, SubmissionStatus};

/// 截止紧迫度分类（仅用于展示排序，不参与资格判断）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/policy.ts")]
pub enum Urgency {
    Overdue, // 已截止
    Urgent,  // 24 小时内
    Soon,    // 3 天内
    Plenty,  // 3 天以上
}

/// 是否已过截止时间
///
/// 严格大于：恰好处于截止时刻不算过期（开边界）。
pub fn is_overdue(assignment: &Assignment, now: DateTime<Utc>) -> bool {
    now > assignment.deadline
}

/// 截止紧迫度
///
/// 天数 / 小时数按整值向零截断（与展示文案一致）。
pub fn urgency(assignment: &Assignment, now: DateTime<Utc>) -> Urgency {
    if is_overdue(assignment, now) {
        return Urgency::Overdue;
    }

    let days_left = (assignment.deadline - now).num_days();
    if days_left < 1 {
        Urgency::Urgent
    } else if days_left <= 3 {
        Urgency::Soon
    } else {
        Urgency::Plenty
    }
}

/// 截止状态的展示文案（"Overdue" / "5h left" / "3 days left"）
pub fn deadline_label(assignment: &Assignment, now: DateTime<Utc>) -> String {
    match urgency(assignment, now) {
        Urgency::Overdue => "Overdue".to_string(),
        Urgency::Urgent => {
            let hours_left = (assignment.deadline - now).num_hours();
            format!("{hours_left}h left")
        }
        Urgency::Soon | Urgency::Plenty => {
            let days_left = (assignment.deadline - now).num_days();
            format!("{days_left} days left")
        }
    }
}

/// 该学生当前是否可以提交该作业
///
/// 未过期，且没有先前提交或先前提交已被退回。可提交作业列表与
/// 重交资格都由此函数决定。
pub fn can_submit(
    assignment: &Assignment,
    prior_submission: Option<&Submission>,
    now: DateTime<Utc>,
) -> bool {
    if is_overdue(assignment, now) {
        return false;
    }
    match prior_submission {
        None => true,
        Some(submission) => submission.status == SubmissionStatus::Rejected,
    }
}

/// 作业列表排序：未过期在前，组内按截止时间升序
pub fn sort_for_listing(assignments: &mut [Assignment], now: DateTime<Utc>) {
    assignments.sort_by(|a, b| {
        let a_overdue = is_overdue(a, now);
        let b_overdue = is_overdue(b, now);
        a_overdue
            .cmp(&b_overdue)
            .then_with(|| a.deadline.cmp(&b.deadline))
    });
}
