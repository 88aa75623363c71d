//! 实体存储层
//!
//! 作业与提交集合的唯一所有者：负责合法性校验、ID 与时间戳生成、
//! 以及每次变更后的同步回写。查询一律返回新的 Vec，从不外借内部
//! 集合的引用。按单写者会话设计，无锁也无并发合并策略（持久化
//! 粒度上的 last-write-wins）。

use chrono::Utc;
use tracing::info;

use crate::errors::{AssignTrackError, Result};
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::models::submissions::requests::{CreateSubmissionRequest, ReviewSubmissionRequest};
use crate::storage::{PersistenceAdapter, SeedData};
use crate::utils::time::parse_deadline;
use crate::utils::validate::{validate_non_empty, validate_submission_url};

pub mod ids;

use ids::IdGenerator;

pub struct EntityStore {
    assignments: Vec<Assignment>,
    submissions: Vec<Submission>,
    ids: IdGenerator,
    persistence: PersistenceAdapter,
}

impl EntityStore {
    /// 从持久化层加载集合并建立存储实例
    ///
    /// 必须在服务任何查询之前调用；槽位缺失时使用种子集合。
    pub fn load(persistence: PersistenceAdapter, seed: SeedData) -> Self {
        let (assignments, submissions) = persistence.load(seed);
        info!(
            "Entity store loaded: {} assignments, {} submissions",
            assignments.len(),
            submissions.len()
        );
        Self {
            assignments,
            submissions,
            ids: IdGenerator::new(),
            persistence,
        }
    }

    /// 发布作业（教师操作）
    pub fn create_assignment(&mut self, request: CreateAssignmentRequest) -> Result<Assignment> {
        validate_non_empty(&request.title, "title").map_err(AssignTrackError::validation)?;
        validate_non_empty(&request.description, "description")
            .map_err(AssignTrackError::validation)?;
        let deadline = parse_deadline(&request.deadline)?;

        let assignment = Assignment {
            id: self.ids.next_id(),
            title: request.title,
            description: request.description,
            deadline,
            instructor_id: request.instructor_id,
        };
        self.assignments.push(assignment.clone());
        self.flush();
        Ok(assignment)
    }

    /// 创建提交（学生操作），初始状态 pending
    ///
    /// 同一 (作业, 学生) 已存在非 rejected 提交时拒绝。原实现把这条
    /// 不变式留给界面过滤，这里收紧到存储层（见 DESIGN.md）。
    pub fn create_submission(&mut self, request: CreateSubmissionRequest) -> Result<Submission> {
        if !self
            .assignments
            .iter()
            .any(|a| a.id == request.assignment_id)
        {
            return Err(AssignTrackError::not_found(format!(
                "assignment '{}' does not exist",
                request.assignment_id
            )));
        }
        validate_submission_url(&request.submission_url).map_err(AssignTrackError::validation)?;
        if self.has_active_submission(&request.assignment_id, &request.student_id) {
            return Err(AssignTrackError::validation(format!(
                "student '{}' already has an active submission for assignment '{}'",
                request.student_id, request.assignment_id
            )));
        }

        let submission = Submission {
            id: self.ids.next_id(),
            assignment_id: request.assignment_id,
            student_id: request.student_id,
            submission_url: request.submission_url,
            note: request.note,
            feedback: None,
            status: SubmissionStatus::Pending,
            submitted_at: Utc::now(),
            student: request.student,
            assignment: request.assignment,
        };
        self.submissions.push(submission.clone());
        self.flush();
        Ok(submission)
    }

    /// 评审提交（教师操作）
    ///
    /// 原地合并 status / feedback，其余字段不动；状态间可任意改判。
    pub fn review_submission(
        &mut self,
        id: &str,
        updates: ReviewSubmissionRequest,
    ) -> Result<Submission> {
        let submission = self
            .submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| {
                AssignTrackError::not_found(format!("submission '{id}' does not exist"))
            })?;

        submission.status = updates.status;
        if let Some(feedback) = updates.feedback {
            submission.feedback = Some(feedback);
        }
        let reviewed = submission.clone();
        self.flush();
        Ok(reviewed)
    }

    /// 全部作业（插入顺序的副本）
    pub fn assignments(&self) -> Vec<Assignment> {
        self.assignments.clone()
    }

    /// 全部提交（插入顺序的副本）
    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.clone()
    }

    /// 某教师发布的作业
    pub fn assignments_by_instructor(&self, instructor_id: &str) -> Vec<Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.instructor_id == instructor_id)
            .cloned()
            .collect()
    }

    /// 某学生的全部提交
    pub fn submissions_by_student(&self, student_id: &str) -> Vec<Submission> {
        self.submissions
            .iter()
            .filter(|s| s.student_id == student_id)
            .cloned()
            .collect()
    }

    /// 某作业收到的全部提交
    pub fn submissions_by_assignment(&self, assignment_id: &str) -> Vec<Submission> {
        self.submissions
            .iter()
            .filter(|s| s.assignment_id == assignment_id)
            .cloned()
            .collect()
    }

    fn has_active_submission(&self, assignment_id: &str, student_id: &str) -> bool {
        self.submissions.iter().any(|s| {
            s.assignment_id == assignment_id
                && s.student_id == student_id
                && s.status != SubmissionStatus::Rejected
        })
    }

    // 变更后的同步回写，失败由适配层记录日志，不阻断内存变更
    fn flush(&self) {
        self.persistence
            .save(&self.assignments, &self.submissions);
    }
}
