//! 首次运行的种子数据
//!
//! 槽位缺失或解析失败时由 `PersistenceAdapter::load` 回退使用，
//! 覆盖三种提交状态与可选字段的省略情形。

use chrono::{DateTime, Utc};

use crate::models::assignments::entities::Assignment;
use crate::models::submissions::entities::{
    AssignmentSnapshot, StudentSnapshot, Submission, SubmissionStatus,
};
use crate::utils::time::parse_deadline;

/// 加载时使用的默认集合
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub assignments: Vec<Assignment>,
    pub submissions: Vec<Submission>,
}

impl SeedData {
    /// 空种子（测试与不需要示例数据的部署）
    pub fn empty() -> Self {
        Self::default()
    }
}

fn ts(value: &str) -> DateTime<Utc> {
    parse_deadline(value).expect("Invalid seed timestamp")
}

fn assignment(id: &str, title: &str, description: &str, deadline: &str) -> Assignment {
    Assignment {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        deadline: ts(deadline),
        instructor_id: "1".to_string(),
    }
}

/// 示例数据集：一位教师的五份作业与四位学生的六份提交
pub fn default_seed() -> SeedData {
    let assignments = vec![
        assignment(
            "1",
            "React Components Project",
            "Create a comprehensive React application showcasing different component patterns \
             including functional components, hooks, and state management. Build a small \
             e-commerce product catalog with filtering and search functionality.",
            "2024-02-15T23:59:59",
        ),
        assignment(
            "2",
            "Database Design Assignment",
            "Design and implement a relational database schema for a library management system. \
             Include proper normalization, foreign key relationships, and create sample queries \
             for common operations.",
            "2024-02-20T23:59:59",
        ),
        assignment(
            "3",
            "API Integration Task",
            "Build a web application that integrates with a public REST API (such as \
             OpenWeatherMap or JSONPlaceholder). Implement proper error handling, loading \
             states, and responsive design.",
            "2024-02-25T23:59:59",
        ),
        assignment(
            "4",
            "CSS Grid Layout Challenge",
            "Create a responsive webpage layout using CSS Grid and Flexbox. The layout should \
             adapt to different screen sizes and include a header, sidebar, main content area, \
             and footer.",
            "2024-02-18T23:59:59",
        ),
        assignment(
            "5",
            "JavaScript Algorithms Practice",
            "Solve a series of algorithm problems including array manipulation, string \
             processing, and data structure operations. Focus on time complexity optimization.",
            "2024-02-12T23:59:59",
        ),
    ];

    let john = StudentSnapshot {
        name: "John Student".to_string(),
        email: "student@example.com".to_string(),
    };

    let submissions = vec![
        Submission {
            id: "1".to_string(),
            assignment_id: "1".to_string(),
            student_id: "2".to_string(),
            submission_url: "https://github.com/student/react-components-project".to_string(),
            note: Some(
                "Implemented all required features including search, filtering, and responsive \
                 design. Added some extra animations for better UX."
                    .to_string(),
            ),
            feedback: Some(
                "Excellent work! Your component structure is clean and the state management is \
                 well implemented. Great attention to detail with the animations."
                    .to_string(),
            ),
            status: SubmissionStatus::Accepted,
            submitted_at: ts("2024-02-10T14:30:00"),
            student: john.clone(),
            assignment: AssignmentSnapshot {
                title: "React Components Project".to_string(),
            },
        },
        Submission {
            id: "2".to_string(),
            assignment_id: "4".to_string(),
            student_id: "2".to_string(),
            submission_url: "https://codepen.io/student/css-grid-layout".to_string(),
            note: Some(
                "Created a responsive layout that works on mobile, tablet, and desktop. Used CSS \
                 Grid for the main layout and Flexbox for components."
                    .to_string(),
            ),
            feedback: Some(
                "Good responsive implementation. Consider using CSS custom properties for better \
                 maintainability."
                    .to_string(),
            ),
            status: SubmissionStatus::Accepted,
            submitted_at: ts("2024-02-08T16:45:00"),
            student: john.clone(),
            assignment: AssignmentSnapshot {
                title: "CSS Grid Layout Challenge".to_string(),
            },
        },
        Submission {
            id: "3".to_string(),
            assignment_id: "5".to_string(),
            student_id: "2".to_string(),
            submission_url: "https://github.com/student/js-algorithms".to_string(),
            note: Some(
                "Solved all problems with optimal time complexity. Included detailed comments \
                 explaining the approach."
                    .to_string(),
            ),
            feedback: Some(
                "The solutions are correct but some could be optimized further. Review the \
                 sorting algorithms section."
                    .to_string(),
            ),
            status: SubmissionStatus::Rejected,
            submitted_at: ts("2024-02-05T09:15:00"),
            student: john,
            assignment: AssignmentSnapshot {
                title: "JavaScript Algorithms Practice".to_string(),
            },
        },
        Submission {
            id: "4".to_string(),
            assignment_id: "2".to_string(),
            student_id: "3".to_string(),
            submission_url: "https://github.com/alice/library-db-design".to_string(),
            note: Some(
                "Complete database schema with normalization up to 3NF. Included sample data and \
                 queries."
                    .to_string(),
            ),
            feedback: None,
            status: SubmissionStatus::Pending,
            submitted_at: ts("2024-02-11T11:20:00"),
            student: StudentSnapshot {
                name: "Alice Johnson".to_string(),
                email: "alice@example.com".to_string(),
            },
            assignment: AssignmentSnapshot {
                title: "Database Design Assignment".to_string(),
            },
        },
        Submission {
            id: "5".to_string(),
            assignment_id: "1".to_string(),
            student_id: "4".to_string(),
            submission_url: "https://github.com/bob/react-ecommerce".to_string(),
            note: Some(
                "Built the e-commerce catalog with Redux for state management. Added unit tests \
                 for components."
                    .to_string(),
            ),
            feedback: None,
            status: SubmissionStatus::Pending,
            submitted_at: ts("2024-02-12T08:30:00"),
            student: StudentSnapshot {
                name: "Bob Wilson".to_string(),
                email: "bob@example.com".to_string(),
            },
            assignment: AssignmentSnapshot {
                title: "React Components Project".to_string(),
            },
        },
        Submission {
            id: "6".to_string(),
            assignment_id: "3".to_string(),
            student_id: "5".to_string(),
            submission_url: "https://weather-app-demo.netlify.app".to_string(),
            note: Some(
                "Weather app using OpenWeatherMap API. Includes location detection and 5-day \
                 forecast."
                    .to_string(),
            ),
            feedback: Some(
                "Great API integration! The error handling is robust and the UI is intuitive."
                    .to_string(),
            ),
            status: SubmissionStatus::Accepted,
            submitted_at: ts("2024-02-09T13:45:00"),
            student: StudentSnapshot {
                name: "Emma Davis".to_string(),
                email: "emma@example.com".to_string(),
            },
            assignment: AssignmentSnapshot {
                title: "API Integration Task".to_string(),
            },
        },
    ];

    SeedData {
        assignments,
        submissions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_references_are_consistent() {
        let seed = default_seed();
        assert_eq!(seed.assignments.len(), 5);
        assert_eq!(seed.submissions.len(), 6);

        // 每份提交都指向存在的作业，快照标题与作业一致
        for submission in &seed.submissions {
            let assignment = seed
                .assignments
                .iter()
                .find(|a| a.id == submission.assignment_id)
                .expect("seed submission references a seed assignment");
            assert_eq!(submission.assignment.title, assignment.title);
        }
    }

    #[test]
    fn test_seed_ids_unique() {
        let seed = default_seed();
        let mut ids: Vec<&str> = seed.assignments.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seed.assignments.len());
    }

    #[test]
    fn test_seed_covers_all_statuses() {
        let seed = default_seed();
        for status in [
            SubmissionStatus::Pending,
            SubmissionStatus::Accepted,
            SubmissionStatus::Rejected,
        ] {
            assert!(seed.submissions.iter().any(|s| s.status == status));
        }
    }
}
