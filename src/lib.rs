//! AssignTrack - 作业提交追踪系统核心
//!
//! 作业发布、学生提交与教师评审的生命周期存储核心。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `policy`: 截止时间与提交资格策略（纯函数）
//! - `store`: 实体存储层（作业与提交的集合所有者）
//! - `storage`: 键值持久化层（JSON 文件 / 内存）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod policy;
pub mod storage;
pub mod store;
pub mod utils;
