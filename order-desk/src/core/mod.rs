//! 核心模块 - 配置和错误定义
//!
//! # 模块结构
//!
//! - [`Config`] - 文件位置、日志设置
//! - [`DeskError`] - 顶层错误

pub mod config;
pub mod error;

pub use config::{COMPLETED_FILE, Config, LOG_DIR, PENDING_FILE};
pub use error::{DeskError, Result};
