//! 错误定义

use thiserror::Error;

use crate::orders::StorageError;

/// 顶层错误
///
/// 只有无法恢复的错误才会走到这里：存储损坏/不可写，或者终端读写失败。
/// 操作员输入错误不是错误，而是各操作的结果 (outcome)。
#[derive(Error, Debug)]
pub enum DeskError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Console I/O error: {0}")]
    Console(#[from] std::io::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DeskError>;
