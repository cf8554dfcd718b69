//! 配置 - 文件位置、日志、报表宽度

use std::path::PathBuf;

use crate::orders::OrderStorage;

/// 待处理订单文件
pub const PENDING_FILE: &str = "orders.json";

/// 已出餐订单文件
pub const COMPLETED_FILE: &str = "output_orders.json";

/// 日志目录 (相对工作目录)
pub const LOG_DIR: &str = "logs";

/// 配置 - 所有配置项都有固定默认值
///
/// 不读取环境变量；两个文件名以常量形式显式传给存储层。
///
/// | 字段 | 默认值 | 说明 |
/// |------|--------|------|
/// | work_dir | `.` | 文件所在目录 |
/// | pending_file | `orders.json` | 待处理订单 |
/// | completed_file | `output_orders.json` | 已出餐订单 |
/// | log_level | `warn` | 日志级别 |
/// | log_dir | `logs` | 日志目录，相对工作目录；目录存在时写入按日滚动文件，否则输出到 stderr |
/// | report_width | 50 | 报表宽度 (列) |
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: PathBuf,
    pub pending_file: String,
    pub completed_file: String,
    /// 日志级别: trace | debug | info | warn | error
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    /// 报表分隔线宽度
    pub report_width: usize,
}

impl Config {
    /// 使用指定工作目录，其余保持默认
    ///
    /// 常用于测试场景
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }

    pub fn pending_path(&self) -> PathBuf {
        self.work_dir.join(&self.pending_file)
    }

    pub fn completed_path(&self) -> PathBuf {
        self.work_dir.join(&self.completed_file)
    }

    /// 待处理订单存储
    pub fn pending_storage(&self) -> OrderStorage {
        OrderStorage::at_path(self.pending_path())
    }

    /// 已出餐订单存储
    pub fn completed_storage(&self) -> OrderStorage {
        OrderStorage::at_path(self.completed_path())
    }

    /// 日志目录 (已拼接工作目录)
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_dir.as_deref().map(|dir| self.work_dir.join(dir))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            pending_file: PENDING_FILE.into(),
            completed_file: COMPLETED_FILE.into(),
            log_level: "warn".into(),
            log_dir: Some(PathBuf::from(LOG_DIR)),
            report_width: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.pending_path(), Path::new(".").join("orders.json"));
        assert_eq!(
            config.completed_path(),
            Path::new(".").join("output_orders.json")
        );
        assert_eq!(config.log_dir(), Some(Path::new(".").join("logs")));
    }

    #[test]
    fn test_with_work_dir() {
        let config = Config::with_work_dir("/tmp/desk");
        assert_eq!(config.pending_storage().path(), Path::new("/tmp/desk/orders.json"));
        assert_eq!(
            config.completed_storage().path(),
            Path::new("/tmp/desk/output_orders.json")
        );
        assert_eq!(config.report_width, 50);
        assert_eq!(config.log_dir(), Some(PathBuf::from("/tmp/desk/logs")));
    }

    #[test]
    fn test_log_dir_disabled() {
        let config = Config {
            log_dir: None,
            ..Config::with_work_dir("/tmp/desk")
        };
        assert!(config.log_dir().is_none());
    }
}
