//! order-desk - 单用户订单记录终端
//!
//! # 架构概述
//!
//! 两个 JSON 文件分别保存待处理订单和已出餐订单，一个交互式菜单在它们之上
//! 提供新增、报表和出餐三项操作。每项操作都重新读取文件、在内存中修改、再整体写回。
//!
//! # 模块结构
//!
//! ```text
//! order-desk/src/
//! ├── core/          # 配置、错误
//! ├── console.rs     # 终端输入输出
//! ├── orders/        # 存储、新增订单、出餐
//! ├── printing/      # 报表渲染
//! ├── menu.rs        # 菜单循环
//! └── utils/         # 日志
//! ```

pub mod console;
pub mod core;
pub mod menu;
pub mod orders;
pub mod printing;
pub mod utils;

// Re-export 公共类型
pub use console::Console;
pub use crate::core::{Config, DeskError, Result};
pub use menu::{Menu, MenuChoice};
pub use orders::{AddOutcome, OrderStorage, ProcessOutcome, StorageError};
pub use printing::OrderReportRenderer;

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
