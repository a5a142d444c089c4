//! Alerta Server - 市民事件报警平台后端
//!
//! # 架构概述
//!
//! 本模块是 Alerta Server 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (alert / comment / like / user_profile)
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **趋势排序** (`trend`): 确定性热度排序规则
//! - **AI 分析** (`ai`): 生成式文本服务关键词提取
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! alerta-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repository)
//! ├── trend/         # 热度排序
//! ├── ai/            # 关键词提取客户端
//! └── utils/         # 工具函数
//! ```

pub mod ai;
pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod trend;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ___    __          __
   /   |  / /__  _____/ /_____ _
  / /| | / / _ \/ ___/ __/ __ `/
 / ___ |/ /  __/ /  / /_/ /_/ /
/_/  |_/_/\___/_/   \__/\__,_/
    "#
    );
}
