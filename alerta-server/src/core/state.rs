use std::path::PathBuf;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::ai::KeywordExtractor;
use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是服务的核心数据结构，持有所有外部客户端的共享引用。
/// 所有句柄在启动时构造一次、显式注入，测试中可用假实现替换。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式文档数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | keyword_extractor | Arc<KeywordExtractor> | 关键词提取客户端 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务
    pub jwt_service: Arc<JwtService>,
    /// 生成式文本服务客户端
    pub keyword_extractor: Arc<KeywordExtractor>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替；测试中可直接注入假实现。
    pub fn new(
        config: Config,
        db: Surreal<Db>,
        jwt_service: Arc<JwtService>,
        keyword_extractor: Arc<KeywordExtractor>,
    ) -> Self {
        Self {
            config,
            db,
            jwt_service,
            keyword_extractor,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database/alerta.db)
    /// 3. JWT 服务、关键词提取客户端
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        // 0. Ensure work_dir structure exists
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {}", e)))?;

        // 1. Initialize DB
        let db_path = config.database_dir().join("alerta.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        // 2. Initialize services
        let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));
        let keyword_extractor = Arc::new(KeywordExtractor::new(
            config.ai_service_url.clone(),
            config.ai_model.clone(),
            config.ai_api_key.clone(),
        ));

        Ok(Self::new(
            config.clone(),
            db_service.db,
            jwt_service,
            keyword_extractor,
        ))
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 获取关键词提取客户端
    pub fn get_keyword_extractor(&self) -> Arc<KeywordExtractor> {
        self.keyword_extractor.clone()
    }
}
