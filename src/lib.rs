use std::sync::Arc;

use sqlx::MySqlPool;

pub mod config;
pub mod database;
pub mod error;

pub use database::{ConnectParams, ProductEntity, ProductOperation, UserEntity, UserOperation};
pub use error::{DalError, DalResult};

/// 共享的数据库句柄
///
/// 通过 [`Database::connect`] 创建一次，之后显式传给使用方。
/// 克隆后共享同一个连接池。
#[derive(Clone)]
pub struct Database {
    pool: Arc<MySqlPool>,
}

impl Database {
    /// 建立连接池并 ping 数据库，失败返回 [`DalError::Connection`]
    ///
    /// 地址不是合法的 `host:port` 时在连接之前就返回 [`DalError::InvalidAddress`]，
    /// 不会归入 `Connection`，调用方需要分别处理这两种错误。
    pub async fn connect(params: &ConnectParams) -> DalResult<Self> {
        let pool = database::connection::open_pool(params).await?;
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: MySqlPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub fn users(&self) -> UserOperation {
        UserOperation::new(self.pool.clone())
    }

    pub fn products(&self) -> ProductOperation {
        ProductOperation::new(self.pool.clone())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
