use thiserror::Error;

/// 数据访问层错误
#[derive(Debug, Error)]
pub enum DalError {
    /// 建立连接池或 ping 失败
    #[error("failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    /// 地址格式无效，期望 host:port
    #[error("invalid database address: {0}")]
    InvalidAddress(String),

    /// 查询没有匹配任何行
    #[error("error: not found")]
    NotFound,

    /// 其他数据库错误（查询、解码、约束冲突等）
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type DalResult<T> = Result<T, DalError>;

impl DalError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DalError::NotFound)
    }

    /// 是否为唯一键冲突（例如重复注册同一用户名）
    pub fn is_duplicate_key(&self) -> bool {
        match self {
            DalError::Database(sqlx::Error::Database(e)) => e.is_unique_violation(),
            _ => false,
        }
    }
}
