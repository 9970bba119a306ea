// 数据库模块
// 包含连接管理、实体定义和存储库操作

pub mod connection; // 连接池与连接参数
pub mod models; // 数据库实体定义
pub mod operations; // 数据库操作实现

// 重新导出常用类型，方便其他模块使用
pub use connection::ConnectParams;
pub use models::product::ProductEntity;
pub use models::user::UserEntity;
pub use operations::product::ProductOperation;
pub use operations::user::{FieldUpdate, UserField, UserOperation, plan_field_updates};
