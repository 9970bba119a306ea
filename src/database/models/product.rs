use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 商品数据库实体，对应 products 表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ProductEntity {
    pub name: String,
    /// DECIMAL 列
    pub price: Decimal,
    /// 库存数量
    pub amount: i32,
    pub description: String,
}
