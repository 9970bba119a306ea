// 商品存储库

use std::sync::Arc;

use sqlx::MySqlPool;

use crate::database::models::product::ProductEntity;
use crate::error::DalResult;

#[derive(Clone)]
pub struct ProductOperation {
    db: Arc<MySqlPool>,
}

impl ProductOperation {
    pub fn new(db: Arc<MySqlPool>) -> Self {
        Self { db }
    }

    /// 列出所有商品，顺序由数据库决定；空表返回空列表
    pub async fn list_all(&self) -> DalResult<Vec<ProductEntity>> {
        let products = sqlx::query_as::<_, ProductEntity>("SELECT * FROM products")
            .fetch_all(&*self.db)
            .await?;

        tracing::debug!("Fetched {} product(s)", products.len());
        Ok(products)
    }
}
