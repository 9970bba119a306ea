// 用户存储库
// 包含用户注册、查询、更新相关的数据库操作

use std::sync::Arc;

use sqlx::{Executor, MySql, MySqlPool};

use crate::database::models::user::UserEntity;
use crate::error::{DalError, DalResult};

/// 可由 [`UserOperation::update`] 单独更新的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    PhoneNum,
}

impl UserField {
    pub fn column(&self) -> &'static str {
        match self {
            UserField::FirstName => "first_name",
            UserField::LastName => "last_name",
            UserField::Email => "email",
            UserField::PhoneNum => "phone_num",
        }
    }

    fn update_statement(&self) -> &'static str {
        match self {
            UserField::FirstName => "UPDATE users SET first_name = ? WHERE username LIKE ?",
            UserField::LastName => "UPDATE users SET last_name = ? WHERE username LIKE ?",
            UserField::Email => "UPDATE users SET email = ? WHERE username LIKE ?",
            UserField::PhoneNum => "UPDATE users SET phone_num = ? WHERE username LIKE ?",
        }
    }
}

/// 一次单字段更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate<'a> {
    pub field: UserField,
    pub value: &'a str,
}

/// 计算需要执行的字段更新，按 first_name、last_name、email、phone_num 的顺序
///
/// 注意：first_name 与已存储的 last_name 比较，而不是已存储的 first_name。
/// 新的名字等于旧的姓时不会更新名字。
pub fn plan_field_updates<'a>(stored: &UserEntity, new_user: &'a UserEntity) -> Vec<FieldUpdate<'a>> {
    let checks = [
        (UserField::FirstName, &stored.last_name, &new_user.first_name),
        (UserField::LastName, &stored.last_name, &new_user.last_name),
        (UserField::Email, &stored.email, &new_user.email),
        (UserField::PhoneNum, &stored.phone_num, &new_user.phone_num),
    ];

    checks
        .into_iter()
        .filter(|(_, old, new)| old != new)
        .map(|(field, _, new)| FieldUpdate {
            field,
            value: new.as_str(),
        })
        .collect()
}

async fn fetch_user<'e, E>(executor: E, username: &str) -> DalResult<UserEntity>
where
    E: Executor<'e, Database = MySql>,
{
    sqlx::query_as::<_, UserEntity>("SELECT * FROM users WHERE username LIKE ?")
        .bind(username)
        .fetch_optional(executor)
        .await?
        .ok_or(DalError::NotFound)
}

/// 用户存储库，处理所有与用户相关的数据库操作
#[derive(Clone)]
pub struct UserOperation {
    db: Arc<MySqlPool>,
}

impl UserOperation {
    /// 创建新的用户存储库实例
    pub fn new(db: Arc<MySqlPool>) -> Self {
        Self { db }
    }

    /// 注册用户，返回受影响行数
    ///
    /// 不做重名检查，用户名重复时由唯一约束报错，
    /// 可用 [`DalError::is_duplicate_key`] 判断。
    pub async fn register(&self, user: &UserEntity) -> DalResult<u64> {
        tracing::debug!("Registering user: {}", user.username);

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, first_name, last_name, email, phone_num, password, birth_date)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.phone_num)
        .bind(&user.password)
        .bind(&user.birth_date)
        .execute(&*self.db)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected()),
            Err(e) => {
                tracing::warn!("Failed to register user {}: {:?}", user.username, e);
                Err(e.into())
            }
        }
    }

    /// 根据用户名查找用户
    ///
    /// 使用 LIKE 匹配，通配符 `%` 和 `_` 会生效；有多行匹配时只取第一行。
    pub async fn find_by_name(&self, username: &str) -> DalResult<UserEntity> {
        tracing::debug!("Looking up user: {}", username);
        fetch_user(&*self.db, username).await
    }

    /// 更新名字、姓、邮箱、电话中发生变化的字段
    ///
    /// 读取与所有更新在同一事务中执行，任一语句失败则整体回滚。
    /// 密码和生日不在此处更新。
    pub async fn update(&self, new_user: &UserEntity) -> DalResult<()> {
        let username = new_user.username.as_str();
        let mut tx = self.db.begin().await?;

        let stored = fetch_user(&mut *tx, username).await?;
        let updates = plan_field_updates(&stored, new_user);

        for update in &updates {
            tracing::debug!("Updating {} for user {}", update.field.column(), username);

            sqlx::query(update.field.update_statement())
                .bind(update.value)
                .bind(username)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::warn!(
                        "Failed to update {} for user {}: {:?}",
                        update.field.column(),
                        username,
                        e
                    );
                    e
                })?;
        }

        tx.commit().await?;

        if !updates.is_empty() {
            tracing::info!("Updated {} field(s) for user {}", updates.len(), username);
        }
        Ok(())
    }

    /// 直接覆盖密码，返回受影响行数
    pub async fn update_password(&self, username: &str, password: &str) -> DalResult<u64> {
        tracing::debug!("Updating password for user: {}", username);

        let result = sqlx::query("UPDATE users SET password = ? WHERE username LIKE ?")
            .bind(password)
            .bind(username)
            .execute(&*self.db)
            .await?;

        Ok(result.rows_affected())
    }

    /// 校验密码是否与已存储的值一致
    pub async fn check_password(&self, username: &str, password: &str) -> DalResult<bool> {
        let user = self.find_by_name(username).await?;
        Ok(user.password == password)
    }
}
