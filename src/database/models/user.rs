use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, Row};

/// 生日列的文本格式
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// 用户数据库实体，对应 users 表
///
/// 列顺序：username, first_name, last_name, email, phone_num, password, birth_date。
/// 用户名唯一性由表约束保证。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_num: String,
    /// 原样存储，哈希由调用方负责
    pub password: String,
    /// 字符串形式的日期，例如 1990-04-01
    pub birth_date: String,
}

impl<'r> FromRow<'r, MySqlRow> for UserEntity {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            username: row.try_get("username")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone_num: row.try_get("phone_num")?,
            password: row.try_get("password")?,
            birth_date: birth_date_from_row(row)?,
        })
    }
}

/// birth_date 可能是文本列也可能是 DATE 列，DATE 列按 `%Y-%m-%d` 转成字符串
fn birth_date_from_row(row: &MySqlRow) -> Result<String, sqlx::Error> {
    match row.try_get::<String, _>("birth_date") {
        Ok(value) => Ok(value),
        Err(sqlx::Error::ColumnDecode { .. }) => {
            let date: NaiveDate = row.try_get("birth_date")?;
            Ok(format_birth_date(date))
        }
        Err(e) => Err(e),
    }
}

pub fn format_birth_date(date: NaiveDate) -> String {
    date.format(BIRTH_DATE_FORMAT).to_string()
}
