// 集成测试公共设施
// 需要设置 DAL_TEST_DATABASE（一个可以随意写入的测试库）以及 DB_USER、DB_PASSWORD、DB_ADDR，
// 用 `cargo test -- --ignored` 运行。

#![allow(dead_code)]

use sqlx::mysql::MySqlPoolOptions;
use sqlx::{Executor, MySqlPool};
use storefront::database::connection::connect_options;
use storefront::{ConnectParams, Database, UserEntity, config::Config};
use uuid::Uuid;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    username VARCHAR(64) NOT NULL PRIMARY KEY,
    first_name VARCHAR(255) NOT NULL,
    last_name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    phone_num VARCHAR(32) NOT NULL,
    password VARCHAR(255) NOT NULL,
    birth_date VARCHAR(10) NOT NULL
) ENGINE = InnoDB
"#;

// 只在当前连接可见，遮住同名的 users 表
const CREATE_TEMPORARY_USERS_WITH_DATE: &str = r#"
CREATE TEMPORARY TABLE users (
    username VARCHAR(64) NOT NULL PRIMARY KEY,
    first_name VARCHAR(255) NOT NULL,
    last_name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    phone_num VARCHAR(32) NOT NULL,
    password VARCHAR(255) NOT NULL,
    birth_date DATE NOT NULL
) ENGINE = InnoDB
"#;

const CREATE_PRODUCTS: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    name VARCHAR(128) NOT NULL,
    price DECIMAL(10, 2) NOT NULL,
    amount INT NOT NULL,
    description VARCHAR(255) NOT NULL
) ENGINE = InnoDB
"#;

/// 测试库的连接参数
pub fn test_params() -> ConnectParams {
    let database = std::env::var("DAL_TEST_DATABASE").expect("DAL_TEST_DATABASE must be set");
    let config = Config::from_env().expect("DB_USER, DB_PASSWORD, DB_ADDR and DB_NAME must be set");

    let mut params = config.connect_params();
    params.database = database;
    params
}

/// 每个连接都开启严格模式，超长数据直接报错而不是截断
async fn strict_pool(params: &ConnectParams, max_connections: u32) -> MySqlPool {
    let options = connect_options(params).expect("invalid DB_ADDR");

    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET SESSION sql_mode = 'STRICT_ALL_TABLES'")
                    .await?;
                Ok(())
            })
        })
        .connect_with(options)
        .await
        .expect("failed to connect to test database")
}

/// 连接测试库并确保表存在
pub async fn test_database() -> Database {
    let params = test_params();
    let db = Database::from_pool(strict_pool(&params, params.max_connections).await);

    sqlx::query(CREATE_USERS)
        .execute(db.pool())
        .await
        .expect("failed to create users table");
    sqlx::query(CREATE_PRODUCTS)
        .execute(db.pool())
        .await
        .expect("failed to create products table");

    db
}

/// 单连接的数据库句柄，users 是 birth_date 为 DATE 的临时表
pub async fn date_column_database() -> Database {
    let params = test_params();
    let db = Database::from_pool(strict_pool(&params, 1).await);

    sqlx::query(CREATE_TEMPORARY_USERS_WITH_DATE)
        .execute(db.pool())
        .await
        .expect("failed to create temporary users table");

    db
}

/// 生成不会冲突、也不含 LIKE 通配符的用户名
pub fn unique_username() -> String {
    format!("u{}", Uuid::new_v4().simple())
}

pub fn sample_user(username: &str) -> UserEntity {
    UserEntity {
        username: username.to_string(),
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        email: "jane@example.com".into(),
        phone_num: "555-0101".into(),
        password: "hunter2".into(),
        birth_date: "1990-01-01".into(),
    }
}
