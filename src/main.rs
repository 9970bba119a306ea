use storefront::{Database, config::Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env()?;

    // 连接数据库
    let db = Database::connect(&config.connect_params()).await?;

    // 列出商品
    let products = db.products().list_all().await?;
    tracing::info!("Found {} product(s)", products.len());
    println!("{}", serde_json::to_string_pretty(&products)?);

    db.close().await;
    Ok(())
}
