//! Bookstore - 作者 / 图书目录服务
//!
//! - Domain: author/, book/
//! - Application: commands, queries, ports
//! - Infrastructure: http, persistence

use std::sync::Arc;

use bookstore::config::{load_config, print_config, AppConfig};
use bookstore::infrastructure::http::{AppState, HttpServer, ServerConfig};
use bookstore::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteAuthorRepository, SqliteBookRepository,
};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},bookstore={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        // 收不到信号就一直运行
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Bookstore - 作者 / 图书目录服务");
    print_config(&config);

    // 确保数据目录存在
    if !config.database.is_in_memory() {
        if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库，内存库只能有一个连接
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: if config.database.is_in_memory() {
            1
        } else {
            config.database.max_connections
        },
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let author_repo = Arc::new(SqliteAuthorRepository::new(pool.clone()));
    let book_repo = Arc::new(SqliteBookRepository::new(pool.clone()));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(author_repo, book_repo);
    let server = HttpServer::new(server_config, state);

    server.run_with_shutdown(shutdown_signal()).await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
