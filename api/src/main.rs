use std::sync::Arc;

use ca_api::{app::run_server, telemetry::init_tracing};
use ca_infra::{DatabasePool, InMemoryUserRepository, MySqlUserRepository};
use ca_shared::config::{AppConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real deployments set the environment directly
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.environment);

    tracing::info!(environment = %config.environment, "Starting Course App API Server");

    if config.auth.jwt.is_using_default_secret() {
        tracing::warn!(
            "Token secrets are the built-in defaults; \
             set ACCESS_TOKEN_SECRET and REFRESH_TOKEN_SECRET"
        );
    }

    match config.database.backend()? {
        StorageBackend::MySql => {
            let pool = DatabasePool::new(&config.database).await?;
            pool.run_migrations().await?;
            if !pool.health_check().await? {
                anyhow::bail!("database health check returned an unexpected value");
            }
            tracing::info!("{}", pool.get_statistics());

            let repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
            let result = run_server(config, repository).await;

            pool.close().await;
            result?;
        }
        StorageBackend::Memory => {
            tracing::warn!("Using the in-memory user store; accounts are lost on restart");
            run_server(config, Arc::new(InMemoryUserRepository::new())).await?;
        }
    }

    Ok(())
}
