use budget_diary::config::Config;
use budget_diary::{backend, database};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Missing DATABASE_URL or PIN_SECRET aborts here, before the listener
    // binds.
    let config = Config::from_env()?;

    let pool = database::db::connection::get_db_pool(&config.database_url).await?;
    database::db::migrate::run_migrations(&pool).await?;
    database::db::queries::category::seed_default_categories(&pool).await?;

    backend::run_server(&config, pool).await?;

    Ok(())
}
