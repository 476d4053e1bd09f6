use rides::config::Config;
use rides::db::DbPool;
use rides::engine::Engine;
use rides::error::Error;
use rides::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let DbPool(pool) = DbPool::new(&config.database_url, config.max_connections).await?;

    let engine = Engine::new(pool).await?;

    serve(engine, config.addr()).await
}
