use super::*;
use crate::corpus::Scenario;
use anyhow::Context;
use deadpool_postgres::Manager;
use deadpool_postgres::ManagerConfig;
use deadpool_postgres::Pool;
use deadpool_postgres::RecyclingMethod;
use tokio_postgres::Client;
use tokio_postgres::NoTls;

/// Opens a dedicated connection. The connection task runs in the background
/// and logs if it ever fails.
pub async fn db(url: &str) -> anyhow::Result<Client> {
    log::info!("connecting to database");
    let (client, connection) = tokio_postgres::connect(url, NoTls)
        .await
        .context("database connection failed")?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(client)
}

/// Builds the server's connection pool. Connections open lazily on first use.
pub fn pool(url: &str, size: usize) -> anyhow::Result<Pool> {
    let config = url
        .parse::<tokio_postgres::Config>()
        .context("invalid DB_URL")?;
    let manager = Manager::from_config(
        config,
        NoTls,
        ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        },
    );
    Ok(Pool::builder(manager).max_size(size).build()?)
}

/// Creates the table and its indices if they do not exist yet.
pub async fn migrate(client: &Client) -> anyhow::Result<()> {
    log::info!("preparing table ({})", Scenario::name());
    client.batch_execute(Scenario::creates()).await?;
    client.batch_execute(Scenario::indices()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_urls_are_rejected() {
        assert!(pool("host=localhost port=not-a-port", 4).is_err());
    }

    #[tokio::test]
    async fn pools_build_without_connecting() {
        let pool = pool("postgres://nobody@127.0.0.1:9/nothing", 4).unwrap();
        assert_eq!(pool.status().max_size, 4);
    }
}
