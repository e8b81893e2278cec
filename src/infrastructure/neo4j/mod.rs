//! Neo4j database implementations.

use anyhow::{Context, Result};
use neo4rs::{query, Graph};

mod helpers;
mod user_repo;

#[cfg(test)]
mod test_harness;

pub use user_repo::Neo4jUserRepo;

/// Connect to Neo4j and verify connectivity before returning the driver.
///
/// The returned `Graph` is `Clone` and pools bolt connections, so one
/// instance is shared by all in-flight requests. There is no explicit
/// close; the pool is released when the last clone is dropped.
pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Graph> {
    let graph = Graph::new(uri, user, password)
        .await
        .with_context(|| format!("failed to create Neo4j driver for {uri}"))?;

    // The driver connects lazily, so probe before declaring victory.
    graph
        .run(query("RETURN 1"))
        .await
        .context("Neo4j connectivity check failed")?;

    tracing::info!("Connected to Neo4j at {}", uri);
    Ok(graph)
}
