//! Neo4j user repository implementation.
//!
//! Users are stored as `(:User {name, email, age})` nodes. The public
//! id is the database-assigned internal node id, returned as
//! `id(u)` alongside the node in every query.

use async_trait::async_trait;
use neo4rs::{query, Graph, Row};

use super::helpers::{NodeExt, RowExt};
use crate::domain::{User, UserInput};
use crate::infrastructure::ports::{RepoError, UserRepo};

/// Repository for User operations.
pub struct Neo4jUserRepo {
    graph: Graph,
}

impl Neo4jUserRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    fn row_to_user(&self, row: Row) -> Result<User, RepoError> {
        let id = row.get_i64_strict("id")?;
        let node = row.get_node("u")?;

        Ok(User {
            id,
            name: node.get_string_strict("name")?,
            email: node.get_string_strict("email")?,
            age: node.get_i64_strict("age")?,
        })
    }
}

#[async_trait]
impl UserRepo for Neo4jUserRepo {
    async fn create(&self, input: UserInput) -> Result<User, RepoError> {
        let q = query(
            "CREATE (u:User {name: $name, email: $email, age: $age})
            RETURN u, id(u) AS id",
        )
        .param("name", input.name)
        .param("email", input.email)
        .param("age", input.age);

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("query", e))?;

        let row = result
            .next()
            .await
            .map_err(|e| RepoError::database("query", e))?
            .ok_or_else(|| RepoError::database("query", "create returned no row"))?;

        let user = self.row_to_user(row)?;
        tracing::debug!(id = user.id, "Created user");
        Ok(user)
    }

    async fn get(&self, id: i64) -> Result<User, RepoError> {
        let q = query("MATCH (u:User) WHERE id(u) = $id RETURN u, id(u) AS id").param("id", id);

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("query", e))?;

        match result
            .next()
            .await
            .map_err(|e| RepoError::database("query", e))?
        {
            Some(row) => self.row_to_user(row),
            None => Err(RepoError::NotFound),
        }
    }

    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let q = query("MATCH (u:User) RETURN u, id(u) AS id ORDER BY u.name");

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("query", e))?;

        let mut users = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database("query", e))?
        {
            users.push(self.row_to_user(row)?);
        }

        Ok(users)
    }

    async fn update(&self, id: i64, input: UserInput) -> Result<User, RepoError> {
        let q = query(
            "MATCH (u:User) WHERE id(u) = $id
            SET u.name = $name, u.email = $email, u.age = $age
            RETURN u, id(u) AS id",
        )
        .param("id", id)
        .param("name", input.name)
        .param("email", input.email)
        .param("age", input.age);

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("query", e))?;

        match result
            .next()
            .await
            .map_err(|e| RepoError::database("query", e))?
        {
            Some(row) => {
                let user = self.row_to_user(row)?;
                tracing::debug!(id = user.id, "Updated user");
                Ok(user)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        // count(u) after DELETE is the number of nodes removed, which
        // doubles as the existence check.
        let q = query("MATCH (u:User) WHERE id(u) = $id DELETE u RETURN count(u) AS deleted")
            .param("id", id);

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("query", e))?;

        let row = result
            .next()
            .await
            .map_err(|e| RepoError::database("query", e))?
            .ok_or_else(|| RepoError::database("query", "delete returned no row"))?;

        if row.get_i64_strict("deleted")? == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(id, "Deleted user");
        Ok(())
    }
}
