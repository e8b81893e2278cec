//! Typed deserialization helpers for Neo4j rows and nodes.
//!
//! Required fields are read strictly: a missing or mistyped property
//! surfaces as a `RepoError` naming the field instead of a fallback
//! value.

use neo4rs::{Node, Row};

use crate::infrastructure::ports::RepoError;

/// Extension trait for Neo4j Node deserialization.
pub trait NodeExt {
    /// Get a required string property.
    fn get_string_strict(&self, field: &str) -> Result<String, RepoError>;

    /// Get a required integer property.
    fn get_i64_strict(&self, field: &str) -> Result<i64, RepoError>;
}

impl NodeExt for Node {
    fn get_string_strict(&self, field: &str) -> Result<String, RepoError> {
        self.get(field).map_err(|e| {
            RepoError::database("parse", format!("missing or non-string property '{field}': {e}"))
        })
    }

    fn get_i64_strict(&self, field: &str) -> Result<i64, RepoError> {
        self.get(field).map_err(|e| {
            RepoError::database("parse", format!("missing or non-integer property '{field}': {e}"))
        })
    }
}

/// Extension trait for Neo4j Row deserialization.
pub trait RowExt {
    /// Get a required node column.
    fn get_node(&self, column: &str) -> Result<Node, RepoError>;

    /// Get a required integer column.
    fn get_i64_strict(&self, column: &str) -> Result<i64, RepoError>;
}

impl RowExt for Row {
    fn get_node(&self, column: &str) -> Result<Node, RepoError> {
        self.get(column).map_err(|e| {
            RepoError::database("parse", format!("missing node column '{column}': {e}"))
        })
    }

    fn get_i64_strict(&self, column: &str) -> Result<i64, RepoError> {
        self.get(column).map_err(|e| {
            RepoError::database("parse", format!("missing or non-integer column '{column}': {e}"))
        })
    }
}
