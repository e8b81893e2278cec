//! Domain types for the user resource.

use serde::{Deserialize, Serialize};

/// A stored user.
///
/// `id` is the database-assigned node id, set on create and immutable
/// afterwards. It is the sole lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Request payload for create and update.
///
/// Fields default when absent so an update always overwrites all three
/// properties (full-replace, not patch). A client-supplied `id` in the
/// body is ignored by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub age: i64,
}
