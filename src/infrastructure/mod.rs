//! External dependency implementations (ports + adapters).

pub mod neo4j;
pub mod ports;
