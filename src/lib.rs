pub mod chart;
pub mod schema;
pub mod units;

pub use schema::{ArgSchema, Field, FieldKind, SchemaViolation};
