//! Declarative schedule configuration
//!
//! YAML schema, loading, validation and CLI argument types.

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{parse_args, Cli, Command, CurveArgs, OutputFormat, SummarizeArgs, ValidateArgs};
pub use loader::{load_schedule_spec, parse_schedule_spec};
pub use schema::ScheduleSpec;
pub use validate::{validate_schedule, ValidationError};
