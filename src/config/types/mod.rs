//! Configuration utility types.
//!
//! | Module  | Purpose                                   |
//! |---------|-------------------------------------------|
//! | `error` | Load and resolution errors, diagnostics   |
//! | `field` | Field paths named in diagnostics          |

mod error;
mod field;

pub use error::{
    ConfigDiagnostic, ConfigError, ConfigurationError, ErrorKind, HandleProblem, SiteUrlProblem,
};
pub use field::FieldPath;
