//!
//! # Attribute schema
//!
//! Declarative description of a resource kind's fields, their types,
//! presence and constraints, plus validation of value trees against it.
//!
mod attribute;
mod constraint;
mod error;
mod path;
mod validate;

pub use self::attribute::*;
pub use self::constraint::Constraint;
pub use self::error::ValidationError;
pub use self::error::Violation;
pub use self::path::AttributePath;
pub use self::path::PathStep;
pub use self::validate::validate_attributes;
