//! Option schema and normalizers shared by both resolution modes

pub mod normalize;
mod schema;
mod value;

pub use normalize::{normalize, ValidationError};
pub use schema::{Choice, OptionSchema, OptionSpec, OptionType, SchemaError, WIZARD_OPTION};
pub use value::{option_key, OptionValue, RawValue};
