pub mod parser;
pub mod schema;
pub mod types;
pub mod credentials;

pub use types::*;
pub use parser::{load_runtime, parse_config, resolve_runtime, RuntimeOverrides};
