pub mod errors;

pub use errors::{AeolisError, AeolisErrorCategory};
