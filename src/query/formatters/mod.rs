pub mod plain;
pub mod json;

pub use plain::PlainTextFormatter;
pub use json::JsonFormatter;
