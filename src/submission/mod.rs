pub mod parser;
pub mod pipeline;
pub mod recorder;
pub mod validate;
