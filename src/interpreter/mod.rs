//! Interpreter Module
//!
//! Command-line tokenizing, PATH resolution and binary dispatch.

pub mod command_resolution;
pub mod dispatch;
pub mod errors;
pub mod tokenizer;

pub use dispatch::Dispatcher;
pub use errors::DispatchError;
pub use tokenizer::tokenize;
