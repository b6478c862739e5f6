pub mod ast;
pub mod error;
pub mod op;
pub mod parser;
mod tests;
