#![allow(clippy::module_inception)]
pub mod alert;
pub mod compiler;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod printer;
pub mod util;

pub use compiler::{error::LabelError, parse_labels, parse_labels_with, ParseOptions};
pub use matcher::{list::DuplicatePolicy, policy::LabelPolicy, Matcher};
pub use printer::{format_matchers, matcher_to_string};

pub const LANG_VERSION: &str = env!("CARGO_PKG_VERSION");
