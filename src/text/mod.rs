pub(crate) mod error;
pub(crate) mod lexer;
pub(crate) mod parser;
