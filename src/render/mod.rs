pub(crate) mod source;
pub(crate) mod swift;
pub(crate) mod writer;
