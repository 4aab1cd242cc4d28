pub(crate) mod code;
pub(crate) mod input;
