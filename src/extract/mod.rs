pub(crate) mod outlets;
