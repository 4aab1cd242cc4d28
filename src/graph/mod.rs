pub(crate) mod classes;
pub(crate) mod provider;
pub(crate) mod state;
pub(crate) mod value;
