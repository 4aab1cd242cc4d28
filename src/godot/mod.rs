pub(crate) mod loader;
pub(crate) mod project;
pub(crate) mod scene_file;
