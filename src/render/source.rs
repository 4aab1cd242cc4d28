use crate::foundation::error::SceneGenResult;
use crate::model::{code::CodeModel, input::InputActionName};

/// One generated file, named relative to the output folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub file_name: String,
    pub text: String,
}

/// Turns code models into source files for one target language.
pub trait Renderer {
    fn render_scene(&self, model: &CodeModel) -> SceneGenResult<SourceFile>;

    /// Support code every scene file depends on.
    fn render_shared(&self) -> SourceFile;

    fn render_input_actions(&self, actions: &[InputActionName]) -> SourceFile;
}
