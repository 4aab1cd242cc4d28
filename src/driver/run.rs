use std::{
    collections::BTreeMap,
    io::Write as _,
    path::{Path, PathBuf},
};

use crate::describe::scene::SceneDescription;
use crate::driver::{config::GenConfig, discover::discover_scenes};
use crate::foundation::error::{SceneGenError, SceneGenResult};
use crate::godot::{loader::TscnLoader, project::ProjectSettings};
use crate::graph::{classes::ClassCatalog, provider::SceneLoader};
use crate::model::{code::CodeModel, input::input_actions};
use crate::render::source::{Renderer, SourceFile};

/// Per-scene outcome counts of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RunSummary {
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Load one scene and build its code model.
#[tracing::instrument(skip(loader, catalog))]
pub fn scene_model(
    loader: &mut dyn SceneLoader,
    catalog: &ClassCatalog,
    scene_path: &str,
) -> SceneGenResult<CodeModel> {
    let scene = loader.load_scene(scene_path)?;
    let desc = SceneDescription::describe(&scene, catalog)?;
    Ok(CodeModel::build(&desc))
}

/// Generate bindings for every scene of the project at `project_root` into `output_dir`.
///
/// The output folder is wiped first. A scene that fails is logged and counted; failures
/// resetting the output folder or writing the shared and input-action files abort the run.
pub fn generate(
    project_root: &Path,
    output_dir: &Path,
    cfg: &GenConfig,
) -> SceneGenResult<RunSummary> {
    cfg.validate()?;
    let settings = ProjectSettings::load(project_root)?;
    let mut loader = TscnLoader::new(project_root);
    let renderer = cfg.renderer();
    generate_with(&mut loader, &renderer, &settings, project_root, output_dir, cfg)
}

/// [`generate`] with an explicit scene loader, renderer and project settings.
pub fn generate_with(
    loader: &mut dyn SceneLoader,
    renderer: &dyn Renderer,
    settings: &ProjectSettings,
    project_root: &Path,
    output_dir: &Path,
    cfg: &GenConfig,
) -> SceneGenResult<RunSummary> {
    reset_output(project_root, output_dir)?;

    let catalog = cfg.class_catalog();
    let mut summary = RunSummary::default();
    // file name -> scene that produced it
    let mut written = BTreeMap::<String, String>::new();

    for scene_path in discover_scenes(project_root, cfg) {
        let result = scene_model(loader, &catalog, &scene_path)
            .and_then(|model| check_duplicates(&model, cfg.strict).map(|()| model))
            .and_then(|model| renderer.render_scene(&model));

        let file = match result {
            Ok(file) => file,
            Err(err) if err.is_expected_skip() => {
                tracing::info!(path = %scene_path, reason = %err, "skipped scene");
                summary.skipped += 1;
                continue;
            }
            Err(err) => {
                tracing::error!(path = %scene_path, error = %err, "failed to generate scene");
                summary.failed += 1;
                continue;
            }
        };

        if let Some(previous) = written.get(&file.file_name) {
            tracing::error!(
                path = %scene_path,
                file = %file.file_name,
                previous = %previous,
                "another scene already generated this file"
            );
            summary.failed += 1;
            continue;
        }

        match write_source(output_dir, &file) {
            Ok(_) => {
                tracing::info!(path = %scene_path, file = %file.file_name, "generated scene interface");
                written.insert(file.file_name, scene_path);
                summary.generated += 1;
            }
            Err(err) => {
                tracing::error!(path = %scene_path, error = %err, "failed to write scene interface");
                summary.failed += 1;
            }
        }
    }

    write_source(output_dir, &renderer.render_shared())?;
    tracing::info!("generated shared code");

    let actions = input_actions(settings.property_names());
    write_source(output_dir, &renderer.render_input_actions(&actions))?;
    tracing::info!(actions = actions.len(), "generated input actions");

    tracing::info!(
        generated = summary.generated,
        skipped = summary.skipped,
        failed = summary.failed,
        "finished generating"
    );
    Ok(summary)
}

fn check_duplicates(model: &CodeModel, strict: bool) -> SceneGenResult<()> {
    let dups = model.duplicate_identifiers();
    if !strict || dups.is_empty() {
        return Ok(());
    }
    let list = dups
        .iter()
        .map(|(ty, id)| format!("{ty}.{id}"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(SceneGenError::render(format!(
        "duplicate outlet identifiers in {}: {list}",
        model.resource_path
    )))
}

fn reset_output(project_root: &Path, output_dir: &Path) -> SceneGenResult<()> {
    if output_dir.exists() {
        let out = output_dir
            .canonicalize()
            .map_err(|e| SceneGenError::io(output_dir, e))?;
        let root = project_root
            .canonicalize()
            .map_err(|e| SceneGenError::io(project_root, e))?;
        if root.starts_with(&out) {
            return Err(SceneGenError::config(format!(
                "output folder '{}' contains the project",
                output_dir.display()
            )));
        }
        tracing::info!(path = %output_dir.display(), "removing existing output folder");
        std::fs::remove_dir_all(output_dir).map_err(|e| SceneGenError::io(output_dir, e))?;
    }
    std::fs::create_dir_all(output_dir).map_err(|e| SceneGenError::io(output_dir, e))
}

#[cfg(unix)]
const GENERATED_FILE_MODE: u32 = 0o644;

/// Write `file` into `dir`, replacing any previous file in one rename.
pub(crate) fn write_source(dir: &Path, file: &SourceFile) -> SceneGenResult<PathBuf> {
    let target = dir.join(&file.file_name);
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| SceneGenError::io(dir, e))?;
    tmp.write_all(file.text.as_bytes())
        .map_err(|e| SceneGenError::io(tmp.path(), e))?;
    // Temp files start out owner-only.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt as _;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(GENERATED_FILE_MODE))
            .map_err(|e| SceneGenError::io(tmp.path(), e))?;
    }
    tmp.persist(&target)
        .map_err(|e| SceneGenError::io(&target, e.error))?;
    Ok(target)
}

#[cfg(test)]
#[path = "../../tests/unit/driver/run.rs"]
mod tests;
