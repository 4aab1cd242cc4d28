use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scene-gen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate Swift bindings for every scene of a project.
    Generate(GenerateArgs),
    /// Print the code model of one scene as JSON.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Folder containing `project.godot`.
    project: PathBuf,

    /// Folder receiving the generated code. Its previous contents are removed.
    output: PathBuf,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail scenes whose outlets collide on an identifier.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Folder containing `project.godot`.
    project: PathBuf,

    /// Scene path relative to the project folder, e.g. `player/player.tscn`.
    scene: String,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<scene_gen::GenConfig> {
    match path {
        Some(path) => scene_gen::GenConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display())),
        None => Ok(scene_gen::GenConfig::default()),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_ref())?;
    cfg.strict |= args.strict;

    let summary = scene_gen::generate(&args.project, &args.output, &cfg).with_context(|| {
        format!(
            "generate '{}' into '{}'",
            args.project.display(),
            args.output.display()
        )
    })?;

    eprintln!(
        "generated {} scene(s), skipped {}, failed {} -> {}",
        summary.generated,
        summary.skipped,
        summary.failed,
        args.output.display()
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let mut loader = scene_gen::TscnLoader::new(&args.project);
    let model = scene_gen::scene_model(&mut loader, &cfg.class_catalog(), &args.scene)
        .with_context(|| format!("inspect '{}'", args.scene))?;

    let json = serde_json::to_string_pretty(&model).context("serialize code model")?;
    println!("{json}");
    Ok(())
}
