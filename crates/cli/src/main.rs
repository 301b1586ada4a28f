use anyhow::Result;
use clap::{Parser, Subcommand};
use geoptics::api::{NoopObserver, TraceCfg};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod io;

#[derive(Parser)]
#[command(name = "geoptics")]
#[command(about = "Trace rays through 2D optical scenes", version = geoptics::VERSION)]
struct Cmd {
    /// Log filter, e.g. `debug` or `geoptics=trace` (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Propagate every ray and print a JSON summary
    Trace {
        scene: PathBuf,
        #[arg(long, default_value_t = TraceCfg::default().max_parts)]
        max_parts: usize,
        /// Write the traced scene here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Load a scene and report its content
    Check { scene: PathBuf },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let filter = match &cmd.log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Trace {
            scene,
            max_parts,
            out,
        } => trace(scene, max_parts, out),
        Action::Check { scene } => check(scene),
    }
}

fn trace(path: PathBuf, max_parts: usize, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(scene = %path.display(), max_parts, "trace");
    let mut scene = io::load_scene(&path)?;
    io::ensure_traceable(&scene)?;
    let cfg = TraceCfg {
        max_parts,
        ..TraceCfg::default()
    };
    scene.propagate_with(&cfg, &mut NoopObserver);
    let summary = io::Summary::of(&scene);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    if let Some(out) = out {
        io::write_scene(&out, scene.config())?;
        tracing::info!(out = %out.display(), "traced scene written");
    }
    Ok(())
}

fn check(path: PathBuf) -> Result<()> {
    let scene = io::load_scene(&path)?;
    let rays: usize = scene.sources().iter().map(|s| s.rays().len()).sum();
    tracing::info!(
        scene = %path.display(),
        regions = scene.regions().len(),
        sources = scene.sources().len(),
        rays,
        "check"
    );
    let report = serde_json::json!({
        "regions": scene.regions().len(),
        "sources": scene.sources().len(),
        "rays": rays,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
