mod cli;
mod scene;
mod session;

use std::process::ExitCode;
use std::time::Instant;

use glow_common::{Color, ConfigError};
use glow_config::colors::parse_color;
use glow_config::schema::GlowConfig;
use glow_platform::{KeyCombo, KeybindRegistry};
use glow_renderer::{GlowParameters, RasterCanvas, RecordingCanvas};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use session::{GlowSession, SessionEvent};

fn main() -> ExitCode {
    let args = cli::parse();

    // Config first: it may set the log level.
    let (config, config_error) = load_config(&args);

    let directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_directive());
    init_logging(directive);

    tracing::info!("glow-demo v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &cli::Args) -> (GlowConfig, Option<ConfigError>) {
    let result = match &args.config {
        Some(path) => glow_config::load_from_path(path),
        None => glow_config::load_config(),
    };
    match result {
        Ok(config) => (config, None),
        Err(e) => (GlowConfig::default(), Some(e)),
    }
}

fn init_logging(directive: &str) {
    let directive: Directive = directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn run(args: &cli::Args, config: &GlowConfig) -> glow_common::Result<()> {
    let registry = KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let params = GlowParameters::from_config(&config.glow)?;
    let mut session = GlowSession::new(params, config.glow.steps.clone(), registry);

    for key in &args.keys {
        let combo = match KeyCombo::parse(key) {
            Ok(combo) => combo,
            Err(e) => {
                tracing::warn!("skipping scripted key '{key}': {e}");
                continue;
            }
        };
        if session.press(&combo) == SessionEvent::Quit {
            tracing::info!("Quit requested by scripted keys, nothing rendered");
            return Ok(());
        }
    }

    tracing::info!("{}", session.status());

    let (width, height) = (config.canvas.width, config.canvas.height);
    if args.dry_run {
        return dry_run(session.params(), width, height, args.frames);
    }

    let background = parse_color(&config.canvas.background)?;
    let canvas = render(session.params(), width, height, background, args.frames)?;
    canvas.save_png(&args.output)?;
    Ok(())
}

fn render(
    params: &GlowParameters,
    width: u32,
    height: u32,
    background: Color,
    frames: u32,
) -> glow_common::Result<RasterCanvas> {
    let mut canvas = RasterCanvas::new(width, height)?;
    let images = scene::sample_images(&mut canvas)?;

    for frame in 0..frames {
        let started = Instant::now();
        canvas.fill(background);
        let draws = scene::draw_scene(&mut canvas, &images, width, height, params)?;
        tracing::debug!(
            frame,
            draws,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "frame rendered"
        );
    }
    Ok(canvas)
}

fn dry_run(params: &GlowParameters, width: u32, height: u32, frames: u32) -> glow_common::Result<()> {
    let mut canvas = RecordingCanvas::new();
    let images = scene::blank_images(&mut canvas)?;

    let mut total = 0;
    for _ in 0..frames {
        total += scene::draw_scene(&mut canvas, &images, width, height, params)?;
    }
    tracing::info!(
        frames,
        per_frame = total / frames.max(1) as usize,
        total,
        recorded = canvas.len(),
        "dry run complete"
    );
    Ok(())
}
