//! input-synth command-line entry point.
//!
//! Loads a TOML configuration (first argument, default `input-synth.toml`),
//! builds the configured input script into one batch and submits it.
//!
//! ```text
//! main()
//!  └─ load_config()              -- defaults when the file is absent
//!  └─ InputBuilder::with_screen_space(NativeSink)
//!  └─ build_script()             -- click, text, chord, scroll
//!  └─ submit()                   -- one atomic injection
//! ```
//!
//! On targets other than Windows `NativeSink` only records the batch, so the
//! binary reports what it would have injected.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use input_synth::infrastructure::config::{load_config, AppConfig};
use input_synth::{InjectionSink, InputBuilder, InputError, NativeSink};
use input_synth_core::MouseButton;

const DEFAULT_CONFIG_PATH: &str = "input-synth.toml";

fn main() -> anyhow::Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = load_config(&path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    info!(
        "input-synth starting (screen space {:?}, config {})",
        config.builder.screen_space,
        path.display()
    );

    let mut input =
        InputBuilder::with_screen_space(NativeSink::default(), config.builder.screen_space);
    build_script(&mut input, &config)?;

    let count = input.len();
    if count == 0 {
        info!("script is empty; nothing to inject");
        return Ok(());
    }
    input.submit().context("submitting input batch")?;
    info!("{}", submit_summary(count));
    Ok(())
}

/// Appends the configured script to `input` without submitting it.
fn build_script<S: InjectionSink>(
    input: &mut InputBuilder<S>,
    config: &AppConfig,
) -> Result<(), InputError> {
    let script = &config.script;

    if let Some([x, y]) = script.click_at {
        input
            .mouse_set(x, y, config.builder.normalize_coordinates)?
            .mouse_click(MouseButton::Left)?;
    }
    if !script.text.is_empty() {
        input.type_str(&script.text);
    }
    if !script.chord.is_empty() {
        input.key_chord(script.chord.as_slice());
    }
    if script.scroll != 0 {
        input.wheel_scroll(script.scroll, true);
    }
    Ok(())
}

/// Log line for a successful submit; only Windows actually injects.
fn submit_summary(count: usize) -> String {
    if cfg!(target_os = "windows") {
        format!("injected {count} input records")
    } else {
        format!("recorded {count} input records (dry run)")
    }
}
