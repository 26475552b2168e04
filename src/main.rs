//! Driver binary — feeds stdin lines through the correction pipeline.
//!
//! Stands in for the ASR collaborator during development: each line read from
//! stdin is treated as one completed transcript, run through
//! [`CorrectionPipeline::process`], and the corrected text is printed to
//! stdout.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Build the LLM corrector ([`ApiCorrector`]) from config.
//! 4. Create the shared mode state.
//! 5. Loop over stdin lines until EOF.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use voicemark::{
    config::AppConfig,
    llm::{ApiCorrector, LlmCorrector},
    mode::new_shared_mode_state,
    pipeline::{CorrectionContext, CorrectionPipeline, TranscriptionResult},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("voicemark starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. LLM corrector
    let llm: Arc<dyn LlmCorrector> = Arc::new(ApiCorrector::from_config(&config.llm));
    if !llm.available() {
        log::warn!("LLM endpoint not configured — rule-based correction only");
    }

    // 4. Mode state + pipeline
    let mode_state = new_shared_mode_state();
    let pipeline = CorrectionPipeline::new(Arc::clone(&mode_state), llm);

    // The driver always plays a developer-oriented target.
    let ctx = CorrectionContext { is_dev_app: true };

    // 5. stdin → pipeline → stdout
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let input = TranscriptionResult::new(line);
        let result = pipeline.process(input, ctx, &config.correction).await;

        if result.was_corrected {
            log::debug!(
                "corrected {:?} → {:?} (mode: {})",
                result.original_text.as_deref().unwrap_or(""),
                result.text,
                mode_state.lock().await.display_name()
            );
        }

        println!("{}", result.text);
    }

    Ok(())
}
