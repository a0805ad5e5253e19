use anyhow::Context;

mod agent;
mod config;
mod errors;
mod files;
mod health;
mod logging;
mod progress;
mod readme;
mod sink;
mod textgen;

use crate::agent::RunRequest;
use crate::config::AppConfig;
use crate::progress::ProgressReport;
use crate::sink::ProgressFile;
use crate::textgen::build_text_service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cfg = AppConfig::from_env_and_args();
    if let Err(e) = cfg.validate() {
        anyhow::bail!("invalid config: {e}");
    }

    // Startup health check (best-effort, logged only). The blocking HTTP
    // client must not be created or used on a runtime thread.
    let check_cfg = cfg.clone();
    let backend_ok = tokio::task::spawn_blocking(move || health::check_backend(&check_cfg))
        .await
        .unwrap_or(false);
    tracing::info!(
        backend = ?cfg.backend,
        backend_ok,
        root = %cfg.root.display(),
        "readme agent starting"
    );

    let build_cfg = cfg.clone();
    let service = tokio::task::spawn_blocking(move || build_text_service(&build_cfg))
        .await
        .context("failed to set up text service")?;

    let request = cfg.request_text().context("failed to read request file")?;
    let run_request = RunRequest {
        root: cfg.root.clone(),
        request,
        folder: cfg.folder.clone(),
        ignore: cfg.ignore.clone(),
    };

    let mut progress = ProgressReport::new();
    if let Some(path) = &cfg.progress_file {
        let sink = ProgressFile::new(path.clone());
        sink.write(&progress);
        progress.on_change(sink.into_listener());
    }

    let result = agent::run(service, &run_request, &mut progress).await;
    tracing::debug!(
        status = ?progress.status(),
        entries = progress.entries().len(),
        "run finished"
    );
    let readme = result?;
    println!("{}", readme.display());
    Ok(())
}
