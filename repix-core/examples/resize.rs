//! Submit one image against a running resize service and save the variants.
//!
//! ```sh
//! REPIX_API_URL=http://localhost:3000 cargo run --example resize -- photo.jpg out/
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use repix_core::model::{OutputFormat, SizePreset, SourceImage, SubmissionState};
use repix_core::{ClientConfig, DiskImageSaver, HttpResizeService, ResizeSession, SubmitAck};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(image_path) = args.next() else {
        bail!("usage: resize <image> [out-dir]");
    };
    let out_dir = args.next().unwrap_or_else(|| "resized".to_string());

    let config = ClientConfig::load();
    let service = HttpResizeService::new(config.service_url().context("invalid service URL")?);
    let mut session = ResizeSession::new(
        Arc::new(service),
        Arc::new(DiskImageSaver::new(&out_dir)),
    );

    let bytes = std::fs::read(&image_path).with_context(|| format!("reading {image_path}"))?;
    let file_name = PathBuf::from(&image_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();
    session.set_source(SourceImage::new(file_name, bytes));
    session.toggle_preset(SizePreset::Thumbnail);
    session.toggle_preset(SizePreset::Medium);
    session.set_format(OutputFormat::Png);

    let mut submission = session.watch_submission();
    match session.submit() {
        SubmitAck::Accepted => {}
        SubmitAck::AlreadyInFlight => bail!("a submission is already in flight"),
        SubmitAck::Rejected(failure) => bail!("{failure}"),
    }

    let settled = submission
        .wait_for(|state| state.is_settled())
        .await
        .context("session closed")?
        .clone();

    match settled {
        SubmissionState::Succeeded(results) => {
            println!("original: {}", results.original.download_name);
            for (label, image) in &results.variants {
                match session.download(image).await {
                    Ok(path) => println!("{label}: {}", path.display()),
                    Err(err) => eprintln!("{label}: {err}"),
                }
            }
        }
        SubmissionState::Failed { message } => bail!("{message}"),
        SubmissionState::Idle | SubmissionState::Submitting => unreachable!("settled state"),
    }

    Ok(())
}
