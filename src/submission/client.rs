//! `festival-site submit`: walk the submission flow from a terminal.
//!
//! Only the file's name and size are read from disk.

use super::{
    driver::{FlowTimings, SubmissionDriver},
    flow::{PaymentDetails, SelectedFile},
    sink::HttpMetadataSink,
};
use crate::config::SubmitArgs;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Drive one submission against the site at `args.server`.
pub async fn run_submit(args: SubmitArgs) -> Result<()> {
    let file = describe_file(&args.file, args.mime.as_deref()).await?;
    let sink = HttpMetadataSink::new(&args.server);
    let timings = if args.instant {
        FlowTimings::instant()
    } else {
        FlowTimings::default()
    };

    let mut driver = SubmissionDriver::new(sink, timings);
    info!(submission = %driver.submission().id(), file = %file.name, "starting submission");

    driver.set_title(&args.title)?;
    driver
        .upload(file)
        .await
        .context("file was not accepted")?;
    info!("upload complete");

    driver.submit().await.context("submission was not accepted")?;
    info!(stage = %driver.submission().stage(), "submission received");

    driver.continue_to_payment()?;
    let details = PaymentDetails::new(args.card, args.expiry, args.cvv);
    match driver.pay(&details).await.context("payment was not accepted")? {
        Some(saved) => info!(id = saved.id, uploaded_at = %saved.uploaded_at, "payment complete, submission recorded"),
        None => info!("payment complete"),
    }

    driver.run_countdown().await?;
    info!("back to the landing page");
    Ok(())
}

async fn describe_file(path: &Path, mime: Option<&str>) -> Result<SelectedFile> {
    let meta = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))?
        .to_string();
    let mime_type = mime
        .map(str::to_string)
        .unwrap_or_else(|| mime_from_name(&name).to_string());

    Ok(SelectedFile::new(name, mime_type, meta.len()))
}

/// MIME type a browser would report for the accepted video extensions.
fn mime_from_name(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn mime_follows_extension() {
        assert_eq!(mime_from_name("film.MP4"), "video/mp4");
        assert_eq!(mime_from_name("film.mov"), "video/quicktime");
        assert_eq!(mime_from_name("film.avi"), "video/x-msvideo");
        assert_eq!(mime_from_name("film"), "application/octet-stream");
    }

    #[tokio::test]
    async fn describes_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.mov");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(&[0u8; 2048]).unwrap();

        let file = describe_file(&path, None).await.unwrap();
        assert_eq!(file, SelectedFile::new("short.mov", "video/quicktime", 2048));

        let file = describe_file(&path, Some("video/webm")).await.unwrap();
        assert_eq!(file.mime_type, "video/webm");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(describe_file(&dir.path().join("nope.mp4"), None).await.is_err());
    }
}
