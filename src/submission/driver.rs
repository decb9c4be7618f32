//! Runs a [`Submission`] through its simulated delays.
//!
//! Upload progress, processing and the completion countdown are plain
//! `tokio::time` sleeps; nothing is transferred or charged.

use super::{
    flow::{PaymentDetails, SelectedFile, Submission, SubmissionError},
    sink::MetadataSink,
};
use crate::models::file_metadata::FileMetadata;
use chrono::Local;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// How far each progress tick moves the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStep {
    Fixed(u8),
    /// Uniform in `1..=max` per tick.
    Random { max: u8 },
}

/// Delays used for each simulated step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowTimings {
    pub progress_tick: Duration,
    pub progress_step: ProgressStep,
    pub upload_processing: Duration,
    pub payment_processing: Duration,
    pub countdown_tick: Duration,
}

impl Default for FlowTimings {
    /// 5% every 100ms (about two seconds for a full upload), three seconds
    /// of upload processing, two of payment processing.
    fn default() -> Self {
        Self {
            progress_tick: Duration::from_millis(100),
            progress_step: ProgressStep::Fixed(5),
            upload_processing: Duration::from_secs(3),
            payment_processing: Duration::from_secs(2),
            countdown_tick: Duration::from_secs(1),
        }
    }
}

impl FlowTimings {
    /// No waiting at all; the upload finishes in one tick.
    pub fn instant() -> Self {
        Self {
            progress_tick: Duration::ZERO,
            progress_step: ProgressStep::Fixed(100),
            upload_processing: Duration::ZERO,
            payment_processing: Duration::ZERO,
            countdown_tick: Duration::ZERO,
        }
    }

    fn next_step(&self) -> u8 {
        match self.progress_step {
            ProgressStep::Fixed(step) => step.max(1),
            ProgressStep::Random { max } => rand::thread_rng().gen_range(1..=max.max(1)),
        }
    }
}

pub struct SubmissionDriver<S> {
    submission: Submission,
    sink: S,
    timings: FlowTimings,
}

impl<S: MetadataSink> SubmissionDriver<S> {
    pub fn new(sink: S, timings: FlowTimings) -> Self {
        Self {
            submission: Submission::new(),
            sink,
            timings,
        }
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), SubmissionError> {
        self.submission.set_title(title)
    }

    /// Select `file` and run the fake progress bar to 100%.
    pub async fn upload(&mut self, file: SelectedFile) -> Result<(), SubmissionError> {
        self.submission.select_file(file)?;
        while self.submission.progress() < 100 {
            sleep(self.timings.progress_tick).await;
            let progress = self.submission.advance_upload(self.timings.next_step())?;
            debug!(submission = %self.submission.id(), progress, "upload progress");
        }
        Ok(())
    }

    /// Submit, wait out the processing delay, land on the confirmation.
    pub async fn submit(&mut self) -> Result<(), SubmissionError> {
        self.submission.submit()?;
        sleep(self.timings.upload_processing).await;
        self.submission.confirm_upload()
    }

    pub fn continue_to_payment(&mut self) -> Result<(), SubmissionError> {
        self.submission.continue_to_payment()
    }

    /// Pay, wait out the processing delay, complete, and record the
    /// metadata. A failed save is logged and the flow completes anyway;
    /// the stored row is returned when the save worked.
    pub async fn pay(
        &mut self,
        details: &PaymentDetails,
    ) -> Result<Option<FileMetadata>, SubmissionError> {
        self.submission.pay(details)?;
        sleep(self.timings.payment_processing).await;
        let record = self.submission.complete(&Local::now())?;

        match self.sink.save(record).await {
            Ok(saved) => {
                info!(submission = %self.submission.id(), id = saved.id, filename = %saved.filename, "submission recorded");
                Ok(Some(saved))
            }
            Err(err) => {
                warn!(submission = %self.submission.id(), error = %err, "could not save file metadata");
                Ok(None)
            }
        }
    }

    /// Count down on the confirmation screen, then go back to a blank form.
    pub async fn run_countdown(&mut self) -> Result<(), SubmissionError> {
        while self.submission.countdown() > 0 {
            sleep(self.timings.countdown_tick).await;
            let left = self.submission.tick_countdown()?;
            debug!(submission = %self.submission.id(), left, "returning to the landing page");
        }
        self.submission.reset();
        Ok(())
    }

    /// Leave the flow from wherever it is.
    pub fn cancel(&mut self) {
        info!(submission = %self.submission.id(), stage = %self.submission.stage(), "submission cancelled");
        self.submission.reset();
    }
}
