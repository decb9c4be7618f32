//! The submission stage sequencer.
//!
//! A [`Submission`] moves through
//! `Upload → ProcessingUpload → SubmissionConfirmed → Payment →
//! ProcessingPayment → Completed`. Every transition is an explicit method;
//! a rejected call leaves the stage untouched. Validation failures are also
//! kept as the inline message shown next to the form.

use crate::models::file_metadata::{NewFileMetadata, format_file_size, format_uploaded_at};
use chrono::{DateTime, TimeZone};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Largest accepted film, 2 GiB.
pub const MAX_FILE_SIZE: u64 = 2 * 1024 * 1024 * 1024;
/// Extensions accepted even when the browser reports no video MIME type.
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "mov", "avi"];
pub const MIN_TITLE_CHARS: usize = 3;
/// Seconds shown on the confirmation screen before returning to the landing page.
pub const COUNTDOWN_START: u8 = 5;

const MIN_CARD_DIGITS: usize = 13;
const MIN_EXPIRY_CHARS: usize = 5;
const MIN_CVV_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStage {
    Upload,
    ProcessingUpload,
    SubmissionConfirmed,
    Payment,
    ProcessingPayment,
    Completed,
}

impl SubmissionStage {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStage::Upload => "upload",
            SubmissionStage::ProcessingUpload => "processing_upload",
            SubmissionStage::SubmissionConfirmed => "submission_confirmed",
            SubmissionStage::Payment => "payment",
            SubmissionStage::ProcessingPayment => "processing_payment",
            SubmissionStage::Completed => "completed",
        }
    }
}

impl fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Please upload a video file (MP4, MOV, or AVI)")]
    NotAVideo,
    #[error("File size should be less than 2GB")]
    FileTooLarge,
    #[error("Please upload a file and enter a title before submitting")]
    MissingFileOrTitle,
    #[error("Title must be at least 3 characters")]
    TitleTooShort,
    #[error("Please wait for the upload to finish")]
    UploadInProgress,
    #[error("Please fill in all payment details correctly")]
    InvalidPaymentDetails,
    #[error("cannot {action} during the {from} stage")]
    InvalidTransition {
        from: SubmissionStage,
        action: &'static str,
    },
}

impl SubmissionError {
    /// Whether this error is something the submitter should see inline.
    fn is_inline(&self) -> bool {
        !matches!(self, SubmissionError::InvalidTransition { .. })
    }
}

/// The film picked in the file dialog. Only its description is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// Lowercased extension without the dot.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// A video MIME type or a known video extension, and at most 2 GiB.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        let video_mime = self.mime_type.to_ascii_lowercase().starts_with("video/");
        let video_ext = self
            .extension()
            .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()));
        if !video_mime && !video_ext {
            return Err(SubmissionError::NotAVideo);
        }
        if self.size_bytes > MAX_FILE_SIZE {
            return Err(SubmissionError::FileTooLarge);
        }
        Ok(())
    }
}

/// Card form contents. Checked for length only; nothing is charged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentDetails {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentDetails {
    pub fn new(
        card_number: impl Into<String>,
        expiry: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiry: expiry.into(),
            cvv: cvv.into(),
        }
    }

    pub fn validate(&self) -> Result<(), SubmissionError> {
        let card_digits = self.card_number.chars().filter(char::is_ascii_digit).count();
        let cvv_digits = self.cvv.chars().filter(char::is_ascii_digit).count();
        if card_digits < MIN_CARD_DIGITS
            || self.expiry.trim().chars().count() < MIN_EXPIRY_CHARS
            || cvv_digits < MIN_CVV_DIGITS
        {
            return Err(SubmissionError::InvalidPaymentDetails);
        }
        Ok(())
    }
}

/// One submitter's walk through the flow.
#[derive(Debug, Clone)]
pub struct Submission {
    id: Uuid,
    stage: SubmissionStage,
    title: String,
    file: Option<SelectedFile>,
    progress: u8,
    countdown: u8,
    error: Option<String>,
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

impl Submission {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            stage: SubmissionStage::Upload,
            title: String::new(),
            file: None,
            progress: 0,
            countdown: COUNTDOWN_START,
            error: None,
        }
    }

    /// Session id, used to correlate log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn stage(&self) -> SubmissionStage {
        self.stage
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Simulated upload percentage, 0..=100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn countdown(&self) -> u8 {
        self.countdown
    }

    /// Inline message from the last rejected action, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True once the completion countdown has run out.
    pub fn is_finished(&self) -> bool {
        self.stage == SubmissionStage::Completed && self.countdown == 0
    }

    /// Pick a film. Replaces any earlier choice and restarts progress.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), SubmissionError> {
        self.expect_stage(SubmissionStage::Upload, "select a file")?;
        if let Err(err) = file.validate() {
            return self.reject(err);
        }
        self.file = Some(file);
        self.progress = 0;
        self.error = None;
        Ok(())
    }

    /// Update the title field. A 1 or 2 character title shows a hint but is
    /// still stored.
    pub fn set_title(&mut self, title: &str) -> Result<(), SubmissionError> {
        self.expect_stage(SubmissionStage::Upload, "edit the title")?;
        self.title = title.to_string();
        let chars = title.trim().chars().count();
        self.error = if chars > 0 && chars < MIN_TITLE_CHARS {
            Some(SubmissionError::TitleTooShort.to_string())
        } else {
            None
        };
        Ok(())
    }

    /// Bump the simulated upload progress by `step` percent, capped at 100.
    pub fn advance_upload(&mut self, step: u8) -> Result<u8, SubmissionError> {
        self.expect_stage(SubmissionStage::Upload, "advance the upload")?;
        if self.file.is_none() {
            return Err(SubmissionError::InvalidTransition {
                from: self.stage,
                action: "advance the upload without a file",
            });
        }
        self.progress = self.progress.saturating_add(step).min(100);
        Ok(self.progress)
    }

    /// `Upload → ProcessingUpload`.
    pub fn submit(&mut self) -> Result<(), SubmissionError> {
        self.expect_stage(SubmissionStage::Upload, "submit")?;
        let title_chars = self.title.trim().chars().count();
        if self.file.is_none() || title_chars == 0 {
            return self.reject(SubmissionError::MissingFileOrTitle);
        }
        if title_chars < MIN_TITLE_CHARS {
            return self.reject(SubmissionError::TitleTooShort);
        }
        if self.progress < 100 {
            return self.reject(SubmissionError::UploadInProgress);
        }
        self.title = self.title.trim().to_string();
        self.enter(SubmissionStage::ProcessingUpload);
        Ok(())
    }

    /// `ProcessingUpload → SubmissionConfirmed`, once the fake processing
    /// delay has elapsed.
    pub fn confirm_upload(&mut self) -> Result<(), SubmissionError> {
        self.expect_stage(SubmissionStage::ProcessingUpload, "confirm the upload")?;
        self.enter(SubmissionStage::SubmissionConfirmed);
        Ok(())
    }

    /// `SubmissionConfirmed → Payment`.
    pub fn continue_to_payment(&mut self) -> Result<(), SubmissionError> {
        self.expect_stage(SubmissionStage::SubmissionConfirmed, "continue to payment")?;
        self.enter(SubmissionStage::Payment);
        Ok(())
    }

    /// `Payment → ProcessingPayment` when the card form looks complete.
    pub fn pay(&mut self, details: &PaymentDetails) -> Result<(), SubmissionError> {
        self.expect_stage(SubmissionStage::Payment, "pay")?;
        if let Err(err) = details.validate() {
            return self.reject(err);
        }
        self.enter(SubmissionStage::ProcessingPayment);
        Ok(())
    }

    /// `ProcessingPayment → Completed`. Returns the metadata record to
    /// persist, stamped with `now`, and starts the countdown.
    pub fn complete<Tz>(&mut self, now: &DateTime<Tz>) -> Result<NewFileMetadata, SubmissionError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.expect_stage(SubmissionStage::ProcessingPayment, "complete")?;
        let file = self.file.as_ref().ok_or(SubmissionError::InvalidTransition {
            from: self.stage,
            action: "complete without a file",
        })?;

        let record = NewFileMetadata {
            title: self.title.clone(),
            filename: file.name.clone(),
            size: format_file_size(file.size_bytes),
            mime_type: file.mime_type.clone(),
            uploaded_at: format_uploaded_at(now),
        };
        self.countdown = COUNTDOWN_START;
        self.enter(SubmissionStage::Completed);
        Ok(record)
    }

    /// One second of the completion countdown. Returns what is left.
    pub fn tick_countdown(&mut self) -> Result<u8, SubmissionError> {
        self.expect_stage(SubmissionStage::Completed, "count down")?;
        self.countdown = self.countdown.saturating_sub(1);
        Ok(self.countdown)
    }

    /// Abandon the flow from any stage and start over on a blank form.
    pub fn reset(&mut self) {
        *self = Submission::new();
    }

    fn enter(&mut self, stage: SubmissionStage) {
        tracing::debug!(submission = %self.id, from = %self.stage, to = %stage, "stage change");
        self.stage = stage;
        self.error = None;
    }

    fn expect_stage(
        &self,
        expected: SubmissionStage,
        action: &'static str,
    ) -> Result<(), SubmissionError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(SubmissionError::InvalidTransition {
                from: self.stage,
                action,
            })
        }
    }

    fn reject<T>(&mut self, err: SubmissionError) -> Result<T, SubmissionError> {
        if err.is_inline() {
            self.error = Some(err.to_string());
        }
        Err(err)
    }
}
