//! The simulated "submit your film" flow.
//!
//! - [`flow`]: the stage sequencer and its validation gates
//! - [`driver`]: runs the sequencer with simulated delays
//! - [`sink`]: where the completed submission's metadata goes
//! - [`client`]: terminal front-end used by the `submit` subcommand

pub mod client;
pub mod driver;
pub mod flow;
pub mod sink;

pub use driver::{FlowTimings, ProgressStep, SubmissionDriver};
pub use flow::{PaymentDetails, SelectedFile, Submission, SubmissionError, SubmissionStage};
pub use sink::{HttpMetadataSink, MetadataSink, SinkError};
