//! Core types for the interview crate.
//!
//! This crate provides the foundational types for stack-based
//! question/answer flows:
//! - `ResponseData` and `ResponseValue` - Accumulated answers
//! - `Script` and `Moderator` traits - The two external collaborators
//! - `QuestionRouter` and `ResponseConsumer` traits - The control surfaces
//!   each collaborator is given
//! - `CheckpointState` and `StateSnapshot` - Save points and the exportable
//!   state of a running interview
//! - `InterviewError` - Engine failure type

mod response_value;
pub use response_value::ResponseValue;

mod response_data;
pub use response_data::ResponseData;

mod snapshot;
pub use snapshot::{CheckpointState, StateSnapshot};

mod error;
pub use error::InterviewError;

mod traits;
pub use traits::{
    CompletedCallback, IdGenerator, LogCallback, Moderator, QuestionRouter, ResponseConsumer,
    Script,
};
