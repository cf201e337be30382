use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ResponseData;

/// A deep-copied frame of the mutable interview state, stored under a
/// checkpoint id.
///
/// Restoring a checkpoint replaces the live current question, question stack
/// and response store with copies of the stored frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointState<Q> {
    /// The question that was current when the checkpoint was taken. `None`
    /// if no question had been presented yet.
    pub current_question: Option<Q>,

    /// The pending questions at checkpoint time, next-asked first.
    pub question_stack: Vec<Q>,

    /// The answers accumulated at checkpoint time.
    pub response_data: ResponseData,
}

/// The full exportable state of an interview.
///
/// This is the only externally serializable representation of a running
/// interview; a storage layer must round-trip it exactly to suspend and
/// resume a flow across a process boundary. Field names serialize in
/// camelCase, matching the persisted wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot<Q> {
    /// Pending questions, next-asked first.
    pub question_stack: Vec<Q>,

    /// All accumulated answers.
    pub response_data: ResponseData,

    /// Auto-checkpoint ids, most recent submission first.
    pub rewind_stack: Vec<String>,

    /// Every stored checkpoint, both named and auto-generated.
    pub checkpoints: HashMap<String, CheckpointState<Q>>,

    /// The question being presented at export time, if any.
    pub current_question: Option<Q>,

    /// Passed milestones in first-insertion order.
    pub milestones: Vec<String>,
}
