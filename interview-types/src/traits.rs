use crate::{InterviewError, ResponseData};

/// Control surface handed to a [`Script`] for directing the flow of an
/// interview.
///
/// Implemented by the interview engine itself; the split between this and
/// [`ResponseConsumer`] restricts each collaborator to the operations
/// relevant to its role.
pub trait QuestionRouter<Q> {
    /// Push a question onto the interview's stack. Questions are asked in
    /// last-in-first-out order.
    fn push(&mut self, question: Q) -> Result<(), InterviewError>;

    /// Move the interview forward one step, popping a question off the stack
    /// and prompting the Moderator to pose it. Completes the interview if
    /// the stack is empty.
    fn next(&mut self) -> Result<(), InterviewError>;

    /// Pop the top question off the stack without prompting the Moderator,
    /// handing it straight to [`Script::process`]. Optionally merges
    /// `response` into the response store first. Completes the interview if
    /// the stack is empty.
    fn skip(&mut self, response: Option<ResponseData>) -> Result<(), InterviewError>;

    /// Complete the interview, executing the completion callback with the
    /// collected responses. Irreversible.
    fn complete(&mut self) -> Result<(), InterviewError>;

    /// Save the current question, question stack and response store under
    /// the given id. Repeated calls with the same id overwrite the
    /// existing checkpoint.
    fn checkpoint(&mut self, id: &str) -> Result<(), InterviewError>;

    /// Restore the state saved under the given id, if it exists; otherwise
    /// a no-op.
    fn restore(&mut self, id: &str) -> Result<(), InterviewError>;

    /// Mark a milestone as passed. Milestones form an insertion-ordered set
    /// and are handed to the Moderator for progress context; re-marking an
    /// already-passed milestone is a no-op.
    fn milestone(&mut self, id: &str) -> Result<(), InterviewError>;
}

/// Control surface handed to a [`Moderator`] for feeding collected answers
/// back into the interview.
pub trait ResponseConsumer {
    /// Merge response data into the interview's store. Duplicate keys are
    /// overwritten.
    fn answer(&mut self, response: ResponseData) -> Result<(), InterviewError>;

    /// Undo the most recent submission, restoring the interview to the state
    /// it was in immediately before that submission and re-presenting the
    /// restored question. A no-op when nothing has been submitted.
    fn rewind(&mut self) -> Result<(), InterviewError>;

    /// Indicate that responses for the current question are done being
    /// collected and the Script should process them.
    fn submit(&mut self) -> Result<(), InterviewError>;
}

/// Policy collaborator deciding what questions exist and when the flow is
/// done.
///
/// The engine re-enters its Script (`process` commonly calls
/// [`QuestionRouter::next`], which calls `prepare` on the same Script), so
/// methods take `&self`; implementations that carry mutable state use
/// interior mutability. The engine is single-threaded, one operation at a
/// time.
pub trait Script<Q> {
    /// Initialize the router state. Called once at the beginning of the
    /// interview.
    fn setup(&self, router: &mut dyn QuestionRouter<Q>) -> Result<(), InterviewError>;

    /// Perform any pre-question work. Called immediately before a question
    /// is presented. The default does nothing.
    fn prepare(
        &self,
        _router: &mut dyn QuestionRouter<Q>,
        _question: Q,
        _responses: ResponseData,
    ) -> Result<(), InterviewError> {
        Ok(())
    }

    /// React to a question's answers being submitted (or the question being
    /// skipped).
    fn process(
        &self,
        router: &mut dyn QuestionRouter<Q>,
        question: Q,
        responses: ResponseData,
    ) -> Result<(), InterviewError>;
}

/// Presentation collaborator responsible for surfacing a question and
/// collecting a response.
///
/// `ask` may drive the interview to completion synchronously through the
/// consumer, or store nothing and return, leaving the interview waiting for
/// a later re-entry by its owner.
pub trait Moderator<Q> {
    /// Present the given question and collect an answer.
    ///
    /// All arguments are independent copies; mutating them never affects
    /// engine state. `milestones` lists passed milestones in
    /// first-insertion order.
    fn ask(
        &self,
        consumer: &mut dyn ResponseConsumer,
        question: Q,
        responses: ResponseData,
        milestones: Vec<String>,
    ) -> Result<(), InterviewError>;
}

/// Source of collision-resistant ids for the auto-checkpoints created on
/// each submission.
pub trait IdGenerator {
    /// Produce a fresh id, distinct from every previously produced one.
    fn generate(&mut self) -> String;
}

/// Invoked exactly once, with a copy of the collected responses, when the
/// interview completes.
pub type CompletedCallback = Box<dyn FnOnce(ResponseData)>;

/// Consumer for the human-readable trace lines an interview emits when run
/// in debug mode.
pub type LogCallback = Box<dyn FnMut(&str)>;
