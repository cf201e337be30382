use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::rc::Rc;

use interview_types::{
    CheckpointState, CompletedCallback, IdGenerator, InterviewError, LogCallback, Moderator,
    QuestionRouter, ResponseConsumer, ResponseData, Script, StateSnapshot,
};

use crate::UuidGenerator;

/// Lifecycle phase of an [`Interview`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewPhase {
    /// Constructed; [`Interview::run`] has not been called yet.
    Ready,

    /// Actively presenting questions.
    Running,

    /// The completion callback has fired. Terminal: every further mutating
    /// operation fails with [`InterviewError::Completed`].
    Complete,
}

/// A stateful, stack-based question/answer flow.
///
/// The engine owns all mutable state: the question stack, the current
/// question, the response store, checkpoints, the rewind stack and the
/// milestone set. It implements both control surfaces - [`QuestionRouter`]
/// for its [`Script`] and [`ResponseConsumer`] for its [`Moderator`] - and
/// orchestrates all calls into them.
///
/// Every value crossing the boundary to a collaborator (question, response
/// data, milestone list, snapshot) is an independent clone; external
/// mutation can never alias engine state.
///
/// The question type `Q` is opaque: the engine routes questions but never
/// inspects them. `Debug` is required only to feed the optional trace sink.
pub struct Interview<Q> {
    phase: InterviewPhase,
    script: Rc<dyn Script<Q>>,
    moderator: Rc<dyn Moderator<Q>>,
    current_question: Option<Q>,
    question_stack: VecDeque<Q>,
    response_data: ResponseData,
    checkpoints: HashMap<String, CheckpointState<Q>>,
    rewind_stack: VecDeque<String>,
    milestones: Vec<String>,
    on_complete: Option<CompletedCallback>,
    ids: Box<dyn IdGenerator>,
    logger: Option<LogCallback>,
}

impl<Q: Clone + Debug> Interview<Q> {
    /// Create an interview with no questions, directed by `script` and
    /// presented by `moderator`.
    ///
    /// Auto-checkpoint ids come from a [`UuidGenerator`] unless replaced
    /// via [`Interview::with_id_generator`].
    pub fn new(script: Rc<dyn Script<Q>>, moderator: Rc<dyn Moderator<Q>>) -> Self {
        Self {
            phase: InterviewPhase::Ready,
            script,
            moderator,
            current_question: None,
            question_stack: VecDeque::new(),
            response_data: ResponseData::new(),
            checkpoints: HashMap::new(),
            rewind_stack: VecDeque::new(),
            milestones: Vec::new(),
            on_complete: None,
            ids: Box::new(UuidGenerator),
            logger: None,
        }
    }

    /// Replace the source of auto-checkpoint ids.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> InterviewPhase {
        self.phase
    }

    /// Whether the interview has reached its terminal state.
    pub fn is_complete(&self) -> bool {
        self.phase == InterviewPhase::Complete
    }

    /// Begin the interview.
    ///
    /// Records `on_complete` to be invoked with the collected responses at
    /// completion, gives the Script its [`Script::setup`] call to push
    /// initial questions, then presents the first question via
    /// [`Interview::next`].
    pub fn run(
        &mut self,
        on_complete: impl FnOnce(ResponseData) + 'static,
    ) -> Result<(), InterviewError> {
        self.ensure_active()?;
        self.trace(|| "[run] run begun, calling Script::setup".to_string());
        self.phase = InterviewPhase::Running;
        self.on_complete = Some(Box::new(on_complete));
        let script = Rc::clone(&self.script);
        script.setup(self)?;
        self.trace_state("[run] setup complete");
        self.next()
    }

    /// Begin the interview with a sink for trace lines attached.
    ///
    /// Without a sink, no trace line is ever formatted.
    pub fn debug(
        &mut self,
        logger: impl FnMut(&str) + 'static,
        on_complete: impl FnOnce(ResponseData) + 'static,
    ) -> Result<(), InterviewError> {
        self.ensure_active()?;
        self.logger = Some(Box::new(logger));
        self.trace(|| "[debug] trace sink attached".to_string());
        self.run(on_complete)
    }

    /// Register the completion callback without starting the flow.
    ///
    /// [`Interview::run`] records its own callback; this exists for
    /// interviews resumed from a snapshot, where
    /// [`Interview::restore_snapshot`] takes the place of `run` and may
    /// drive the flow to completion synchronously.
    pub fn set_on_complete(&mut self, on_complete: impl FnOnce(ResponseData) + 'static) {
        self.on_complete = Some(Box::new(on_complete));
    }

    /// Push a question onto the stack. The most recently pushed question is
    /// asked next.
    pub fn push(&mut self, question: Q) -> Result<(), InterviewError> {
        self.ensure_active()?;
        self.trace(|| format!("[push] question {question:?} pushed"));
        self.question_stack.push_front(question);
        self.trace_state("[push]");
        Ok(())
    }

    /// Pop the next question and present it.
    ///
    /// Completes the interview if the stack is empty. Otherwise the popped
    /// question becomes current, the Script gets its [`Script::prepare`]
    /// call, and the Moderator is asked to pose the question.
    pub fn next(&mut self) -> Result<(), InterviewError> {
        self.ensure_active()?;
        let Some(question) = self.question_stack.pop_front() else {
            self.trace(|| "[next] question stack empty, completing".to_string());
            return self.complete();
        };
        self.trace(|| format!("[next] popped question {question:?}"));
        self.current_question = Some(question.clone());
        self.trace_state("[next]");
        self.present(question)
    }

    /// Answer the top question programmatically, without the Moderator.
    ///
    /// Merges `response` into the store if given, then pops the top
    /// question and hands it straight to [`Script::process`]. The popped
    /// question never becomes current and gets no [`Script::prepare`] call.
    /// Completes the interview if the stack is empty.
    ///
    /// No rewind checkpoint is created, so a skip is not undoable: a
    /// following [`Interview::rewind`] undoes the most recent submission
    /// instead.
    pub fn skip(&mut self, response: Option<ResponseData>) -> Result<(), InterviewError> {
        self.ensure_active()?;
        if let Some(response) = response {
            self.answer(response)?;
        }
        let Some(question) = self.question_stack.pop_front() else {
            self.trace(|| "[skip] question stack empty, completing".to_string());
            return self.complete();
        };
        self.trace(|| format!("[skip] handing {question:?} to Script::process without asking"));
        let script = Rc::clone(&self.script);
        let responses = self.response_data.clone();
        script.process(self, question, responses)?;
        self.trace_state("[skip]");
        Ok(())
    }

    /// Shallow-merge `response` into the response store.
    ///
    /// Colliding keys are overwritten; keys absent from `response` are left
    /// untouched.
    pub fn answer(&mut self, response: ResponseData) -> Result<(), InterviewError> {
        self.ensure_active()?;
        self.trace(|| format!("[answer] merging {response:?}"));
        self.response_data.merge(response);
        self.trace_state("[answer]");
        Ok(())
    }

    /// Finish collecting answers for the current question.
    ///
    /// Takes an auto-checkpoint under a generated id, pushes that id onto
    /// the rewind stack, then hands the current question to
    /// [`Script::process`]. This is the single place rewind checkpoints are
    /// created, which is what makes [`Interview::rewind`] a one-step undo.
    pub fn submit(&mut self) -> Result<(), InterviewError> {
        self.ensure_active()?;
        let rewind_id = self.ids.generate();
        self.trace(|| format!("[submit] creating rewind checkpoint {rewind_id}"));
        self.rewind_stack.push_front(rewind_id.clone());
        self.checkpoint(&rewind_id)?;
        let Some(question) = self.current_question.clone() else {
            self.trace(|| "[submit] no current question, nothing to process".to_string());
            return Ok(());
        };
        let script = Rc::clone(&self.script);
        let responses = self.response_data.clone();
        script.process(self, question, responses)?;
        self.trace_state("[submit] Script::process complete");
        Ok(())
    }

    /// Undo the most recent submission.
    ///
    /// Restores the newest rewind checkpoint, destroys it and its rewind
    /// stack entry (it cannot be rewound to twice), and re-presents the
    /// restored current question as if it had never been answered. A no-op
    /// when the rewind stack is empty.
    pub fn rewind(&mut self) -> Result<(), InterviewError> {
        self.ensure_active()?;
        let Some(rewind_id) = self.rewind_stack.front().cloned() else {
            self.trace(|| "[rewind] rewind stack empty, nothing to undo".to_string());
            return Ok(());
        };
        self.trace(|| format!("[rewind] restoring checkpoint {rewind_id}"));
        self.restore(&rewind_id)?;
        self.checkpoints.remove(&rewind_id);
        self.rewind_stack.pop_front();
        let Some(question) = self.current_question.clone() else {
            return Ok(());
        };
        self.present(question)
    }

    /// Save the current question, question stack and response store under
    /// `id`, overwriting any existing checkpoint with that id.
    ///
    /// The stored frame is built entirely from clones, so later mutation of
    /// the live state never alters it, and vice versa.
    pub fn checkpoint(&mut self, id: &str) -> Result<(), InterviewError> {
        self.ensure_active()?;
        self.trace(|| format!("[checkpoint] storing checkpoint {id}"));
        let frame = CheckpointState {
            current_question: self.current_question.clone(),
            question_stack: self.question_stack.iter().cloned().collect(),
            response_data: self.response_data.clone(),
        };
        self.checkpoints.insert(id.to_owned(), frame);
        Ok(())
    }

    /// Overwrite the live state with clones of the checkpoint stored under
    /// `id`. A no-op if no such checkpoint exists.
    pub fn restore(&mut self, id: &str) -> Result<(), InterviewError> {
        self.ensure_active()?;
        let Some(frame) = self.checkpoints.get(id).cloned() else {
            self.trace(|| format!("[restore] no checkpoint {id}, ignoring"));
            return Ok(());
        };
        self.trace(|| format!("[restore] restoring checkpoint {id}"));
        self.current_question = frame.current_question;
        self.question_stack = frame.question_stack.into();
        self.response_data = frame.response_data;
        self.trace_state("[restore]");
        Ok(())
    }

    /// Mark a milestone as passed. Idempotent: re-marking keeps the
    /// milestone at its original first-insertion position.
    pub fn milestone(&mut self, id: &str) -> Result<(), InterviewError> {
        self.ensure_active()?;
        if self.milestones.iter().any(|m| m == id) {
            return Ok(());
        }
        self.trace(|| format!("[milestone] marking milestone {id} passed"));
        self.milestones.push(id.to_owned());
        Ok(())
    }

    /// Complete the interview.
    ///
    /// Invokes the completion callback with a clone of the response store,
    /// then enters the terminal phase. Irreversible; reached automatically
    /// when the question stack empties during [`Interview::next`] or
    /// [`Interview::skip`].
    pub fn complete(&mut self) -> Result<(), InterviewError> {
        self.ensure_active()?;
        self.trace_state("[complete] final state");
        if let Some(on_complete) = self.on_complete.take() {
            on_complete(self.response_data.clone());
        }
        self.phase = InterviewPhase::Complete;
        Ok(())
    }

    /// Export the full live state for suspension across a persistence
    /// boundary. Everything in the snapshot is a clone.
    pub fn snapshot(&self) -> StateSnapshot<Q> {
        StateSnapshot {
            question_stack: self.question_stack.iter().cloned().collect(),
            response_data: self.response_data.clone(),
            rewind_stack: self.rewind_stack.iter().cloned().collect(),
            checkpoints: self.checkpoints.clone(),
            current_question: self.current_question.clone(),
            milestones: self.milestones.clone(),
        }
    }

    /// Import a previously exported snapshot, resuming the flow.
    ///
    /// Replaces the full live state, then re-runs the presentation step
    /// ([`Script::prepare`] followed by [`Moderator::ask`]) for the
    /// restored current question, mirroring what a live interview would be
    /// doing at that point. Register a completion callback via
    /// [`Interview::set_on_complete`] first: resumption may run the flow to
    /// completion before this returns.
    pub fn restore_snapshot(&mut self, snapshot: StateSnapshot<Q>) -> Result<(), InterviewError> {
        self.ensure_active()?;
        self.trace(|| "[restore_snapshot] importing state".to_string());
        self.phase = InterviewPhase::Running;
        self.question_stack = snapshot.question_stack.into();
        self.response_data = snapshot.response_data;
        self.rewind_stack = snapshot.rewind_stack.into();
        self.checkpoints = snapshot.checkpoints;
        self.current_question = snapshot.current_question;
        self.milestones = snapshot.milestones;
        self.trace_state("[restore_snapshot]");
        let Some(question) = self.current_question.clone() else {
            return Ok(());
        };
        self.present(question)
    }

    /// Run the presentation step for `question`: `Script::prepare`, then
    /// `Moderator::ask`, each with fresh clones of the shared data.
    fn present(&mut self, question: Q) -> Result<(), InterviewError> {
        let script = Rc::clone(&self.script);
        let responses = self.response_data.clone();
        script.prepare(self, question.clone(), responses)?;
        // prepare may have mutated the store through the router
        let moderator = Rc::clone(&self.moderator);
        let responses = self.response_data.clone();
        let milestones = self.milestones.clone();
        moderator.ask(self, question, responses, milestones)
    }

    fn ensure_active(&self) -> Result<(), InterviewError> {
        if self.phase == InterviewPhase::Complete {
            Err(InterviewError::Completed)
        } else {
            Ok(())
        }
    }

    fn trace(&mut self, line: impl FnOnce() -> String) {
        if let Some(logger) = self.logger.as_mut() {
            logger(&line());
        }
    }

    fn trace_state(&mut self, context: &str) {
        if self.logger.is_none() {
            return;
        }
        let line = format!(
            "{context}: current={:?} stack={:?} responses={:?} rewind={:?} milestones={:?}",
            self.current_question,
            self.question_stack,
            self.response_data,
            self.rewind_stack,
            self.milestones,
        );
        if let Some(logger) = self.logger.as_mut() {
            logger(&line);
        }
    }
}

impl<Q: Clone + Debug> QuestionRouter<Q> for Interview<Q> {
    fn push(&mut self, question: Q) -> Result<(), InterviewError> {
        Interview::push(self, question)
    }

    fn next(&mut self) -> Result<(), InterviewError> {
        Interview::next(self)
    }

    fn skip(&mut self, response: Option<ResponseData>) -> Result<(), InterviewError> {
        Interview::skip(self, response)
    }

    fn complete(&mut self) -> Result<(), InterviewError> {
        Interview::complete(self)
    }

    fn checkpoint(&mut self, id: &str) -> Result<(), InterviewError> {
        Interview::checkpoint(self, id)
    }

    fn restore(&mut self, id: &str) -> Result<(), InterviewError> {
        Interview::restore(self, id)
    }

    fn milestone(&mut self, id: &str) -> Result<(), InterviewError> {
        Interview::milestone(self, id)
    }
}

impl<Q: Clone + Debug> ResponseConsumer for Interview<Q> {
    fn answer(&mut self, response: ResponseData) -> Result<(), InterviewError> {
        Interview::answer(self, response)
    }

    fn rewind(&mut self) -> Result<(), InterviewError> {
        Interview::rewind(self)
    }

    fn submit(&mut self) -> Result<(), InterviewError> {
        Interview::submit(self)
    }
}
