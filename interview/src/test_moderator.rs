//! Test moderator for driving interviews without user interaction.
//!
//! [`TestModerator`] plays back a scripted sequence of user reactions, one
//! per question it is asked to pose. This is useful for testing Scripts and
//! full interview flows.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use interview::{Interview, ResponseData, SequenceScript, TestModerator};
//!
//! let mut answer = ResponseData::new();
//! answer.insert("name", "Alice");
//!
//! let script = Rc::new(SequenceScript::new(["name".to_string()]));
//! let moderator: Rc<TestModerator<String>> = Rc::new(TestModerator::new().with_response(answer));
//!
//! let mut interview = Interview::new(script, moderator.clone());
//! interview.run(|_| {})?;
//!
//! assert!(interview.is_complete());
//! assert_eq!(moderator.asked(), vec!["name".to_string()]);
//! # Ok::<(), interview::InterviewError>(())
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::Debug;

use interview_types::{InterviewError, Moderator, ResponseConsumer, ResponseData};

/// What a [`TestModerator`] does in reaction to one `ask`.
#[derive(Debug, Clone)]
pub enum ModeratorAction {
    /// Merge the data into the response store, then submit.
    Respond(ResponseData),

    /// Undo the previous submission.
    Rewind,

    /// Return control to the caller without answering.
    Hold,
}

/// Error type for [`TestModerator`].
#[derive(Debug, thiserror::Error)]
pub enum TestModeratorError {
    /// The moderator was asked a question it has no scripted action for.
    #[error("no scripted action left for question {0}")]
    Unscripted(String),
}

/// A scripted [`Moderator`] that reacts to each question with the next
/// programmed [`ModeratorAction`], recording every question it was asked.
///
/// An ask with no action left is an error, so a flow that presents more
/// questions than the test expected fails loudly instead of stalling.
#[derive(Debug)]
pub struct TestModerator<Q> {
    actions: RefCell<VecDeque<ModeratorAction>>,
    asked: RefCell<Vec<Q>>,
}

impl<Q> TestModerator<Q> {
    /// Create a moderator with no scripted actions.
    pub fn new() -> Self {
        Self {
            actions: RefCell::new(VecDeque::new()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Script an answer for the next unanswered question: the data is
    /// merged into the response store and submitted.
    pub fn with_response(self, response: ResponseData) -> Self {
        self.with_action(ModeratorAction::Respond(response))
    }

    /// Script an undo of the previous submission.
    pub fn with_rewind(self) -> Self {
        self.with_action(ModeratorAction::Rewind)
    }

    /// Script handing control back to the caller without answering, leaving
    /// the interview waiting mid-flight.
    pub fn with_hold(self) -> Self {
        self.with_action(ModeratorAction::Hold)
    }

    /// Script an arbitrary action.
    pub fn with_action(self, action: ModeratorAction) -> Self {
        self.actions.borrow_mut().push_back(action);
        self
    }
}

impl<Q: Clone> TestModerator<Q> {
    /// Every question this moderator was asked to pose, in order.
    pub fn asked(&self) -> Vec<Q> {
        self.asked.borrow().clone()
    }
}

impl<Q> Default for TestModerator<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: Clone + Debug> Moderator<Q> for TestModerator<Q> {
    fn ask(
        &self,
        consumer: &mut dyn ResponseConsumer,
        question: Q,
        _responses: ResponseData,
        _milestones: Vec<String>,
    ) -> Result<(), InterviewError> {
        self.asked.borrow_mut().push(question.clone());
        let action = self.actions.borrow_mut().pop_front();
        match action {
            Some(ModeratorAction::Respond(response)) => {
                consumer.answer(response)?;
                consumer.submit()
            }
            Some(ModeratorAction::Rewind) => consumer.rewind(),
            Some(ModeratorAction::Hold) => Ok(()),
            None => Err(InterviewError::collaborator(TestModeratorError::Unscripted(
                format!("{question:?}"),
            ))),
        }
    }
}
