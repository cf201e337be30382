use interview_types::{InterviewError, QuestionRouter, ResponseData, Script};

/// A [`Script`] that asks a fixed list of questions in declaration order
/// and completes when they run out.
///
/// `setup` pushes the questions in reverse (the stack is last-in-first-out,
/// so the first listed question ends up on top); every `process` simply
/// advances to the next question.
#[derive(Debug, Clone)]
pub struct SequenceScript<Q> {
    questions: Vec<Q>,
}

impl<Q> SequenceScript<Q> {
    /// Create a script over the given questions.
    pub fn new(questions: impl IntoIterator<Item = Q>) -> Self {
        Self {
            questions: questions.into_iter().collect(),
        }
    }
}

impl<Q: Clone> Script<Q> for SequenceScript<Q> {
    fn setup(&self, router: &mut dyn QuestionRouter<Q>) -> Result<(), InterviewError> {
        for question in self.questions.iter().rev() {
            router.push(question.clone())?;
        }
        Ok(())
    }

    fn process(
        &self,
        router: &mut dyn QuestionRouter<Q>,
        _question: Q,
        _responses: ResponseData,
    ) -> Result<(), InterviewError> {
        router.next()
    }
}
