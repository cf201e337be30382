//! End-to-end interview flows driven through real Script and Moderator
//! collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use interview::{
    Interview, InterviewError, QuestionRouter, ResponseData, Script, SequenceScript,
    StateSnapshot, TestModerator,
};

/// Script that pushes its questions in listed order at setup (so the last
/// listed is asked first) and advances on every processed answer.
struct PushScript {
    questions: Vec<&'static str>,
}

impl Script<String> for PushScript {
    fn setup(&self, router: &mut dyn QuestionRouter<String>) -> Result<(), InterviewError> {
        for question in &self.questions {
            router.push(question.to_string())?;
        }
        Ok(())
    }

    fn process(
        &self,
        router: &mut dyn QuestionRouter<String>,
        _question: String,
        _responses: ResponseData,
    ) -> Result<(), InterviewError> {
        router.next()
    }
}

fn response(key: &str, value: &str) -> ResponseData {
    let mut data = ResponseData::new();
    data.insert(key, value);
    data
}

#[test]
fn pushed_questions_are_asked_in_lifo_order() {
    let script = Rc::new(PushScript {
        questions: vec!["name", "age"],
    });
    let moderator = Rc::new(
        TestModerator::new()
            .with_response(response("age", "30"))
            .with_response(response("name", "Alice")),
    );

    let completions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&completions);

    let mut interview: Interview<String> = Interview::new(script, moderator.clone());
    interview
        .run(move |data| sink.borrow_mut().push(data))
        .unwrap();

    // "age" was pushed last, so it is asked first
    assert_eq!(
        moderator.asked(),
        vec!["age".to_string(), "name".to_string()]
    );
    assert!(interview.is_complete());

    let completions = completions.borrow();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].get("age").unwrap().as_str(), Some("30"));
    assert_eq!(completions[0].get("name").unwrap().as_str(), Some("Alice"));
}

#[test]
fn sequence_script_asks_in_declaration_order() {
    let script = Rc::new(SequenceScript::new([
        "first".to_string(),
        "second".to_string(),
        "third".to_string(),
    ]));
    let moderator = Rc::new(
        TestModerator::new()
            .with_response(response("first", "1"))
            .with_response(response("second", "2"))
            .with_response(response("third", "3")),
    );

    let mut interview: Interview<String> = Interview::new(script, moderator.clone());
    interview.run(|_| {}).unwrap();

    assert_eq!(
        moderator.asked(),
        vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string()
        ]
    );
    assert!(interview.is_complete());
}

#[test]
fn rewind_undoes_one_submission_and_re_presents() {
    let script = Rc::new(SequenceScript::new([
        "color".to_string(),
        "food".to_string(),
    ]));
    let moderator = Rc::new(
        TestModerator::new()
            .with_response(response("color", "red"))
            .with_rewind()
            .with_response(response("color", "blue"))
            .with_response(response("food", "pasta")),
    );

    let completions = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&completions);

    let mut interview: Interview<String> = Interview::new(script, moderator.clone());
    interview
        .run(move |data| *sink.borrow_mut() = Some(data))
        .unwrap();

    // color asked, answered; food asked, rewound; color re-asked; food asked
    assert_eq!(
        moderator.asked(),
        vec![
            "color".to_string(),
            "food".to_string(),
            "color".to_string(),
            "food".to_string()
        ]
    );

    let data = completions.borrow_mut().take().unwrap();
    assert_eq!(data.get("color").unwrap().as_str(), Some("blue"));
    assert_eq!(data.get("food").unwrap().as_str(), Some("pasta"));
}

#[test]
fn suspend_and_resume_across_a_serialization_boundary() {
    let script = Rc::new(SequenceScript::new(["name".to_string(), "age".to_string()]));

    // first instance answers "name" and then hands control back mid-flight
    let moderator = Rc::new(
        TestModerator::new()
            .with_response(response("name", "Alice"))
            .with_hold(),
    );
    let first_completed = Rc::new(RefCell::new(false));
    let sink = Rc::clone(&first_completed);

    let mut interview: Interview<String> = Interview::new(script.clone(), moderator);
    interview
        .run(move |_| *sink.borrow_mut() = true)
        .unwrap();
    assert!(!*first_completed.borrow());

    let json = serde_json::to_string(&interview.snapshot()).unwrap();
    drop(interview);

    // a fresh instance picks up where the first left off
    let snapshot: StateSnapshot<String> = serde_json::from_str(&json).unwrap();
    let moderator = Rc::new(TestModerator::new().with_response(response("age", "30")));
    let completions = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&completions);

    let mut resumed: Interview<String> = Interview::new(script, moderator.clone());
    resumed.set_on_complete(move |data| *sink.borrow_mut() = Some(data));
    resumed.restore_snapshot(snapshot).unwrap();

    // the restored current question was re-presented
    assert_eq!(moderator.asked(), vec!["age".to_string()]);
    assert!(resumed.is_complete());

    let data = completions.borrow_mut().take().unwrap();
    assert_eq!(data.get("name").unwrap().as_str(), Some("Alice"));
    assert_eq!(data.get("age").unwrap().as_str(), Some("30"));
}

#[test]
fn completed_interview_rejects_further_driving() {
    let script = Rc::new(SequenceScript::new(["name".to_string()]));
    let moderator = Rc::new(TestModerator::new().with_response(response("name", "Alice")));

    let mut interview: Interview<String> = Interview::new(script, moderator);
    interview.run(|_| {}).unwrap();
    assert!(interview.is_complete());

    assert!(interview.push("extra".to_string()).unwrap_err().is_completed());
    assert!(interview.run(|_| {}).unwrap_err().is_completed());
}

#[test]
fn collaborator_errors_propagate_through_run() {
    struct FailingScript;

    impl Script<String> for FailingScript {
        fn setup(&self, _router: &mut dyn QuestionRouter<String>) -> Result<(), InterviewError> {
            Err(InterviewError::collaborator(anyhow::anyhow!(
                "script refused to start"
            )))
        }

        fn process(
            &self,
            _router: &mut dyn QuestionRouter<String>,
            _question: String,
            _responses: ResponseData,
        ) -> Result<(), InterviewError> {
            Ok(())
        }
    }

    let mut interview: Interview<String> =
        Interview::new(Rc::new(FailingScript), Rc::new(TestModerator::new()));
    let err = interview.run(|_| {}).unwrap_err();

    assert!(!err.is_completed());
    assert_eq!(err.to_string(), "script refused to start");
    // the failure did not complete the interview
    assert!(!interview.is_complete());
}
