//! # interview
//!
//! A stack-based engine for stateful question/answer flows. An
//! [`Interview`] tracks which question is active, accumulates structured
//! answers, supports undo ([`Interview::rewind`]) and named save points
//! ([`Interview::checkpoint`] / [`Interview::restore`]), and notifies a
//! caller-supplied callback on completion.
//!
//! The engine routes questions but never interprets them: what to ask next
//! is decided by a [`Script`], and how to ask it by a [`Moderator`]. Each
//! collaborator sees only its own narrow control surface
//! ([`QuestionRouter`] for the Script, [`ResponseConsumer`] for the
//! Moderator), both implemented by the same engine.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use interview::{Interview, ResponseData, SequenceScript, TestModerator};
//!
//! let script = Rc::new(SequenceScript::new(["name".to_string(), "quest".to_string()]));
//!
//! let mut name = ResponseData::new();
//! name.insert("name", "Arthur");
//! let mut quest = ResponseData::new();
//! quest.insert("quest", "the grail");
//! let moderator: Rc<TestModerator<String>> =
//!     Rc::new(TestModerator::new().with_response(name).with_response(quest));
//!
//! let result = Rc::new(RefCell::new(None));
//! let sink = Rc::clone(&result);
//!
//! let mut interview = Interview::new(script, moderator);
//! interview.run(move |data| *sink.borrow_mut() = Some(data))?;
//!
//! let data = result.borrow_mut().take().unwrap();
//! assert_eq!(data.get("quest").unwrap().as_str(), Some("the grail"));
//! # Ok::<(), interview::InterviewError>(())
//! ```
//!
//! A mid-flight interview can be suspended with [`Interview::snapshot`] and
//! resumed on a fresh instance with [`Interview::restore_snapshot`]; the
//! snapshot is the only serializable representation of engine state.

// Re-export all types from interview-types
pub use interview_types::*;

mod interview;
pub use interview::{Interview, InterviewPhase};

mod id;
pub use id::{SequenceGenerator, UuidGenerator};

mod sequence;
pub use sequence::SequenceScript;

// Test moderator for driving interviews without user interaction
mod test_moderator;
pub use test_moderator::{ModeratorAction, TestModerator, TestModeratorError};
