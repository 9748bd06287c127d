//! A command/query type guarding its protocol with state checks.

use precond_core::{
    Cause, StateCause, Violation, ViolationKind, require_non_empty_string_with,
    require_state_non_null, require_state_with,
};

use crate::common::expect_violation;

/// Splits a sentence once `execute` has run; `words` is only valid afterwards.
#[derive(Default)]
struct WordSplitter {
    words: Option<Vec<String>>,
    executed: bool,
}

impl WordSplitter {
    fn execute(&mut self, sentence: Option<&str>) -> Result<(), Violation> {
        require_non_empty_string_with(sentence, "sentence")?;
        self.words = sentence.map(|s| s.split_whitespace().map(str::to_owned).collect());
        self.executed = true;
        Ok(())
    }

    fn word_count(&self) -> Result<usize, Violation> {
        require_state_with(self.executed, "execute must run before word_count")?;
        require_state_non_null(&self.words)?;
        Ok(self.words.as_ref().map_or(0, Vec::len))
    }
}

#[test]
fn query_before_command_is_state_violation() {
    let splitter = WordSplitter::default();
    let violation = expect_violation(splitter.word_count(), ViolationKind::State);
    assert!(violation.to_string().contains("execute must run before word_count"));
}

#[test]
fn bad_argument_leaves_state_untouched() {
    let mut splitter = WordSplitter::default();
    let violation = expect_violation(splitter.execute(Some("")), ViolationKind::Argument);
    assert_eq!(violation.message(), Some("sentence"));
    assert!(splitter.word_count().is_err());
}

#[test]
fn query_after_command_succeeds() {
    let mut splitter = WordSplitter::default();
    splitter.execute(Some("design by contract")).unwrap();
    assert_eq!(splitter.word_count().unwrap(), 3);
}

#[test]
fn broken_invariant_reports_null_state_reference() {
    let splitter = WordSplitter {
        words: None,
        executed: true,
    };
    let violation = expect_violation(splitter.word_count(), ViolationKind::State);
    assert_eq!(violation.cause(), Cause::State(StateCause::NullReference));
}
