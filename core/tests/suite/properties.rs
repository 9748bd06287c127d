//! Property tests: idempotence, message containment, traversal results.

use std::collections::HashMap;

use precond_core::{
    ArgumentCause, Cause, MessageStyle, ViolationKind, require, require_no_null_elements,
    require_no_null_entries, require_non_empty_string, require_non_empty_string_with,
    require_non_null, require_state, require_state_non_null_with, require_state_with,
    require_with,
};
use proptest::prelude::*;

use crate::common::outcome;

proptest! {
    #[test]
    fn non_empty_inputs_always_pass(s in ".{1,32}") {
        prop_assert!(require_non_empty_string(Some(s.as_str())).is_ok());
        prop_assert!(require_non_null(Some(s.as_str())).is_ok());
    }

    #[test]
    fn predicate_checks_are_idempotent(predicate in any::<bool>(), message in ".*") {
        prop_assert_eq!(outcome(&require(predicate)), outcome(&require(predicate)));
        prop_assert_eq!(
            require_with(predicate, &message),
            require_with(predicate, &message)
        );
        prop_assert_eq!(
            require_state_with(predicate, &message),
            require_state_with(predicate, &message)
        );
    }

    #[test]
    fn predicate_kind_depends_only_on_check(predicate in any::<bool>()) {
        let expected_argument = (!predicate).then_some(ViolationKind::Argument);
        let expected_state = (!predicate).then_some(ViolationKind::State);
        prop_assert_eq!(outcome(&require(predicate)), expected_argument);
        prop_assert_eq!(outcome(&require_state(predicate)), expected_state);
    }

    #[test]
    fn messages_survive_in_every_style(message in ".+") {
        let failures = [
            require_with(false, &message).unwrap_err(),
            require_state_with(false, &message).unwrap_err(),
            require_non_empty_string_with(Some(""), &message).unwrap_err(),
            require_state_non_null_with(None::<u8>, &message).unwrap_err(),
        ];
        for violation in failures {
            prop_assert!(violation.to_string().contains(message.as_str()));
            prop_assert!(violation.render(MessageStyle::Replace).contains(message.as_str()));
            prop_assert!(violation.render(MessageStyle::Parenthesized).contains(message.as_str()));
        }
    }

    #[test]
    fn first_null_element_is_reported(elements in prop::collection::vec(prop::option::of(any::<u16>()), 0..64)) {
        let result = require_no_null_elements(Some(&elements));
        match elements.iter().position(Option::is_none) {
            Some(index) => prop_assert_eq!(
                result.unwrap_err().cause(),
                Cause::Argument(ArgumentCause::NullElement { index })
            ),
            None => prop_assert!(result.is_ok()),
        }
    }

    #[test]
    fn entries_fail_iff_any_key_or_value_is_null(
        entries in prop::collection::vec(
            (prop::option::of(any::<u8>()), prop::option::of(any::<u8>())),
            0..32,
        )
    ) {
        let map: HashMap<_, _> = entries.into_iter().collect();
        let has_null = map.iter().any(|(key, value)| key.is_none() || value.is_none());

        let first = require_no_null_entries(Some(&map));
        let second = require_no_null_entries(Some(&map));
        prop_assert_eq!(first.is_err(), has_null);
        prop_assert_eq!(first, second);
    }
}
