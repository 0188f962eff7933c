#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::question::schema::{self, ValidationError};
    use crate::tests::support::draft;

    fn keys(expected: &[&str]) -> BTreeSet<String> {
        expected.iter().map(|key| key.to_string()).collect()
    }

    #[test]
    fn single_string_answer_parses() {
        let raw = r#"[{
            "question": "Pick one",
            "options": {"A": "first", "B": "second"},
            "correctAnswer": "B",
            "explanation": "because"
        }]"#;

        let drafts = schema::parse_batch(raw).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].correct, keys(&["B"]));
    }

    #[test]
    fn array_answer_parses() {
        let raw = r#"[{
            "question": "Pick two",
            "options": {"A": "first", "B": "second", "C": "third"},
            "correctAnswer": ["A", "C"],
            "explanation": "because"
        }]"#;

        let drafts = schema::parse_batch(raw).unwrap();
        assert_eq!(drafts[0].correct, keys(&["A", "C"]));
    }

    #[test]
    fn bracket_literal_parses_to_a_set() {
        let raw = r#"[{
            "question": "Pick two",
            "options": {"A": "first", "B": "second", "C": "third"},
            "correctAnswer": "[A, C]",
            "explanation": "because"
        }]"#;

        let drafts = schema::parse_batch(raw).unwrap();
        assert_eq!(drafts[0].correct, keys(&["A", "C"]));
    }

    #[test]
    fn correct_answer_key_alias_is_accepted() {
        let raw = r#"[{
            "question": "Generator shape",
            "options": {"A": "first", "B": "second"},
            "correctAnswerKey": "A",
            "explanation": "because"
        }]"#;

        let drafts = schema::parse_batch(raw).unwrap();
        assert_eq!(drafts[0].correct, keys(&["A"]));
    }

    #[test]
    fn one_bad_record_rejects_the_whole_batch() {
        let raw = r#"[
            {
                "question": "Fine",
                "options": {"A": "first", "B": "second"},
                "correctAnswer": "A",
                "explanation": "ok"
            },
            {
                "question": "Broken",
                "options": {"A": "first", "B": "second"},
                "correctAnswer": "Z",
                "explanation": "bad key"
            }
        ]"#;

        let error = schema::parse_batch(raw).unwrap_err();
        match error {
            ValidationError::Record { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(*source, ValidationError::UnknownAnswerKey("Z".to_string()));
            }
            other => panic!("Unexpected error: {}", other),
        }
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            schema::parse_batch("not json at all"),
            Err(ValidationError::Malformed(_))
        ));
    }

    #[test]
    fn missing_fields_are_rejected() {
        let raw = r#"[{"question": "No options here", "explanation": "x"}]"#;

        assert!(matches!(
            schema::parse_batch(raw),
            Err(ValidationError::Malformed(_))
        ));
    }

    #[test]
    fn option_count_bounds_are_enforced() {
        let mut too_few = draft("Too few", &["A"]);
        too_few.options.retain(|key, _| key == "A");
        assert_eq!(too_few.validate(), Err(ValidationError::OptionCount(1)));

        let mut too_many = draft("Too many", &["A"]);
        for key in ["E", "F", "G"] {
            too_many.options.insert(key.to_string(), "extra".to_string());
        }
        assert_eq!(too_many.validate(), Err(ValidationError::OptionCount(7)));
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let mut blank = draft("placeholder", &["A"]);
        blank.prompt = "   ".to_string();

        assert_eq!(blank.validate(), Err(ValidationError::EmptyPrompt));
    }

    #[test]
    fn empty_answer_set_is_rejected() {
        let mut unanswered = draft("No answer", &["A"]);
        unanswered.correct.clear();

        assert_eq!(unanswered.validate(), Err(ValidationError::EmptyAnswer));
    }
}
