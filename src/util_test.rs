use super::*;

mod normalize_upper {
    use super::*;

    #[test]
    fn should_return_ascii_uppercase_when_input_has_lowercase_then_allocate() {
        let result = normalize_upper("PaTcH");

        assert_eq!(result, "PATCH");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn should_borrow_original_when_input_already_uppercase_then_skip_allocation() {
        let result = normalize_upper("DELETE");

        assert!(matches!(result, Cow::Borrowed("DELETE")));
    }

    #[test]
    fn should_leave_non_ascii_characters_untouched_when_input_unicode() {
        let result = normalize_upper("poſt");

        assert_eq!(result, "POſT");
    }

    #[test]
    fn should_return_empty_when_input_empty() {
        let result = normalize_upper("");

        assert!(matches!(result, Cow::Borrowed("")));
    }
}

mod is_http_token {
    use super::*;

    #[test]
    fn should_return_true_when_value_contains_valid_token_characters_then_accept_value() {
        assert!(is_http_token("PROPFIND"));
        assert!(is_http_token("M-SEARCH"));
    }

    #[test]
    fn should_return_false_when_value_contains_invalid_character_then_reject_value() {
        assert!(!is_http_token("GET /"));
        assert!(!is_http_token("PO:ST"));
    }

    #[test]
    fn should_return_false_when_value_empty_then_reject_value() {
        assert!(!is_http_token(""));
    }
}

mod header_case_from_env {
    use super::*;

    #[test]
    fn should_title_case_each_segment_when_key_has_underscores() {
        assert_eq!(header_case_from_env("X_HTTP_METHOD_OVERRIDE"), "X-Http-Method-Override");
    }

    #[test]
    fn should_capitalize_single_word_when_key_has_no_separator() {
        assert_eq!(header_case_from_env("ACCEPT"), "Accept");
    }

    #[test]
    fn should_skip_empty_segments_when_key_has_repeated_separators() {
        assert_eq!(header_case_from_env("X__TRACE_"), "X-Trace");
    }
}
