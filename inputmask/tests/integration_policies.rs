//! Per-kind behavior of the built-in policies.
//!
//! One module per field kind, exercising the acceptance, completion,
//! canonicalization, and display rules a text-input host relies on.

use inputmask::ValidationPolicy;

mod email {
    use super::*;

    #[test]
    fn complete_only_with_domain_and_tld() {
        let policy = ValidationPolicy::email();
        assert!(policy.is_complete("a@b.com"));
        assert!(policy.is_complete("user@mail.example.org"));
        assert!(!policy.is_complete("a@b"));
        assert!(!policy.is_complete("plainaddress"));
        assert!(!policy.is_complete(""));
    }

    #[test]
    fn never_rejects_an_edit() {
        let policy = ValidationPolicy::email();
        for text in ["", "a", "a@", "a@b", "a@b.", "a@b.com", "not an email"] {
            assert!(policy.should_accept(text), "rejected {text:?}");
        }
    }

    #[test]
    fn canonical_form_is_the_identity() {
        let policy = ValidationPolicy::email();
        assert_eq!(policy.to_canonical("a@b.com"), "a@b.com");
        assert_eq!(policy.to_display("a@b.com").as_deref(), Some("a@b.com"));
    }
}

mod integer {
    use super::*;

    #[test]
    fn default_limit_is_four_digits() {
        let policy = ValidationPolicy::integer();
        assert!(policy.should_accept("1"));
        assert!(policy.should_accept("1234"));
        assert!(!policy.should_accept("12345"));
        assert!(policy.is_complete("1234"));
        assert!(!policy.is_complete("123"));
    }

    #[test]
    fn rejects_non_digits() {
        let policy = ValidationPolicy::integer();
        assert!(!policy.should_accept("12a"));
        assert!(!policy.should_accept(" 12"));
        assert!(!policy.is_complete("12a4"));
    }

    #[test]
    fn has_no_display_formatting() {
        let policy = ValidationPolicy::integer();
        assert_eq!(policy.to_display("1234").as_deref(), Some("1234"));
        assert_eq!(policy.to_canonical("1234"), "1234");
    }
}

mod decimal {
    use super::*;

    #[test]
    fn accepts_up_to_six_integer_and_two_fraction_digits() {
        let policy = ValidationPolicy::decimal();
        assert!(policy.should_accept("1"));
        assert!(policy.should_accept("123456"));
        assert!(policy.should_accept("123456."));
        assert!(policy.should_accept("123456.12"));
        assert!(policy.should_accept(".5"));
    }

    #[test]
    fn rejects_an_over_limit_integer_part() {
        let policy = ValidationPolicy::decimal();
        // Seven integer digits, no separator present to justify a clamp.
        assert!(!policy.should_accept("1234567"));
        assert!(!policy.should_accept("1234567.1"));
    }

    #[test]
    fn rejects_malformed_fractions() {
        let policy = ValidationPolicy::decimal();
        assert!(!policy.should_accept("1.234"));
        assert!(!policy.should_accept("1.2.3"));
        assert!(!policy.should_accept("1.2a"));
    }

    #[test]
    fn completion_matches_the_acceptance_grammar() {
        let policy = ValidationPolicy::decimal();
        assert!(policy.is_complete("1"));
        assert!(policy.is_complete("123456.1"));
        assert!(policy.is_complete("0.99"));
        assert!(!policy.is_complete(".5"));
        assert!(!policy.is_complete(""));
    }
}

mod phone {
    use super::*;

    #[test]
    fn groups_as_three_three_four() {
        let policy = ValidationPolicy::phone();
        assert_eq!(policy.to_display("5551234567").as_deref(), Some("555-123-4567"));
    }

    #[test]
    fn formats_progressively_while_typing() {
        let policy = ValidationPolicy::phone();
        assert_eq!(policy.to_display("5").as_deref(), Some("5"));
        assert_eq!(policy.to_display("555").as_deref(), Some("555"));
        assert_eq!(policy.to_display("5551").as_deref(), Some("555-1"));
        assert_eq!(policy.to_display("555123").as_deref(), Some("555-123"));
        assert_eq!(policy.to_display("5551234").as_deref(), Some("555-123-4"));
    }

    #[test]
    fn wraps_first_group_once_past_twelve_characters() {
        let policy = ValidationPolicy::phone();
        // Ten digits format to exactly twelve characters, so the wrap only
        // engages once an eleventh significant character exists.
        assert_eq!(
            policy.to_display("55512345678").as_deref(),
            Some("(555)-123-45678"),
        );
    }

    #[test]
    fn canonicalizes_wrapped_and_divided_forms_alike() {
        let policy = ValidationPolicy::phone();
        assert_eq!(policy.to_canonical("(555)-123-4567"), "5551234567");
        assert_eq!(policy.to_canonical("555-123-4567"), "5551234567");
        assert!(policy.is_complete("(555)-123-4567"));
    }

    #[test]
    fn requires_exactly_ten_digits() {
        let policy = ValidationPolicy::phone();
        assert!(!policy.is_complete("555-123-456"));
        assert!(policy.is_complete("5551234567"));
        assert!(!policy.should_accept("55512345678"));
    }
}

mod social_security {
    use super::*;

    #[test]
    fn groups_as_three_two_four() {
        let policy = ValidationPolicy::ssn();
        assert_eq!(policy.to_display("123456789").as_deref(), Some("123-45-6789"));
        assert_eq!(policy.to_canonical("123-45-6789"), "123456789");
    }

    #[test]
    fn requires_exactly_nine_digits() {
        let policy = ValidationPolicy::ssn();
        assert!(policy.is_complete("123-45-6789"));
        assert!(!policy.is_complete("12345678"));
        assert!(!policy.should_accept("1234567890"));
    }
}

mod credit_card {
    use super::*;

    #[test]
    fn groups_in_fours() {
        let policy = ValidationPolicy::credit_card();
        assert_eq!(
            policy.to_display("1234567890123456").as_deref(),
            Some("1234 5678 9012 3456"),
        );
    }

    #[test]
    fn formats_progressively_while_typing() {
        let policy = ValidationPolicy::credit_card();
        assert_eq!(policy.to_display("1234").as_deref(), Some("1234"));
        assert_eq!(policy.to_display("12345").as_deref(), Some("1234 5"));
        assert_eq!(policy.to_display("123456789").as_deref(), Some("1234 5678 9"));
    }

    #[test]
    fn requires_exactly_sixteen_digits() {
        let policy = ValidationPolicy::credit_card();
        assert!(policy.is_complete("1234 5678 9012 3456"));
        assert!(!policy.is_complete("1234 5678 9012 345"));
        assert!(!policy.should_accept("12345678901234567"));
    }
}

mod date {
    use super::*;

    #[test]
    fn divides_after_the_first_two_digits() {
        let policy = ValidationPolicy::date();
        assert_eq!(policy.to_display("12").as_deref(), Some("12"));
        assert_eq!(policy.to_display("123").as_deref(), Some("12/3"));
        assert_eq!(policy.to_display("123199").as_deref(), Some("12/3199"));
    }

    #[test]
    fn requires_exactly_six_digits() {
        let policy = ValidationPolicy::date();
        assert_eq!(policy.to_canonical("12/31"), "1231");
        assert!(!policy.is_complete("1231"));
        assert!(policy.is_complete("123199"));
    }
}
