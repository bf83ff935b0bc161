use super::*;

mod factories {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn variable_holds_its_name() {
        let pattern = Pattern::variable("point");
        if let Pattern::Variable(name) = &pattern {
            assert_eq!(**name, "point");
        } else {
            panic!("expected Pattern::Variable");
        }
    }

    #[test]
    fn regex_compiles_valid_expressions() {
        let pattern = Pattern::regex(r"fo+").map(|p| p.kind_name().to_string());
        assert_eq!(pattern.ok().as_deref(), Some("regex"));
    }

    #[test]
    fn regex_rejects_invalid_expressions() {
        let result = Pattern::regex("(unclosed");
        assert!(matches!(
            result,
            Err(crate::PatternError::InvalidRegex { .. })
        ));
    }

    #[test]
    fn record_is_last_write_wins_per_key() {
        let pattern = Pattern::record([("x", Pattern::Int(1)), ("x", Pattern::Int(2))]);
        if let Pattern::Record(fields) = &pattern {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields["x"], Pattern::Int(2));
        } else {
            panic!("expected Pattern::Record");
        }
    }

    #[test]
    fn wildcard_constant_is_the_wildcard_tag() {
        assert_eq!(WILDCARD, Pattern::Wildcard);
    }
}

mod equality {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn regexes_compare_by_source() {
        let a = Pattern::regex("foo").ok();
        let b = Pattern::regex("foo").ok();
        let c = Pattern::regex("bar").ok();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn nan_literals_compare_equal() {
        assert_eq!(Pattern::Float(f64::NAN), Pattern::Float(f64::NAN));
    }

    #[test]
    fn cross_category_terms_are_unequal() {
        assert_ne!(Pattern::Int(0), Pattern::Bool(false));
        assert_ne!(Pattern::Null, Pattern::Wildcard);
    }
}

mod display {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_the_matching_notation() {
        assert_eq!(WILDCARD.to_string(), "_");
        assert_eq!(Pattern::variable("point").to_string(), "$point");
        assert_eq!(Pattern::Null.to_string(), "null");
        assert_eq!(Pattern::string("foo").to_string(), "\"foo\"");
    }

    #[test]
    fn renders_composites_with_sorted_record_keys() {
        let pattern = Pattern::record([
            ("y", Pattern::variable("b")),
            ("x", Pattern::list(vec![Pattern::Int(0), WILDCARD])),
        ]);
        assert_eq!(pattern.to_string(), "{x: [0, _], y: $b}");
    }

    #[test]
    fn renders_regexes_between_slashes() {
        let shown = Pattern::regex("fo+").map(|p| p.to_string());
        assert_eq!(shown.ok().as_deref(), Some("/fo+/"));
    }
}
