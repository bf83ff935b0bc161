use super::*;

mod lookup {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_reads_record_entries() {
        let value = Value::record([("x", Value::Int(0)), ("y", Value::Int(1))]);
        assert_eq!(*value.field("x"), Value::Int(0));
        assert_eq!(*value.field("y"), Value::Int(1));
    }

    #[test]
    fn field_is_absent_for_missing_keys() {
        let value = Value::record([("x", Value::Int(0))]);
        assert!(value.field("z").is_absent());
    }

    #[test]
    fn field_is_absent_on_non_records() {
        assert!(Value::Int(5).field("x").is_absent());
        assert!(Value::Null.field("x").is_absent());
        assert!(Value::list(vec![]).field("x").is_absent());
    }

    #[test]
    fn index_reads_list_elements() {
        let value = Value::list(vec![Value::Bool(true), Value::string("foo")]);
        assert_eq!(*value.index(1), Value::string("foo"));
    }

    #[test]
    fn index_is_absent_past_the_end_and_on_non_lists() {
        let value = Value::list(vec![Value::Bool(true)]);
        assert!(value.index(1).is_absent());
        assert!(Value::string("foo").index(0).is_absent());
    }
}

mod equality {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nan_is_equal_to_itself_as_a_term() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn null_and_absent_are_distinct() {
        assert_ne!(Value::Null, Value::Absent);
    }

    #[test]
    fn composites_compare_structurally() {
        let a = Value::record([("x", Value::list(vec![Value::Int(1)]))]);
        let b = Value::record([("x", Value::list(vec![Value::Int(1)]))]);
        let c = Value::record([("x", Value::list(vec![Value::Int(2)]))]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

mod display {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_scalars() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Absent.to_string(), "undefined");
        assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::string("foo").to_string(), "foo");
    }

    #[test]
    fn renders_composites_with_sorted_record_keys() {
        let value = Value::record([
            ("y", Value::Int(1)),
            ("x", Value::list(vec![Value::Bool(true), Value::Null])),
        ]);
        assert_eq!(value.to_string(), "{x: [true, null], y: 1}");
    }
}

mod type_names {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_category_has_a_short_name() {
        assert_eq!(Value::Absent.type_name(), "absent");
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Float(0.5).type_name(), "float");
        assert_eq!(Value::record([("x", Value::Int(0))]).type_name(), "record");
    }
}
