//! Property tests: purity, broadcast shape and sign folding.

use formula_operators::operators::range::aligned_shape;
use formula_operators::{apply_infix, apply_prefix, ErrorCode, Range, Value};
use proptest::prelude::*;

const TOKENS: [&str; 12] = ["=", "<>", "<", ">", "<=", ">=", "&", "+", "-", "*", "/", "^"];

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => (-1.0e6f64..1.0e6).prop_map(Value::Number),
        2 => "[a-c0-9]{0,3}".prop_map(Value::Text),
        1 => any::<bool>().prop_map(Value::Boolean),
        1 => Just(Value::Empty),
        1 => prop::sample::select(ErrorCode::ALL.to_vec()).prop_map(|code| Value::from(code)),
    ]
}

fn range() -> impl Strategy<Value = Range> {
    (1usize..4, 1usize..4)
        .prop_flat_map(|(h, w)| prop::collection::vec(prop::collection::vec(cell(), w), h))
        .prop_map(|rows| Range::new(rows).unwrap())
}

fn operand() -> impl Strategy<Value = Value> {
    prop_oneof![cell(), range().prop_map(Value::Range)]
}

fn token() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TOKENS.to_vec())
}

proptest! {
    #[test]
    fn infix_is_pure(left in operand(), op in token(), right in operand(), ls in any::<bool>(), rs in any::<bool>()) {
        let (left0, right0) = (left.clone(), right.clone());
        let first = apply_infix(&left, op, &right, ls, rs);
        let second = apply_infix(&left, op, &right, ls, rs);
        prop_assert_eq!(first, second);
        prop_assert_eq!(left, left0);
        prop_assert_eq!(right, right0);
    }

    #[test]
    fn range_results_take_the_larger_shape(left in range(), right in range(), op in prop::sample::select(vec!["+", "*", "=", "<"])) {
        let expected = (left.height().max(right.height()), left.width().max(right.width()));
        prop_assert_eq!(aligned_shape(&left, &right), expected);
        let result = apply_infix(&Value::Range(left), op, &Value::Range(right), false, false);
        match result {
            Ok(Value::Range(r)) => prop_assert_eq!((r.height(), r.width()), expected),
            other => prop_assert!(false, "expected a range, got {:?}", other),
        }
    }

    #[test]
    fn double_negation_is_identity(n in -1.0e12f64..1.0e12) {
        prop_assert_eq!(apply_prefix(&["-", "-"], &Value::Number(n), false), Ok(Value::Number(n)));
        prop_assert_eq!(apply_prefix(&["-"], &Value::Number(n), false), Ok(Value::Number(-n)));
    }

    #[test]
    fn equal_and_not_equal_disagree(left in cell(), right in cell()) {
        prop_assume!(left.as_error().is_none() && right.as_error().is_none());
        let eq = apply_infix(&left, "=", &right, false, false);
        let ne = apply_infix(&left, "<>", &right, false, false);
        match (eq, ne) {
            (Ok(Value::Boolean(a)), Ok(Value::Boolean(b))) => prop_assert_ne!(a, b),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }
}
