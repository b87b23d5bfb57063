#![allow(deprecated)]

use enum_lookup::lookup_enum;

lookup_enum! {
    #[lookup(field = "value", constructor_argument_ordinal = 0)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Handwritten {
        Test1(11),
        Test2(22);

        value: i32,

        fn lookup() -> &'static str {
            "handwritten"
        }
    }
}

lookup_enum! {
    #[lookup(field = "value", constructor_argument_ordinal = 0)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Regenerated {
        Test1(11),
        Test2(22);

        value: i32,

        #[lookup_generated]
        pub fn lookup(value: i32) -> Option<Regenerated> {
            if value == 11 {
                return Some(Regenerated::Test1);
            }
            None
        }
    }
}

#[test]
fn test_user_method_is_left_untouched() {
    assert_eq!(Handwritten::lookup(), "handwritten");
    assert_eq!(Handwritten::Test2.value(), 22);
}

#[test]
fn test_previous_output_is_not_generated_again() {
    assert_eq!(Regenerated::lookup(11), Some(Regenerated::Test1));
    assert_eq!(Regenerated::lookup(22), None);
}
