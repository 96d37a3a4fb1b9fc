use std::fs;

use assigna::run_program;

fn assert_bindings(src: &str, expected: &[(&str, i64)]) {
    match run_program(src) {
        Ok(environment) => {
            let bindings: Vec<(&str, i64)> = environment.iter().collect();
            assert_eq!(bindings, expected, "Wrong bindings for script:\n{src}");
        },
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) {
    if run_program(src).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_bindings("x = 5;", &[("x", 5)]);
    assert_bindings("x = 1+2;", &[("x", 3)]);
    assert_bindings("x = 8-5;", &[("x", 3)]);
    assert_bindings("x = 7*9;", &[("x", 63)]);
    assert_bindings("x = 0;", &[("x", 0)]);
}

#[test]
fn identifiers_refer_to_earlier_lines() {
    assert_bindings("x = 2;\ny = x*x;", &[("x", 2), ("y", 4)]);
    assert_bindings("_a = 1;\n_b = _a+_a;", &[("_a", 1), ("_b", 2)]);
}

#[test]
fn unary_signs_and_chains() {
    assert_bindings("x = -5;", &[("x", -5)]);
    assert_bindings("x = +5;", &[("x", 5)]);
    assert_bindings("x = ---5;", &[("x", -5)]);
    assert_bindings("x = 1;\ny = --x;", &[("x", 1), ("y", 1)]);
    assert_bindings("x = 2*-3;", &[("x", -6)]);
}

#[test]
fn parenthesized_groups() {
    assert_bindings("x = (1+2);", &[("x", 3)]);
    assert_bindings("x = (1+2)*(2-5);", &[("x", -9)]);
    assert_bindings("x = -(2*3);", &[("x", -6)]);
}

#[test]
fn reference_program() {
    // Three negations of (1+2) give -3; (1+(-2)) gives -1; -3 * -1 = 3.
    assert_bindings("x = 1;\ny = 2;\nz = ---(x+y)*(x+-y);",
                    &[("x", 1), ("y", 2), ("z", 3)]);
}

#[test]
fn bindings_enumerate_in_first_insertion_order() {
    assert_bindings("b = 1;\na = 2;\nc = 3;", &[("b", 1), ("a", 2), ("c", 3)]);
}

#[test]
fn rebinding_keeps_first_position() {
    assert_bindings("x = 1;\ny = 2;\nx = 3;", &[("x", 3), ("y", 2)]);
}

#[test]
fn empty_lines_are_skipped() {
    assert_bindings("x = 1;\n\ny = 2;\n", &[("x", 1), ("y", 2)]);
    assert_bindings("", &[]);
}

#[test]
fn exact_delimiters_are_required() {
    assert_failure("x=5;");
    assert_failure("x =5;");
    assert_failure("x= 5;");
    assert_failure("x  =  5;");
    assert_failure("x = 5");
    assert_failure("x = 5 ;");
    assert_failure(" x = 5;");
}

#[test]
fn trailing_text_is_an_error() {
    assert_failure("x = 5; ");
    assert_failure("x = 1;y = 2;");
    assert_failure("x = 5;;");
}

#[test]
fn a_group_must_hold_a_full_expression() {
    assert_failure("x = (5);");
    assert_failure("x = ();");
    assert_failure("x = (1+2;");
}

#[test]
fn nested_parentheses_are_rejected() {
    // The group is closed by the first ')', not a depth-matched one.
    assert_failure("x = (1+(2+3));");
}

#[test]
fn no_operator_chaining() {
    assert_failure("x = 1+2+3;");
}

#[test]
fn leading_zeros_are_rejected() {
    assert_failure("x = 007;");
    assert_failure("x = 01;");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("x = q;");
    assert_failure("x = 1;\ny = x+z;");
}

#[test]
fn forward_references_are_impossible() {
    assert_failure("x = y;\ny = 1;");
}

#[test]
fn oversized_literal_is_error() {
    assert_failure("x = 99999999999999999999;");
}

#[test]
fn overflow_is_error_not_wrap() {
    assert_bindings("x = 9223372036854775807;", &[("x", 9_223_372_036_854_775_807)]);
    assert_failure("x = 9223372036854775807;\ny = x+x;");
    assert_failure("x = 9223372036854775807;\ny = x*x;");
}

#[test]
fn failures_carry_the_offending_line_number() {
    let error = run_program("x = 1;\ny = x+q;\nz = 3;").unwrap_err();
    assert_eq!(error.line_number(), 2);

    let error = run_program("x = 1;\n\nbroken").unwrap_err();
    assert_eq!(error.line_number(), 3);
}

#[test]
fn failure_stops_the_run_before_later_bindings() {
    // The error on line 2 must abort before line 3 could bind 'z'.
    assert_failure("x = 1;\ny = ;\nz = 2;");
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.assigna").unwrap();
    assert_bindings(&contents,
                    &[("x", 1), ("y", 2), ("z", 3), ("total", 9), ("sign", -9), ("copy", -9)]);
}
