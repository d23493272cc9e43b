use minilang::{
    SUCCESS_MESSAGE,
    ast::VarKind,
    config::{Config, OverflowPolicy},
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        cursor::MAX_NESTING_DEPTH, evaluator::core::Context, lexer::strip_whitespace,
        symbol_table::SymbolTable,
    },
    parse, run,
};

fn run_with(src: &str, overflow: OverflowPolicy) -> (Result<(), Error>, String) {
    let mut out = Vec::new();
    let result = run(src, &Config::with_overflow(overflow), &mut out);
    (result, String::from_utf8(out).expect("output is UTF-8"))
}

/// Runs `src` and returns the printed lines, without the success message.
fn printed(src: &str) -> Vec<String> {
    let (result, out) = run_with(src, OverflowPolicy::Wrap);
    if let Err(e) = result {
        panic!("Program failed: {e}\n{src}");
    }
    let mut lines: Vec<String> = out.lines().map(str::to_string).collect();
    assert_eq!(lines.pop().as_deref(), Some(SUCCESS_MESSAGE));
    lines
}

fn assert_prints(src: &str, expected: &[&str]) {
    assert_eq!(printed(src), expected, "program: {src}");
}

fn print_value(expr: &str) -> String {
    let src = format!("program int a; begin a = {expr}; print a; end");
    printed(&src).remove(0)
}

fn parse_failure(src: &str) -> ParseError {
    match parse(src) {
        Ok(program) => panic!("Parsed but was expected to fail: {program:?}"),
        Err(e) => e,
    }
}

fn runtime_failure(src: &str, overflow: OverflowPolicy) -> (RuntimeError, String) {
    match run_with(src, overflow) {
        (Err(Error::Runtime(e)), out) => (e, out),
        (other, _) => panic!("Expected a runtime error, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_prints("program int a; begin a=2+3*4; print a; end", &["14"]);
    assert_eq!(print_value("2*3+4"), "10");
    assert_eq!(print_value("10-2*3"), "4");
}

#[test]
fn power_binds_tighter_than_multiplication() {
    assert_eq!(print_value("2*3^2"), "18");
    assert_eq!(print_value("3^2*2"), "18");
    assert_eq!(print_value("2^3+1"), "9");
}

#[test]
fn power_is_right_associative() {
    assert_prints("program int a; begin a=2^3^2; print a; end", &["512"]);
    assert_eq!(print_value("2^2^2^2"), "65536");
}

#[test]
fn subtraction_and_division_fold_left() {
    assert_eq!(print_value("10-3-2"), "5");
    assert_eq!(print_value("100/10/5"), "2");
    assert_eq!(print_value("8/2*4"), "16");
}

#[test]
fn division_truncates_toward_zero() {
    assert_prints("program int a; begin a=7/2; print a; end", &["3"]);
    assert_eq!(print_value("0-7/2"), "-3");
    assert_eq!(print_value("(0-7)/2"), "-3");
    assert_eq!(print_value("1/3"), "0");
}

#[test]
fn parentheses_override_precedence() {
    assert_prints("program int a; begin a=(2+3)*4; print a; end", &["20"]);
    assert_eq!(print_value("(2^3)^2"), "64");
    assert_eq!(print_value("((((7))))"), "7");
    assert_eq!(print_value("2*(3+(4-1))"), "12");
}

#[test]
fn negative_exponents_truncate() {
    assert_eq!(print_value("2^(0-1)"), "0");
    assert_eq!(print_value("1^(0-5)"), "1");
    assert_eq!(print_value("(0-1)^(0-3)"), "-1");
    assert_eq!(print_value("(0-1)^(0-4)"), "1");
    assert_eq!(print_value("5^0"), "1");
}

#[test]
fn statements_see_earlier_effects() {
    assert_prints("program int a, b; begin a = 3; b = a * a; print b; a = b + a; print a; end",
                  &["9", "12"]);
    assert_prints("program int n; begin n = 1; n = n + 1; n = n * 10; print n; end",
                  &["20"]);
}

#[test]
fn variables_start_at_zero() {
    assert_prints("program int a; double b; begin print a; print b + 1; end",
                  &["0", "1"]);
}

#[test]
fn double_declarations_evaluate_as_integers() {
    assert_prints("program double x; begin x = 7 / 2; print x; end", &["3"]);
}

#[test]
fn print_writes_one_line_per_statement_in_order() {
    assert_prints("program begin print 1; print 2 + 2; print 3 * 3; end",
                  &["1", "4", "9"]);
}

#[test]
fn whitespace_is_insignificant() {
    let spaced = "program\n  int   alpha ,\tbeta ;\nbegin\n  alpha = 1 2 ;\n  beta = alpha\n * 2;\n  print beta ;\nend\n";
    assert_prints(spaced, &["24"]);
    assert_prints("programintx;beginx=5;printx;end", &["5"]);
}

#[test]
fn keywords_match_by_prefix() {
    assert_prints("program int x; begin x = 4; pr int x; end", &["4"]);
    // `endless` starts with `end`, so the statement list stops there.
    assert_prints("program int endless; begin endless = 1; end", &[]);
}

#[test]
fn text_after_end_is_ignored() {
    assert_prints("program begin print 1; end this is not parsed (", &["1"]);
}

#[test]
fn empty_program_only_reports_success() {
    let (result, out) = run_with("program begin end", OverflowPolicy::Wrap);
    assert!(result.is_ok());
    assert_eq!(out, format!("{SUCCESS_MESSAGE}\n"));
}

#[test]
fn redeclaration_is_shadowed_by_first_entry() {
    assert_prints("program int a; int a; begin a=5; print a; end", &["5"]);

    let program = parse("program int a; double a; begin a = 5; end").expect("valid program");
    let mut context = Context::new(Config::default());
    context.eval_program(&program, &mut Vec::new())
           .expect("program runs");

    let entries: Vec<_> = context.symbols
                                 .iter()
                                 .map(|v| (v.name.as_str(), v.kind, v.value))
                                 .collect();
    assert_eq!(entries,
               [("a", VarKind::Int, 5), ("a", VarKind::Double, 0)]);
}

#[test]
fn symbol_table_rejects_unknown_names() {
    let mut table = SymbolTable::new();
    assert!(table.is_empty());
    assert_eq!(table.read("x", 3),
               Err(RuntimeError::UndeclaredVariable { name: "x".to_string(),
                                                      line: 3, }));
    assert!(table.write("x", 1, 4).is_err());
    assert!(table.is_empty());
}

#[test]
fn reruns_are_idempotent() {
    let src = "program int a, b; begin a = 3; b = a ^ a; print b; a = 0; print a; end";
    let first = run_with(src, OverflowPolicy::Wrap);
    let second = run_with(src, OverflowPolicy::Wrap);
    assert!(first.0.is_ok() && second.0.is_ok());
    assert_eq!(first.1, second.1);

    let program = parse(src).expect("valid program");
    let outputs: Vec<Vec<u8>> = (0..2).map(|_| {
                                          let mut out = Vec::new();
                                          Context::new(Config::default()).eval_program(&program,
                                                                                       &mut out)
                                                                         .expect("program runs");
                                          out
                                      })
                                      .collect();
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn undeclared_read_is_runtime_error() {
    let (err, out) = runtime_failure("program begin print x; end", OverflowPolicy::Wrap);
    assert_eq!(err,
               RuntimeError::UndeclaredVariable { name: "x".to_string(),
                                                  line: 1, });
    assert!(err.to_string().contains("'x'"));
    assert!(out.is_empty());
}

#[test]
fn undeclared_assignment_is_runtime_error() {
    let (err, _) = runtime_failure("program int a; begin b = 1; end", OverflowPolicy::Wrap);
    assert!(matches!(err, RuntimeError::UndeclaredVariable { ref name, .. } if name == "b"));
}

#[test]
fn runtime_error_keeps_earlier_output_and_stops() {
    let src = "program int a;\nbegin\n print 1;\n a = y + 1;\n print 2;\nend";
    let (err, out) = runtime_failure(src, OverflowPolicy::Wrap);
    assert_eq!(err,
               RuntimeError::UndeclaredVariable { name: "y".to_string(),
                                                  line: 4, });
    assert_eq!(out, "1\n");
}

#[test]
fn division_by_zero_is_runtime_error() {
    let (err, _) = runtime_failure("program int a; begin a = 1 / (2 - 2); end",
                                   OverflowPolicy::Wrap);
    assert!(matches!(err, RuntimeError::DivisionByZero { .. }));

    let (err, _) = runtime_failure("program int a; begin a = 0 ^ (0 - 1); end",
                                   OverflowPolicy::Wrap);
    assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
}

#[test]
fn overflow_follows_policy() {
    let src = "program int a; begin a = 2 ^ 63; print a; end";

    let (result, out) = run_with(src, OverflowPolicy::Wrap);
    assert!(result.is_ok());
    assert!(out.starts_with(&format!("{}\n", i64::MIN)));

    let (result, out) = run_with(src, OverflowPolicy::Saturate);
    assert!(result.is_ok());
    assert!(out.starts_with(&format!("{}\n", i64::MAX)));

    let (err, out) = runtime_failure(src, OverflowPolicy::Error);
    assert!(matches!(err, RuntimeError::Overflow { .. }));
    assert!(out.is_empty());
}

#[test]
fn saturating_power_keeps_sign() {
    let src = "program int a; begin a = (0 - 2) ^ 65; print a; end";
    let (result, out) = run_with(src, OverflowPolicy::Saturate);
    assert!(result.is_ok());
    assert!(out.starts_with(&format!("{}\n", i64::MIN)));
}

#[test]
fn overflow_applies_to_every_operator() {
    let max = i64::MAX;
    for expr in [format!("{max} + 1"),
                 format!("0 - {max} - 2"),
                 format!("{max} * 2"),
                 format!("(0 - {max} - 1) / (0 - 1)")]
    {
        let src = format!("program int a; begin a = {expr}; end");
        let (err, _) = runtime_failure(&src, OverflowPolicy::Error);
        assert!(matches!(err, RuntimeError::Overflow { .. }), "{expr}");
    }
    assert_eq!(print_value(&format!("{max} + 1")), i64::MIN.to_string());
}

#[test]
fn huge_power_in_wide_domain_narrows_exactly() {
    assert_eq!(print_value("2^62"), (1_i64 << 62).to_string());
    assert_eq!(print_value("(0-2)^63"), i64::MIN.to_string());
    assert_eq!(print_value("1^99999999999"), "1");
}

#[test]
fn missing_declaration_semicolon_is_syntax_error() {
    let err = parse_failure("program int a begin a=1; end");
    assert!(matches!(err, ParseError::ExpectedListSeparator { found: Some('='), .. }));
    assert!(err.to_string().contains("';'"));
}

#[test]
fn missing_keywords_are_named() {
    let err = parse_failure("int a; begin end");
    assert!(matches!(err, ParseError::ExpectedKeyword { keyword: "program", .. }));

    let err = parse_failure("program int a; print a; end");
    assert!(matches!(err, ParseError::ExpectedKeyword { keyword: "begin", .. }));

    let err = parse_failure("program begin print 1;");
    assert!(matches!(err, ParseError::ExpectedKeyword { keyword: "end", .. }));
    assert!(err.to_string().contains("'end'"));
}

#[test]
fn declaration_errors() {
    let err = parse_failure("program int ; begin end");
    assert!(matches!(err, ParseError::ExpectedIdentifier { found: Some(';'), .. }));

    let err = parse_failure("program int a, ; begin end");
    assert!(matches!(err, ParseError::ExpectedIdentifier { .. }));

    let err = parse_failure("program int 1a; begin end");
    assert!(matches!(err, ParseError::ExpectedIdentifier { found: Some('1'), .. }));
}

#[test]
fn statement_errors() {
    // `a 1` collapses into the identifier `a1`.
    let err = parse_failure("program int a; begin a 1; end");
    assert!(matches!(err, ParseError::ExpectedEquals { .. }));

    let err = parse_failure("program int a; begin a + 1; end");
    assert!(matches!(err, ParseError::ExpectedEquals { .. }));

    let err = parse_failure("program int a; begin a = 1 end");
    assert!(matches!(err, ParseError::ExpectedSemicolon { after: "assignment", .. }));

    let err = parse_failure("program begin print 1 end");
    assert!(matches!(err, ParseError::ExpectedSemicolon { after: "print statement", .. }));

    let err = parse_failure("program begin 5 = 1; end");
    assert!(matches!(err, ParseError::ExpectedIdentifier { found: Some('5'), .. }));
}

#[test]
fn factor_errors() {
    let err = parse_failure("program begin print (1 + 2; end");
    assert!(matches!(err, ParseError::ExpectedClosingParen { .. }));

    let err = parse_failure("program begin print 0 - -1; end");
    assert!(matches!(err, ParseError::UnexpectedCharacter { found: Some('-'), .. }));

    let err = parse_failure("program begin print 1 +");
    assert!(matches!(err, ParseError::UnexpectedCharacter { found: None, .. }));

    let err = parse_failure("program begin print 99999999999999999999; end");
    assert!(matches!(err, ParseError::LiteralTooLarge { .. }));
}

#[test]
fn syntax_error_prevents_all_output() {
    let (result, out) = run_with("program begin print 1; print 2 end", OverflowPolicy::Wrap);
    assert!(matches!(result, Err(Error::Parse(_))));
    assert!(out.is_empty());
}

#[test]
fn errors_report_source_line() {
    let err = parse_failure("program\nint a;\nbegin\na = 1;\na = 2\nend");
    assert_eq!(err.line(), 6);
    assert!(err.to_string().starts_with("Error on line 6:"));

    let (err, _) = runtime_failure("program\nbegin\n\nprint zz;\nend", OverflowPolicy::Wrap);
    assert_eq!(err.line(), 4);
}

#[test]
fn tree_shape_reflects_grouping() {
    use minilang::ast::Statement;

    let program = parse("program int a; begin a = 1 - 2 - 3 ^ 4 ^ 5 * (6 + 7); end")
                      .expect("valid program");
    let Statement::Assign { value, .. } = &program.statements[0] else {
        panic!("expected an assignment");
    };
    assert_eq!(value.to_string(), "((1 - 2) - ((3 ^ (4 ^ 5)) * (6 + 7)))");
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let depth = 100_000;
    let src = format!("program int a; begin a = {}1{}; print a; end",
                      "(".repeat(depth),
                      ")".repeat(depth));
    let err = parse_failure(&src);
    assert_eq!(err,
               ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                            line:  1, });
    assert!(err.to_string().contains("nested too deeply"));

    let (result, out) = run_with(&src, OverflowPolicy::Wrap);
    assert!(matches!(result, Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
    assert!(out.is_empty());
}

#[test]
fn long_operator_chains_are_bounded() {
    let powers = format!("program begin print 1{}; end", "^1".repeat(100_000));
    assert!(matches!(parse_failure(&powers), ParseError::NestingTooDeep { .. }));

    let sums = format!("program begin print 1{}; end", "+1".repeat(100_000));
    assert!(matches!(parse_failure(&sums), ParseError::NestingTooDeep { .. }));
}

#[test]
fn nesting_within_the_limit_runs() {
    let depth = MAX_NESTING_DEPTH - 1;
    let grouped = format!("{}7{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(print_value(&grouped), "7");

    let sum = format!("0{}", "+1".repeat(MAX_NESTING_DEPTH));
    assert_eq!(print_value(&sum), MAX_NESTING_DEPTH.to_string());
}

#[test]
fn every_character_reaches_the_parser() {
    let (chars, _) = strip_whitespace("a\u{0}\u{a0}\u{1F600}\u{7f} b").expect("any text lexes");
    let text: String = chars.iter().map(|c| c.ch).collect();
    assert_eq!(text, "a\u{0}\u{a0}\u{1F600}\u{7f}b");

    let err = parse_failure("program begin print \u{a0}1; end");
    assert!(matches!(err, ParseError::UnexpectedCharacter { found: Some('\u{a0}'), .. }));
}
