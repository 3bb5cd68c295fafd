// Integration tests for the Lox interpreter

use loxpad::console::catalog::ProgramCatalog;
use loxpad::console::output::OutputBuffer;
use loxpad::interpreter::engine::Interpreter;
use loxpad::interpreter::errors::RuntimeError;
use loxpad::parser::parse::Parser;

/// Parse and run `source` in a fresh interpreter, returning the printed chunks
fn run(source: &str) -> (Vec<String>, Result<(), RuntimeError>) {
    let mut parser = Parser::new(source).expect("Parser creation failed");
    let program = parser.parse_program().expect("Parsing failed");

    let mut interpreter = Interpreter::new();
    let mut out = OutputBuffer::new();
    let result = interpreter.interpret(&program, &mut out);
    (out.chunks().to_vec(), result)
}

fn run_ok(source: &str) -> Vec<String> {
    let (chunks, result) = run(source);
    assert!(result.is_ok(), "Execution failed: {:?}", result);
    chunks
}

fn builtin(name: &str) -> String {
    ProgramCatalog::builtin()
        .get(name)
        .expect("builtin script")
        .to_string()
}

#[test]
fn test_builtin_hello_world() {
    assert_eq!(run_ok(&builtin("Hello World")), vec!["Hello World!"]);
}

#[test]
fn test_builtin_loops() {
    let chunks = run_ok(&builtin("Loops"));
    assert_eq!(chunks.len(), 20);
    assert_eq!(chunks[0], format!("{}* ", " ".repeat(20)));
    assert_eq!(chunks[19], format!(" {}", "* ".repeat(20)));
}

#[test]
fn test_builtin_fibonacci() {
    assert_eq!(run_ok(&builtin("Fibonacci")), vec!["6765"]);
}

#[test]
fn test_builtin_factors() {
    assert_eq!(
        run_ok(&builtin("Factors")),
        vec!["2", "2", "3", "3", "5", "5", "7"]
    );
}

#[test]
fn test_builtin_closures() {
    let chunks = run_ok(&builtin("Closures"));
    let expected: Vec<String> = [
        0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181, 6765,
    ]
    .iter()
    .map(|n| n.to_string())
    .collect();
    assert_eq!(chunks, expected);
}

#[test]
fn test_arithmetic_and_precedence() {
    assert_eq!(
        run_ok("print 1 + 2 * 3; print (1 + 2) * 3; print 10 / 4; print -3 - -5;"),
        vec!["7", "9", "2.5", "2"]
    );
}

#[test]
fn test_strings_and_equality() {
    assert_eq!(
        run_ok(r#"print "a" + "b"; print "a" == "a"; print 1 == "1"; print nil == nil;"#),
        vec!["ab", "true", "false", "true"]
    );
}

#[test]
fn test_truthiness_and_logic() {
    assert_eq!(
        run_ok(r#"print !nil; print !0; print nil or "dflt"; print false and 1; print 1 and 2;"#),
        vec!["true", "false", "dflt", "false", "2"]
    );
}

#[test]
fn test_block_scoping() {
    let source = r#"
        var a = "global";
        {
            var a = "inner";
            print a;
        }
        print a;
    "#;
    assert_eq!(run_ok(source), vec!["inner", "global"]);
}

#[test]
fn test_assignment_yields_new_value() {
    assert_eq!(run_ok("var a; var b; a = b = 3; print a; print b;"), vec!["3", "3"]);
}

#[test]
fn test_counter_closure_keeps_state() {
    let source = r#"
        fun make_counter() {
            var count = 0;
            fun inc() {
                count = count + 1;
                return count;
            }
            return inc;
        }
        var c1 = make_counter();
        var c2 = make_counter();
        print c1();
        print c1();
        print c2();
    "#;
    assert_eq!(run_ok(source), vec!["1", "2", "1"]);
}

#[test]
fn test_function_values_print() {
    assert_eq!(
        run_ok("fun f() {} print f; print f();"),
        vec!["<fn f>", "nil"]
    );
}

#[test]
fn test_runtime_error_keeps_earlier_output() {
    let (chunks, result) = run("print 1;\nprint \"x\" - 1;\nprint 3;");
    assert_eq!(chunks, vec!["1"]);
    match result {
        Err(RuntimeError::TypeError { location, .. }) => assert_eq!(location.line, 2),
        other => panic!("Expected TypeError, got {:?}", other),
    }
}

#[test]
fn test_wrong_arity() {
    let (_, result) = run("fun f(a, b) { return a; } f(1);");
    assert!(matches!(
        result,
        Err(RuntimeError::ArgumentCountMismatch {
            expected: 2,
            got: 1,
            ..
        })
    ));
}

#[test]
fn test_calling_non_function() {
    let (_, result) = run(r#"var x = "str"; x();"#);
    assert!(matches!(result, Err(RuntimeError::NotCallable { .. })));
}

#[test]
fn test_unbounded_recursion_overflows() {
    let program = Parser::new("fun f(n) { print n; return f(n + 1); } f(0);")
        .unwrap()
        .parse_program()
        .unwrap();
    let mut interpreter = Interpreter::with_max_call_depth(64);
    let mut out = OutputBuffer::new();

    let result = interpreter.interpret(&program, &mut out);

    assert!(matches!(result, Err(RuntimeError::StackOverflow { limit: 64, .. })));
    assert_eq!(out.len(), 64);
    assert_eq!(out.chunks().last().map(String::as_str), Some("63"));
}

#[test]
fn test_globals_persist_across_interpret_calls() {
    let mut interpreter = Interpreter::new();
    let mut out = OutputBuffer::new();

    let first = Parser::new("var x = 41;").unwrap().parse_program().unwrap();
    interpreter.interpret(&first, &mut out).unwrap();
    let second = Parser::new("print x + 1;").unwrap().parse_program().unwrap();
    interpreter.interpret(&second, &mut out).unwrap();

    assert_eq!(out.render(), "42");
}

#[test]
fn test_parse_errors() {
    for source in ["print ;", "var 1 = 2;", "class A {}", "a.b;", "1 = 2;", "print \"open"] {
        let result = Parser::new(source).and_then(|mut parser| parser.parse_program());
        assert!(result.is_err(), "expected parse error for {:?}", source);
    }
}
