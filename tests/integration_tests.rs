//! Integration tests for the whole front end.
//!
//! These tests run source text through tokenization and parsing and check
//! the shape of the resulting tree.

use frontend::{
    ast::{
        ast::Expr,
        expressions::{BinaryOp, ElseBranch, UnaryOp},
        statements::{Decl, LoopMode, Step},
    },
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::{parser::parse, stream::TokenStream},
    Position,
};

#[test]
fn test_parse_program() {
    let source = "
        // running total
        var limit = 10;

        fn sum(n, step) {
            var total = 0;
            var i = 0;
            while (i < n) {
                total = total + i * step;
                i = i + 1;
            }
            total
        }

        fn sign(x) {
            if (x < 0) { -1 } else if (x == 0) { 0 } else { 1 }
        }

        fn run() {
            var first = sum(limit, 2)[0];
            do {
                first = first - 1;
            } while (first > 0 && !done(first));
        }
    ";

    let tokens = tokenize(source).unwrap();
    let unit = parse(&tokens).unwrap();

    let names: Vec<&str> = unit.iter().map(|decl| decl.name()).collect();
    assert_eq!(names, ["limit", "sum", "sign", "run"]);
    assert_eq!(unit.position, Position::new(3, 9));

    let Decl::Function(sum) = &unit.declarations[1] else {
        panic!("expected `sum` to be a function");
    };
    assert_eq!(sum.parameters, vec!["n", "step"]);
    assert_eq!(sum.body.steps.len(), 4);
    assert_eq!(
        sum.body.steps[2].to_string(),
        "(while (< i n) {(= total (+ total (* i step))) (= i (+ i 1))})"
    );
    assert_eq!(sum.body.trailing().map(|expr| expr.to_string()), Some("total".to_string()));

    let Decl::Function(sign) = &unit.declarations[2] else {
        panic!("expected `sign` to be a function");
    };
    let Some(Expr::If(if_expr)) = sign.body.trailing() else {
        panic!("expected `sign` to end in an if expression");
    };
    assert!(matches!(if_expr.else_branch, Some(ElseBranch::If(_))));

    let Decl::Function(run) = &unit.declarations[3] else {
        panic!("expected `run` to be a function");
    };
    assert_eq!(
        run.body.steps[0].to_string(),
        "(var first (index (call sum limit 2) 0))"
    );
    let Step::Loop(do_while) = &run.body.steps[1] else {
        panic!("expected a do-while loop");
    };
    assert_eq!(do_while.mode, LoopMode::DoWhile);
    assert_eq!(do_while.condition.to_string(), "(&& (> first 0) (! (call done first)))");
}

#[test]
fn test_add_function_declaration() {
    let tokens = tokenize("fn add(a, b) { var x = a + b; }").unwrap();
    let unit = parse(&tokens).unwrap();

    assert_eq!(unit.to_string(), "(fn add (a b) {(var x (+ a b))})");
}

#[test]
fn test_unary_operand_structure() {
    let tokens = tokenize("var y = -a * b;").unwrap();
    let unit = parse(&tokens).unwrap();

    let Decl::Variable(variable) = &unit.declarations[0] else {
        panic!("expected a variable");
    };
    let Some(Expr::Binary(product)) = &variable.initializer else {
        panic!("expected a product");
    };
    assert_eq!(product.operator, BinaryOp::Mul);
    let Expr::Unary(negation) = product.left.as_ref() else {
        panic!("expected a negated left operand");
    };
    assert_eq!(negation.operator, UnaryOp::Minus);
}

#[test]
fn test_error_reports_first_divergence() {
    let source = "fn ok() { }\nfn broken(a b) { }\nfn (";
    let tokens = tokenize(source).unwrap();
    let error = parse(&tokens).unwrap_err();

    assert_eq!(error.get_token_kind(), Some(TokenKind::Identifier));
    assert_eq!(*error.get_position(), Position::new(2, 13));
    assert_eq!(error.to_string(), "expected `)`, found identifier `b` at 2:13");
}

#[test]
fn test_stream_over_lexed_tokens() {
    let tokens = tokenize("var x;").unwrap();
    let mut stream = TokenStream::new(&tokens);

    assert_eq!(stream.lookahead(3).kind, TokenKind::EOF);
    assert_eq!(stream.lookahead(3).position, Position::new(1, 7));
    assert_eq!(stream.lookahead(10).position, Position::null());

    stream.advance_with(TokenKind::Var).unwrap();
    assert!(stream.advance_with(TokenKind::Semicolon).is_err());
    assert_eq!(stream.cursor(), 1);
}

#[test]
fn test_independent_parses_do_not_interfere() {
    let first = tokenize("var a = 1 + 2;").unwrap();
    let second = tokenize("var b = (1 + 2) * 3;").unwrap();

    let handles: Vec<_> = [first, second]
        .into_iter()
        .map(|tokens| std::thread::spawn(move || parse(&tokens).map(|unit| unit.to_string())))
        .collect();

    let results: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();

    assert_eq!(results, ["(var a (+ 1 2))", "(var b (* (+ 1 2) 3))"]);
}
