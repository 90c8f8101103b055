use ember_ast::{ArithmeticOperator, Expr, IntegerExpr, Name, NumericExpr, Stmt, VariableStmt};
use ember_lexer::scan;
use ember_tokens::TokenKind;
use test_log::test;

#[test]
fn variable_from_scanned_tokens() {
    let tokens = scan("var total = count * 3;").expect("could not scan");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Var,
            TokenKind::Name,
            TokenKind::Equal,
            TokenKind::Name,
            TokenKind::Times,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Eof
        ]
    );

    let name = Name::from_token(&tokens[1]).expect("expected a name");
    let left = Name::from_token(&tokens[3]).expect("expected a name");
    let operator = ArithmeticOperator::try_from(tokens[4].kind()).expect("expected an operator");
    let right = IntegerExpr::from_token(&tokens[5]).expect("expected an integer");

    let stmt = Stmt::from(VariableStmt::new(
        name,
        NumericExpr::new(operator, left, right),
    ));
    let Stmt::Variable(variable) = &stmt else {
        panic!("expected a variable statement, got {stmt:?}")
    };
    assert_eq!(variable.name, Name::new("total"));
    assert_eq!(variable.initializer.to_string(), "(count * 3)");
    assert!(matches!(variable.initializer, Expr::Numeric(_)));
}

#[test]
fn keywords_are_not_names() {
    let tokens = scan("return").expect("could not scan");
    assert_eq!(Name::from_token(&tokens[0]), None);
}
