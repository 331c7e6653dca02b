use crate::error::Expected;
use crate::parser::Parser;
use crate::stream::{TokenStream, VecStream};
use crate::test_utils::lex;
use crate::token::TokenType;
use crate::tree::{Node, Rule};
use rstest::rstest;

fn child_node(node: &Node, i: usize) -> &Node {
    node.children()[i].as_node().unwrap()
}

#[test]
fn bracketed_factor() {
    let mut stream = VecStream::new(lex("( y + 2 )"));
    let mut p = Parser::new(&mut stream);
    let factor = p.factor().unwrap();

    insta::assert_snapshot!(factor.to_string(), @r#"
    factor
      LBracket "("
      arithmExpression
        term
          factor
            Ident "y"
        addOp
          Plus "+"
        arithmExpression
          term
            factor
              constant
                IntNum "2"
      RBracket ")"
    "#);
    assert!(p.stream().look_ahead().unwrap().is_eof());
}

#[test]
fn single_operand_term_consumes_one_token() {
    let mut stream = VecStream::new(lex("z ;"));
    let mut p = Parser::new(&mut stream);
    let term = p.term().unwrap();

    assert_eq!(term.children().len(), 1);
    assert_eq!(child_node(&term, 0).rule(), Rule::Factor);
    assert_eq!(p.stream().remember().offset(), 0);
    assert_eq!(p.stream().look_ahead().unwrap().ty, TokenType::Semi);
}

#[test]
fn term_chain_nests_to_the_right() {
    let mut stream = VecStream::new(lex("a * b / c"));
    let mut p = Parser::new(&mut stream);
    let term = p.term().unwrap();

    assert_eq!(term.children().len(), 3);
    assert_eq!(child_node(&term, 1).rule(), Rule::MultOp);

    let rest = child_node(&term, 2);
    assert_eq!(rest.rule(), Rule::Term);
    assert_eq!(rest.children().len(), 3);
    assert_eq!(
        child_node(rest, 1).children()[0].as_leaf().unwrap().ty(),
        TokenType::Slash
    );

    let last = child_node(rest, 2);
    assert_eq!(last.children().len(), 1);
    assert_eq!(last.leaves()[0].string, "c");
}

#[test]
fn arithm_expression_mixes_terms_and_add_ops() {
    let mut stream = VecStream::new(lex("1 - x * 2 + 3.5"));
    let mut p = Parser::new(&mut stream);
    let expr = p.arithm_expression().unwrap();

    assert_eq!(expr.children().len(), 3);
    assert_eq!(child_node(&expr, 0).children().len(), 1);

    let rest = child_node(&expr, 2);
    assert_eq!(rest.rule(), Rule::ArithmExpression);
    assert_eq!(child_node(rest, 0).children().len(), 3);
    assert_eq!(child_node(rest, 2).children().len(), 1);
    assert_eq!(expr.leaves().len(), 7);
}

#[test]
fn dangling_operator_falls_back_to_operand() {
    let mut stream = VecStream::new(lex("a + ;"));
    let mut p = Parser::new(&mut stream);
    let expr = p.arithm_expression().unwrap();

    assert_eq!(expr.children().len(), 1);
    assert_eq!(p.stream().look_ahead().unwrap().ty, TokenType::Plus);
}

#[test]
fn broken_bracket_is_reported_as_factor() {
    let mut stream = VecStream::new(lex("( y + )"));
    let mut p = Parser::new(&mut stream);
    let err = p.factor().unwrap_err();

    assert_eq!(err.as_syntax().unwrap().expected, Expected::Factor);
    assert_eq!(
        err.to_string(),
        "Expected Ident, constant or (arithmExpression)"
    );
    // The bracket alternative is not rewound; the error points past `y`.
    assert_eq!(err.token().unwrap().ty, TokenType::Plus);
    assert_eq!(p.stream().remember().offset(), 1);
}

#[test]
fn factor_without_any_alternative() {
    let mut stream = VecStream::new(lex(":="));
    let mut p = Parser::new(&mut stream);
    let err = p.factor().unwrap_err();

    assert_eq!(err.as_syntax().unwrap().expected, Expected::Factor);
    assert_eq!(err.token().unwrap().ty, TokenType::AssignOp);
    assert_eq!(p.stream().remember().offset(), -1);
}

#[rstest]
#[case("42", TokenType::IntNum)]
#[case("4.2", TokenType::RealNum)]
#[case("true", TokenType::BoolConst)]
#[case("false", TokenType::BoolConst)]
fn constants(#[case] src: &str, #[case] ty: TokenType) {
    let mut stream = VecStream::new(lex(src));
    let mut p = Parser::new(&mut stream);
    let factor = p.factor().unwrap();

    let constant = child_node(&factor, 0);
    assert_eq!(constant.rule(), Rule::Constant);
    assert_eq!(constant.children()[0].as_leaf().unwrap().ty(), ty);
}

#[rstest]
#[case("+", Rule::AddOp)]
#[case("-", Rule::AddOp)]
#[case("*", Rule::MultOp)]
#[case("/", Rule::MultOp)]
fn operators(#[case] src: &str, #[case] rule: Rule) {
    let mut stream = VecStream::new(lex(src));
    let mut p = Parser::new(&mut stream);
    let node = match rule {
        Rule::AddOp => p.add_op(),
        _ => p.mult_op(),
    }
    .unwrap();

    assert_eq!(node.rule(), rule);
    assert_eq!(node.children().len(), 1);
}

#[test]
fn add_op_lists_candidates() {
    let mut stream = VecStream::new(lex("*"));
    let mut p = Parser::new(&mut stream);
    let err = p.add_op().unwrap_err();
    assert_eq!(err.to_string(), "Expected one of lexemes Plus, Minus");
}

#[test]
fn bool_expr_compares_two_arithmetic_sides() {
    let mut stream = VecStream::new(lex("a + 1 <= b * 2"));
    let mut p = Parser::new(&mut stream);
    let node = p.bool_expr().unwrap();

    assert_eq!(node.children().len(), 3);
    assert_eq!(child_node(&node, 0).rule(), Rule::ArithmExpression);
    assert_eq!(node.children()[1].as_leaf().unwrap().text(), "<=");
    assert_eq!(child_node(&node, 2).rule(), Rule::ArithmExpression);
    assert!(p.stream().look_ahead().unwrap().is_eof());
}

#[test]
fn expression_takes_arithmetic_alternative_first() {
    let mut stream = VecStream::new(lex("a < b"));
    let mut p = Parser::new(&mut stream);
    let node = p.expression().unwrap();

    assert_eq!(child_node(&node, 0).rule(), Rule::ArithmExpression);
    assert_eq!(p.stream().look_ahead().unwrap().ty, TokenType::RelOp);
}

#[test]
fn expression_reaches_bool_alternative_when_arithmetic_fails() {
    let mut stream = VecStream::new(lex(";"));
    let mut p = Parser::new(&mut stream);
    let err = p.expression().unwrap_err();

    assert_eq!(
        err.as_syntax().unwrap().expected,
        Expected::OneOfRules(vec![Rule::ArithmExpression, Rule::BoolExpr])
    );
    assert_eq!(p.stream().remember().offset(), -1);
}

fn nested_brackets(depth: usize, inner: &str) -> String {
    format!("{}{inner}{}", "( ".repeat(depth), " )".repeat(depth))
}

#[test]
fn deeply_nested_brackets_parse() {
    let mut stream = VecStream::new(lex(&nested_brackets(30, "1 * 2 + 3")));
    let mut p = Parser::new(&mut stream);
    let mut factor = p.factor().unwrap();
    assert!(p.stream().look_ahead().unwrap().is_eof());
    assert_eq!(factor.leaves().len(), 65);

    let mut depth = 0;
    loop {
        // factor → ( arithmExpression ), one single-term level per bracket
        assert_eq!(factor.children().len(), 3);
        depth += 1;
        let expr = child_node(&factor, 1);
        let innermost = expr.children().len() == 3;
        let next = child_node(child_node(expr, 0), 0).clone();
        if innermost {
            break;
        }
        factor = next;
    }
    assert_eq!(depth, 30);
}

#[test]
fn operand_before_failed_operator_is_kept() {
    let mut stream = VecStream::new(lex(&(nested_brackets(3, "a") + " * ;")));
    let mut p = Parser::new(&mut stream);
    let term = p.term().unwrap();

    assert_eq!(term.children().len(), 1);
    assert_eq!(term.leaves().len(), 7);
    assert_eq!(p.stream().remember().offset(), 6);
    assert_eq!(p.stream().look_ahead().unwrap().ty, TokenType::Star);
}
