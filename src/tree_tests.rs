use crate::test_utils::lex;
use crate::token::{Token, TokenType};
use crate::tree::{Child, Leaf, Node, Rule};

fn leaf(ty: TokenType, text: &str) -> Child {
    Leaf::new(Token::new(1, text, ty, 0)).into()
}

fn sample() -> Node {
    // factor → LBracket arithmExpression RBracket, with `y + 2` inside
    let inner = Node::new(
        Rule::ArithmExpression,
        vec![
            Node::new(
                Rule::Term,
                vec![Node::new(Rule::Factor, vec![leaf(TokenType::Ident, "y")]).into()],
            )
            .into(),
            Node::new(Rule::AddOp, vec![leaf(TokenType::Plus, "+")]).into(),
            Node::new(
                Rule::ArithmExpression,
                vec![Node::new(
                    Rule::Term,
                    vec![Node::new(
                        Rule::Factor,
                        vec![Node::new(Rule::Constant, vec![leaf(TokenType::IntNum, "2")]).into()],
                    )
                    .into()],
                )
                .into()],
            )
            .into(),
        ],
    );
    Node::new(
        Rule::Factor,
        vec![
            leaf(TokenType::LBracket, "("),
            inner.into(),
            leaf(TokenType::RBracket, ")"),
        ],
    )
}

#[test]
fn rule_names_follow_grammar_spelling() {
    assert_eq!(Rule::ArithmExpression.to_string(), "arithmExpression");
    assert_eq!(Rule::BranchStatement.as_str(), "branchStatement");
    assert_eq!(Rule::BoolExpr.as_str(), "boolExpr");
}

#[test]
fn leaves_come_out_in_source_order() {
    let texts: Vec<_> = sample().leaves().iter().map(|t| t.string.clone()).collect();
    assert_eq!(texts, ["(", "y", "+", "2", ")"]);
}

#[test]
fn find_searches_depth_first() {
    let tree = sample();
    assert_eq!(tree.find(Rule::Factor), Some(&tree));
    let constant = tree.find(Rule::Constant).unwrap();
    assert_eq!(constant.children()[0].as_leaf().unwrap().text(), "2");
    assert!(tree.find(Rule::Program).is_none());
}

#[test]
fn outline_rendering() {
    insta::assert_snapshot!(sample().to_string(), @r#"
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
}

#[test]
fn json_shape_nests_rule_and_type_keys() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["factor"][0], serde_json::json!({ "LBracket": "(" }));
    assert_eq!(
        json["factor"][1]["arithmExpression"][1],
        serde_json::json!({ "addOp": [{ "Plus": "+" }] })
    );
    assert_eq!(json["factor"].as_array().unwrap().len(), 3);
}

#[test]
fn leaf_keeps_the_whole_token() {
    let tokens = lex("a\nb");
    let leaf = Leaf::new(tokens[1].clone());
    assert_eq!(leaf.token().line, 2);
    assert_eq!(leaf.token().index, 1);
    assert_eq!(leaf.ty(), TokenType::Ident);
}

#[test]
fn statement_json_maps_to_its_alternative() {
    let assign = Node::new(
        Rule::Assign,
        vec![
            leaf(TokenType::Ident, "x"),
            leaf(TokenType::AssignOp, ":="),
            Node::new(Rule::Expression, vec![]).into(),
        ],
    );
    let statement = Node::new(Rule::Statement, vec![assign.into()]);

    let json = serde_json::to_value(&statement).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "statement": {
                "assign": [{ "Ident": "x" }, { "AssignOp": ":=" }, { "expression": [] }]
            }
        })
    );
}
