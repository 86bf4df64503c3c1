//! Minimal s-expression reader for the board description format.

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, map},
    multi::many0,
    sequence::{delimited, preceded, terminated},
};

#[derive(Debug, Clone, PartialEq)]
pub enum SExpr {
    Atom(String),
    List(Vec<SExpr>),
}

impl SExpr {
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            SExpr::Atom(s) => Some(s),
            SExpr::List(_) => None,
        }
    }
    pub fn as_list(&self) -> Option<&[SExpr]> {
        match self {
            SExpr::Atom(_) => None,
            SExpr::List(items) => Some(items),
        }
    }
}

fn quoted_atom(input: &str) -> IResult<&str, SExpr> {
    map(
        delimited(char('"'), take_while(|c| c != '"'), char('"')),
        |s: &str| SExpr::Atom(s.to_string()),
    )
    .parse(input)
}

fn bare_atom(input: &str) -> IResult<&str, SExpr> {
    map(
        take_while1(|c: char| !c.is_whitespace() && c != '(' && c != ')' && c != '"'),
        |s: &str| SExpr::Atom(s.to_string()),
    )
    .parse(input)
}

fn list(input: &str) -> IResult<&str, SExpr> {
    map(
        delimited(char('('), many0(expr), preceded(multispace0, char(')'))),
        SExpr::List,
    )
    .parse(input)
}

fn expr(input: &str) -> IResult<&str, SExpr> {
    preceded(multispace0, alt((list, quoted_atom, bare_atom))).parse(input)
}

/// Parse one complete s-expression covering the whole input.
pub fn parse_s_expr(input: &str) -> Result<SExpr, String> {
    all_consuming(terminated(expr, multispace0))
        .parse(input)
        .map(|(_, parsed)| parsed)
        .map_err(|e| e.to_string())
}
