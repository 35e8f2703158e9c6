use logos::Logos;
use thiserror::Error;

use super::{expect, Decl, ParseResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Logos)]
pub(super) enum Token {
    #[token("arg")]
    Arg,
    #[token("att")]
    Att,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token(".")]
    Period,
    #[token(",")]
    Comma,
    #[regex(r"[A-Za-z0-9_]+")]
    Text,
    #[error]
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Error,
}

/// Errors raised while lexing/parsing an `arg(x).`/`att(x,y).` input file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected token {found}, expected one of {expected:?} at {position:?} ({text:?})")]
    UnexpectedToken {
        found: String,
        expected: Vec<&'static str>,
        position: std::ops::Range<usize>,
        text: String,
    },
    #[error("unexpected end of input, expected one of {expected:?}")]
    UnexpectedEndOfInput { expected: Vec<&'static str> },
}

pub(super) fn parse_declarations(input: &str) -> ParseResult<Vec<Decl>> {
    let mut lex = Token::lexer(input);
    let mut decls = Vec::new();
    loop {
        match lex.next() {
            Some(Token::Arg) => decls.push(Decl::Arg(parse_argument(&mut lex)?)),
            Some(Token::Att) => decls.push(Decl::Att(
                parse_attack_lhs(&mut lex)?,
                parse_attack_rhs(&mut lex)?,
            )),
            Some(other) => {
                return Err(ParseError::UnexpectedToken {
                    found: format!("{other:?}"),
                    expected: vec!["arg", "att"],
                    position: lex.span(),
                    text: lex.slice().to_owned(),
                })
            }
            None => break,
        }
    }
    Ok(decls)
}

fn parse_argument(lex: &mut logos::Lexer<Token>) -> ParseResult<String> {
    expect(lex, Token::LeftParen, "(")?;
    expect(lex, Token::Text, "identifier")?;
    let name = lex.slice().to_owned();
    expect(lex, Token::RightParen, ")")?;
    accept_optional_period(lex);
    Ok(name)
}

fn parse_attack_lhs(lex: &mut logos::Lexer<Token>) -> ParseResult<String> {
    expect(lex, Token::LeftParen, "(")?;
    expect(lex, Token::Text, "identifier")?;
    let from = lex.slice().to_owned();
    expect(lex, Token::Comma, ",")?;
    Ok(from)
}

fn parse_attack_rhs(lex: &mut logos::Lexer<Token>) -> ParseResult<String> {
    expect(lex, Token::Text, "identifier")?;
    let to = lex.slice().to_owned();
    expect(lex, Token::RightParen, ")")?;
    accept_optional_period(lex);
    Ok(to)
}

/// A trailing `.` is standard but, per spec.md §6, optional: a clause may
/// also be terminated by `)` alone when it is the last thing in the file.
fn accept_optional_period(lex: &mut logos::Lexer<Token>) {
    let mut clone = lex.clone();
    if let Some(Token::Period) = clone.next() {
        *lex = clone;
    }
}
