//! Parser for the `arg(x).` / `att(x,y).` input file format.
//!
//! Out of scope for the reasoning engine proper (spec.md, Purpose & Scope),
//! but every front-end needs to build a graph store from somewhere, so this
//! module is a thin, single-pass lexer-driven builder: tokens are recognized
//! with `logos` and fed straight into [`crate::ArgumentationFramework`] as
//! they're found, exactly as the reference implementation's parser builds its
//! graph inline rather than through an intermediate AST.
use crate::ArgumentationFramework;

mod apx;

pub use apx::ParseError;

type ParseResult<T> = Result<T, ParseError>;

/// Parse a complete input file and build the argumentation framework it
/// describes.
///
/// Arguments and attacks may appear in any order in the file; an attack
/// referencing an argument not yet declared is rejected the moment it is
/// encountered (see [`crate::ArgumentationFramework::add_attack`]).
pub fn parse(input: &str) -> crate::Result<ArgumentationFramework> {
    let mut af = ArgumentationFramework::new();
    for decl in apx::parse_declarations(input)? {
        match decl {
            Decl::Arg(name) => af.add_argument(&name)?,
            Decl::Att(from, to) => af.add_attack(&from, &to)?,
        }
    }
    Ok(af)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Decl {
    Arg(String),
    Att(String, String),
}

fn expect<'src>(
    lex: &mut logos::Lexer<'src, apx::Token>,
    expected: apx::Token,
    expected_label: &'static str,
) -> ParseResult<apx::Token> {
    match lex.next() {
        Some(next) if next == expected => Ok(next),
        Some(next) => Err(ParseError::UnexpectedToken {
            found: format!("{next:?}"),
            expected: vec![expected_label],
            position: lex.span(),
            text: lex.slice().to_owned(),
        }),
        None => Err(ParseError::UnexpectedEndOfInput {
            expected: vec![expected_label],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_a_graph_from_interleaved_declarations() {
        let af = parse("arg(a). arg(b). att(a,b). arg(c). att(b,c).").expect("valid input");
        assert_eq!(af.len(), 3);
        assert!(af.edge_by_name("a", "b").unwrap());
        assert!(af.edge_by_name("b", "c").unwrap());
        assert!(!af.edge_by_name("a", "c").unwrap());
    }

    #[test]
    fn rejects_attack_on_unknown_argument() {
        let err = parse("arg(a). att(a,b).").unwrap_err();
        assert!(matches!(err, crate::Error::UnknownArgument(_)));
    }

    #[test]
    fn rejects_reserved_word_as_name() {
        let err = parse("arg(arg).").unwrap_err();
        assert!(matches!(err, crate::Error::Parse(_)));
    }

    #[test]
    fn whitespace_within_a_line_is_ignored() {
        let af = parse("arg( a ) . att ( a , a ) .").expect("valid input");
        assert_eq!(af.len(), 1);
        assert!(af.edge_by_name("a", "a").unwrap());
    }
}
