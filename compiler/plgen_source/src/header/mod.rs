//! `def` and `class` header parsing.
//!
//! Only the pieces code generation needs are recovered: the intrinsic name,
//! the parameter list with annotation text, the return annotation, and where
//! the header's colon ends so an inline body can be found.

use plgen_lexer_core::{RawTag, Token};

use crate::lines::{find_top_level, matching_close, split_top_level, tokens_text, LogicalLine};
use crate::ObjectKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Header {
    pub kind: ObjectKind,
    pub name: String,
    pub params: Vec<Param>,
    /// Text of the `->` annotation, if any.
    pub returns: Option<String>,
    /// Index into the line's tokens just past the header colon.
    pub body_start: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Param {
    pub name: String,
    pub kind: ParamKind,
    pub annotation: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ParamKind {
    /// Positional-only or positional-or-keyword.
    Positional,
    /// `*args`
    VarPositional,
    /// Anything after `*` or `*args`.
    KeywordOnly,
    /// `**kwargs`
    VarKeyword,
}

/// Parse `line` as a `def`, `async def` or `class` header.
///
/// Returns `None` when the line is something else.
pub(crate) fn parse_header(line: &LogicalLine, source: &str) -> Option<Header> {
    let tokens = &line.tokens;
    let mut i = usize::from(word_at(tokens, source, 0) == Some("async"));
    let kind = match word_at(tokens, source, i)? {
        "def" => ObjectKind::Function,
        "class" if i == 0 => ObjectKind::Class,
        _ => return None,
    };
    let name = word_at(tokens, source, i + 1)?.to_string();
    i += 2;

    // PEP 695 type parameters: `def f[T](x: T)`.
    if tokens.get(i).is_some_and(|t| t.tag == RawTag::LeftBracket) {
        i = matching_close(tokens, i)? + 1;
    }

    let mut params = Vec::new();
    if tokens.get(i).is_some_and(|t| t.tag == RawTag::LeftParen) {
        let close = matching_close(tokens, i)?;
        if kind == ObjectKind::Function {
            params = parse_params(&tokens[i + 1..close], source);
        }
        i = close + 1;
    } else if kind == ObjectKind::Function {
        return None;
    }

    let colon = i + find_top_level(&tokens[i..], RawTag::Colon)?;
    let returns = match tokens.get(i) {
        Some(t) if t.tag == RawTag::Arrow => tokens_text(&tokens[i + 1..colon], source),
        _ => None,
    };

    Some(Header {
        kind,
        name,
        params,
        returns,
        body_start: colon + 1,
    })
}

fn word_at<'s>(tokens: &[Token], source: &'s str, i: usize) -> Option<&'s str> {
    tokens
        .get(i)
        .filter(|t| t.tag == RawTag::Ident)
        .map(|t| t.text(source))
}

/// Parse the tokens between a `def`'s parentheses.
fn parse_params(tokens: &[Token], source: &str) -> Vec<Param> {
    let mut params = Vec::new();
    let mut keyword_only = false;

    for part in split_top_level(tokens, RawTag::Comma) {
        let (kind, rest) = match part[0].tag {
            RawTag::Slash => continue,
            RawTag::Star => {
                keyword_only = true;
                if part.len() == 1 {
                    continue;
                }
                (ParamKind::VarPositional, &part[1..])
            }
            RawTag::DoubleStar => (ParamKind::VarKeyword, &part[1..]),
            _ if keyword_only => (ParamKind::KeywordOnly, part),
            _ => (ParamKind::Positional, part),
        };
        let Some(name_token) = rest.first().filter(|t| t.tag == RawTag::Ident) else {
            continue;
        };

        // Defaults may hold lambdas with their own colon, so cut them first.
        let declared = match find_top_level(rest, RawTag::Equal) {
            Some(eq) => &rest[..eq],
            None => rest,
        };
        let annotation = find_top_level(declared, RawTag::Colon)
            .and_then(|colon| tokens_text(&declared[colon + 1..], source));

        params.push(Param {
            name: name_token.text(source).to_string(),
            kind,
            annotation,
        });
    }
    params
}
