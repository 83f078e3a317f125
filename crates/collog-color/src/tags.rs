//! Inline color tag syntax
//!
//! Text may carry tags of the form `{name}` (normal color), `{+name}`
//! (bright color) and `{}` (reset). Everything outside a tag, including a
//! lone `}`, is literal text.

use tracing::debug;

use crate::error::{ColorError, ColorResult};
use crate::palette::ColorType;

/// A lexical piece of tag-annotated text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Color(ColorType),
    Reset,
}

/// Split `text` into literal runs and color tags.
///
/// Unknown color names and a `{` without a closing `}` are errors.
pub fn parse(text: &str) -> ColorResult<Vec<Token<'_>>> {
    scan(text, Err)
}

/// Split `text` like [`parse`], keeping malformed tags as literal text.
///
/// Well-formed tags around a malformed one are still recognized.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let tokens = scan(text, |err| {
        debug!(error = %err, "malformed color tag kept as text");
        Ok(())
    });
    tokens.unwrap_or_else(|_| vec![Token::Text(text)])
}

fn scan<'a, F>(text: &'a str, mut malformed: F) -> ColorResult<Vec<Token<'a>>>
where
    F: FnMut(ColorError) -> ColorResult<()>,
{
    let mut tokens = Vec::new();
    let mut rest = text;
    let mut offset = 0;

    while let Some(open) = rest.find('{') {
        if open > 0 {
            tokens.push(Token::Text(&rest[..open]));
        }
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            malformed(ColorError::UnterminatedTag(offset + open))?;
            tokens.push(Token::Text(&rest[open..]));
            return Ok(tokens);
        };

        let tag = &rest[open + 1..close];
        let next = if tag.is_empty() {
            tokens.push(Token::Reset);
            close + 1
        } else if tag.contains('{') {
            // the first brace never opened a tag; rescan from the next one
            malformed(ColorError::unknown_color(tag))?;
            tokens.push(Token::Text(&rest[open..open + 1]));
            open + 1
        } else {
            match tag.parse() {
                Ok(color) => tokens.push(Token::Color(color)),
                Err(err) => {
                    malformed(err)?;
                    tokens.push(Token::Text(&rest[open..=close]));
                }
            }
            close + 1
        };

        offset += next;
        rest = &rest[next..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }
    Ok(tokens)
}

/// Remove all tags from `text`, keeping only the literal runs
pub fn strip(text: &str) -> ColorResult<String> {
    Ok(parse(text)?
        .into_iter()
        .filter_map(|token| match token {
            Token::Text(s) => Some(s),
            _ => None,
        })
        .collect())
}
