//! Tokenizers for qualified names and argument lists
//!
//! Both tokenizers are total over their input domain: any string, including
//! the empty string and strings without separators, tokenizes without error,
//! and concatenating the produced tokens reconstructs the input exactly.

use crate::fragment::{Fragment, FragmentKind};

/// Characters that end a token inside qualified names and argument lists.
pub const NAME_SEPARATORS: [char; 4] = ['.', '<', '>', ','];

/// Parameter-passing modifier keywords recognized in argument lists.
/// A word token is a modifier only on an exact whole-token match.
pub const ARGUMENT_MODIFIERS: [&str; 4] = ["ref", "out", "in", "params"];

/// A token produced by [`split_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameToken<'a> {
    pub text: &'a str,
    pub is_separator: bool,
}

/// A token produced by [`split_arguments`]. Modifier tokens are never
/// separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgToken<'a> {
    pub text: &'a str,
    pub is_separator: bool,
    pub is_modifier: bool,
}

fn is_separator_char(c: char) -> bool {
    NAME_SEPARATORS.contains(&c)
}

/// Split a dotted/generic qualified name into word and separator tokens.
///
/// Each separator character becomes its own single-character token; each
/// maximal run of non-separator characters becomes one word token. An input
/// without separators yields the whole input as a single token.
pub fn split_name(input: &str) -> Vec<NameToken<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (idx, c) in input.char_indices() {
        if is_separator_char(c) {
            if start < idx {
                tokens.push(NameToken {
                    text: &input[start..idx],
                    is_separator: false,
                });
            }
            let end = idx + c.len_utf8();
            tokens.push(NameToken {
                text: &input[idx..end],
                is_separator: true,
            });
            start = end;
        }
    }
    if start < input.len() {
        tokens.push(NameToken {
            text: &input[start..],
            is_separator: false,
        });
    }
    tokens
}

/// Split a raw argument list (parentheses already stripped) into word,
/// modifier and separator tokens.
pub fn split_arguments(input: &str) -> Vec<ArgToken<'_>> {
    split_name(input)
        .into_iter()
        .map(|t| ArgToken {
            text: t.text,
            is_separator: t.is_separator,
            is_modifier: !t.is_separator && ARGUMENT_MODIFIERS.contains(&t.text),
        })
        .collect()
}

/// Tokenize a qualified name into fragments: word tokens take the
/// caller-supplied kind, separator characters become
/// [`FragmentKind::Separator`].
pub fn name_fragments(input: &str, kind: FragmentKind) -> Vec<Fragment> {
    split_name(input)
        .into_iter()
        .map(|t| {
            let k = if t.is_separator {
                FragmentKind::Separator
            } else {
                kind
            };
            Fragment::new(k, t.text)
        })
        .collect()
}

/// Tokenize a raw argument list into [`FragmentKind::Argument`],
/// [`FragmentKind::ArgumentModifier`] and [`FragmentKind::Separator`]
/// fragments.
pub fn argument_fragments(input: &str) -> Vec<Fragment> {
    split_arguments(input)
        .into_iter()
        .map(|t| {
            let k = if t.is_separator {
                FragmentKind::Separator
            } else if t.is_modifier {
                FragmentKind::ArgumentModifier
            } else {
                FragmentKind::Argument
            };
            Fragment::new(k, t.text)
        })
        .collect()
}
