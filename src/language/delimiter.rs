use std::borrow::Cow;

/// Longest free-form label accepted in a fenced delimiter (C++ allows 16).
const MAX_LABEL_LEN: usize = 16;

/// The variable part of a fenced delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Zero or more repetitions of one character: `#` in `r##"…"##`, `=` in `[==[…]==]`.
    Repeat(char),
    /// A short label of any characters except parentheses, backslash, quotes and
    /// whitespace: `x` in C++ `R"x(…)x"`.
    Label,
}

/// A delimiter whose close marker repeats the tag found in its open marker.
///
/// The open marker is `open_prefix` + tag + `open_suffix`; the close marker is
/// `close_prefix` + the same tag + `close_suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence {
    pub open_prefix: String,
    pub open_suffix: String,
    pub close_prefix: String,
    pub close_suffix: String,
    pub tag: Tag,
}

impl Fence {
    #[must_use]
    pub fn new(open: (&str, &str), close: (&str, &str), tag: Tag) -> Self {
        Self {
            open_prefix: open.0.to_string(),
            open_suffix: open.1.to_string(),
            close_prefix: close.0.to_string(),
            close_suffix: close.1.to_string(),
            tag,
        }
    }
}

/// How a quote or block comment is opened and closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delimiter {
    Fixed { open: String, close: String },
    Fenced(Fence),
}

/// A delimiter opening found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenMatch<'a> {
    /// Byte length of the opening marker.
    pub len: usize,
    /// The close marker this opening is waiting for.
    pub close: Cow<'a, str>,
}

impl Delimiter {
    #[must_use]
    pub fn fixed(open: &str, close: &str) -> Self {
        Self::Fixed {
            open: open.to_string(),
            close: close.to_string(),
        }
    }

    /// First byte of every possible opening, used to skip positions quickly.
    #[must_use]
    pub fn first_byte(&self) -> Option<u8> {
        match self {
            Self::Fixed { open, .. } => open.as_bytes().first().copied(),
            Self::Fenced(fence) => fence.open_prefix.as_bytes().first().copied(),
        }
    }

    /// The literal open marker, if it does not vary between occurrences.
    #[must_use]
    pub fn fixed_open(&self) -> Option<&str> {
        match self {
            Self::Fixed { open, .. } => Some(open),
            Self::Fenced(_) => None,
        }
    }

    /// A fenced opening whose prefix is nothing but its own ASCII pad character
    /// (Swift `#"`). Such an opening fails at every position of a pad run if it
    /// fails at the first.
    #[must_use]
    pub fn pad_prefixed(&self) -> bool {
        match self {
            Self::Fenced(Fence {
                open_prefix,
                tag: Tag::Repeat(pad),
                ..
            }) => pad.is_ascii() && !open_prefix.is_empty() && open_prefix.chars().all(|c| c == *pad),
            _ => false,
        }
    }

    /// Try to match an opening at byte offset `at` of `text`.
    #[must_use]
    pub fn match_open(&self, text: &str, at: usize) -> Option<OpenMatch<'_>> {
        let rest = text.get(at..)?;
        match self {
            Self::Fixed { open, close } => {
                (!open.is_empty() && rest.starts_with(open.as_str())).then(|| OpenMatch {
                    len: open.len(),
                    close: Cow::Borrowed(close.as_str()),
                })
            }
            Self::Fenced(fence) => match_fence(fence, rest),
        }
    }
}

fn match_fence<'r>(fence: &'r Fence, rest: &str) -> Option<OpenMatch<'r>> {
    if fence.open_prefix.is_empty() {
        return None;
    }
    let after_prefix = rest.strip_prefix(fence.open_prefix.as_str())?;
    let tag_len = match fence.tag {
        Tag::Repeat(pad) => after_prefix
            .chars()
            .take_while(|&c| c == pad)
            .map(char::len_utf8)
            .sum(),
        Tag::Label => label_len(after_prefix)?,
    };
    let tag = &after_prefix[..tag_len];
    if !after_prefix[tag_len..].starts_with(fence.open_suffix.as_str()) {
        return None;
    }

    let close = if tag.is_empty() && fence.close_suffix.is_empty() {
        Cow::Borrowed(fence.close_prefix.as_str())
    } else {
        Cow::Owned(format!("{}{tag}{}", fence.close_prefix, fence.close_suffix))
    };

    Some(OpenMatch {
        len: fence.open_prefix.len() + tag_len + fence.open_suffix.len(),
        close,
    })
}

/// Byte length of a C++-style raw string label, or `None` if the label is too long.
fn label_len(s: &str) -> Option<usize> {
    let mut len = 0;
    for (count, c) in s.chars().enumerate() {
        if matches!(c, '(' | ')' | '\\' | '"') || c.is_whitespace() {
            return Some(len);
        }
        if count == MAX_LABEL_LEN {
            return None;
        }
        len += c.len_utf8();
    }
    Some(len)
}

#[cfg(test)]
#[path = "delimiter_tests.rs"]
mod tests;
