//! Word tokenizer implementation.
//!
//! The tokenizer extracts normalized alphabetic words from a text buffer,
//! consuming the buffer as it goes. Single quotes are specially handled to
//! capture contractions such as "don't" and "wouldn't", while a trailing
//! apostrophe (as in "parents'") is not considered part of the word.
//!
//! # Examples
//!
//! ```
//! use lexstat::analysis::tokenizer;
//!
//! let words: Vec<String> = tokenizer::words("The parents' cat doesn't bite.").collect();
//! assert_eq!(words, ["the", "parents", "cat", "doesn't", "bite"]);
//! ```

/// Lowercase every character of the input.
///
/// This is simple per-character case folding with no locale handling; it is
/// applied once to the whole input before tokenization.
pub fn normalize(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Extract the first occurring word from the buffer.
///
/// The extracted word always starts and ends with an alphabetic character,
/// except that at most one embedded apostrophe is kept to capture
/// contractions. A trailing apostrophe immediately followed by a
/// non-alphabetic character or the end of input is excluded, so
/// `"parents'"` yields `"parents"`. A second apostrophe always terminates
/// the word.
///
/// The word, everything before it, and the delimiter character after it (if
/// any) are removed from the buffer, allowing the caller to iterate until
/// the buffer is empty.
///
/// Returns `None` when no alphabetic character remains; the buffer is
/// cleared in that case.
pub fn extract_word(buffer: &mut String) -> Option<String> {
    let start = buffer
        .char_indices()
        .find(|(_, c)| c.is_alphabetic())
        .map(|(i, _)| i);
    let Some(start) = start else {
        buffer.clear();
        return None;
    };

    // Byte index of the first apostrophe seen inside the word, if any.
    let mut quote_at: Option<usize> = None;
    let mut end = buffer.len();
    for (offset, c) in buffer[start..].char_indices() {
        let i = start + offset;
        if c == '\'' && quote_at.is_none() {
            quote_at = Some(i);
            continue;
        }
        if !c.is_alphabetic() {
            end = match quote_at {
                // The apostrophe trails the word, as in "parents' house".
                Some(q) if i == q + 1 => q,
                _ => i,
            };
            break;
        }
    }
    if let Some(q) = quote_at {
        // The apostrophe trails the word at end of input: "the parents'".
        if end == buffer.len() && q + 1 == end {
            end = q;
        }
    }

    let word = buffer[start..end].to_string();
    let rest = match buffer[end..].chars().next() {
        Some(delim) => end + delim.len_utf8(),
        None => end,
    };
    buffer.drain(..rest);
    Some(word)
}

/// Create an iterator over the normalized words of a text.
///
/// Equivalent to calling [`normalize`] once and then [`extract_word`] until
/// the buffer is exhausted.
pub fn words(text: &str) -> Words {
    Words {
        buffer: normalize(text),
    }
}

/// Iterator over the words of a normalized text buffer.
#[derive(Clone, Debug)]
pub struct Words {
    buffer: String,
}

impl Iterator for Words {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        extract_word(&mut self.buffer)
    }
}
