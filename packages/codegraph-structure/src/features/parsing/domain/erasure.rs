//! Textual type erasure
//!
//! Reduces a type as written in source to the simple string used in
//! signatures and variable snapshots. No name resolution happens here.
//!
//! - type arguments are dropped: `Map<String, List<Integer>>` -> `Map`
//! - type annotations are dropped: `@NonNull String` -> `String`
//! - whitespace is dropped: `int [] []` -> `int[][]`
//! - varargs become arrays: `String...` -> `String[]`

/// Erase a textual type
pub fn erase_type(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '<' => {
                i = skip_balanced(&chars, i, '<', '>');
            }
            '@' => {
                i = skip_annotation(&chars, i);
            }
            '.' if chars[i..].starts_with(&['.', '.', '.']) => {
                out.push_str("[]");
                i += 3;
            }
            c if c.is_whitespace() => {
                i += 1;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// Index just past the bracket group opened at `start`
fn skip_balanced(chars: &[char], start: usize, open: char, close: char) -> usize {
    let mut depth = 0usize;
    let mut i = start;
    while i < chars.len() {
        if chars[i] == open {
            depth += 1;
        } else if chars[i] == close {
            depth -= 1;
            if depth == 0 {
                return i + 1;
            }
        }
        i += 1;
    }
    chars.len()
}

/// Index just past `@Name`, `@a.b.Name` or `@Name(...)`
fn skip_annotation(chars: &[char], start: usize) -> usize {
    let mut i = start + 1;
    while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_' || chars[i] == '$' || chars[i] == '.') {
        i += 1;
    }
    let mut j = i;
    while j < chars.len() && chars[j].is_whitespace() {
        j += 1;
    }
    if j < chars.len() && chars[j] == '(' {
        return skip_balanced(chars, j, '(', ')');
    }
    i
}
