//! Escaping of interpolated values per target syntax

use std::borrow::Cow;

/// Escape text content for HTML
pub fn html_text(input: &str) -> Cow<'_, str> {
    replace_chars(input, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    })
}

/// Escape a double-quoted attribute value
pub fn html_attr(input: &str) -> Cow<'_, str> {
    replace_chars(input, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        _ => None,
    })
}

/// Escape text content inside a Vue template
///
/// Braces are encoded so that `{{ ... }}` cannot form an interpolation.
pub fn vue_text(input: &str) -> Cow<'_, str> {
    replace_chars(input, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '{' => Some("&#123;"),
        '}' => Some("&#125;"),
        _ => None,
    })
}

/// Make text safe inside `<!-- ... -->`
///
/// Consecutive dashes are split so the comment cannot be closed early.
pub fn comment(input: &str) -> Cow<'_, str> {
    if !input.contains("--") {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev_dash = false;
    for c in input.chars() {
        if c == '-' && prev_dash {
            out.push(' ');
        }
        prev_dash = c == '-';
        out.push(c);
    }
    Cow::Owned(out)
}

/// Escape an id for use in a CSS `#id` selector
pub fn css_ident(input: &str) -> Cow<'_, str> {
    let needs_escape = input.chars().enumerate().any(|(i, c)| {
        !(c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii())
            || (i == 0 && c.is_ascii_digit())
    });
    if !needs_escape {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for (i, c) in input.chars().enumerate() {
        if i == 0 && c.is_ascii_digit() {
            out.push_str(&format!("\\{:x} ", c as u32));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            out.push(c);
        } else if c.is_ascii_control() {
            out.push_str(&format!("\\{:x} ", c as u32));
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Strip characters that would end a declaration or a `<style>` block
///
/// Backslashes and comment delimiters are removed as well, so a value can
/// neither escape the separator after it nor open a comment that swallows
/// the rest of the stylesheet.
pub fn css_value(input: &str) -> Cow<'_, str> {
    let clean = !input.contains([';', '{', '}', '<', '>', '\\'])
        && !input.contains("/*")
        && !input.contains("*/");
    if clean {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, ';' | '{' | '}' | '<' | '>' | '\\') {
            continue;
        }
        // checked against the last kept char, so removals cannot join a new pair
        let opens_or_closes = matches!((out.chars().last(), c), (Some('/'), '*') | (Some('*'), '/'));
        if !opens_or_closes {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn replace_chars(input: &str, map: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    if !input.chars().any(|c| map(c).is_some()) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match map(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}
