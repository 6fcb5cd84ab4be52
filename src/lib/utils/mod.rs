/// Non-breaking space, used to keep multi-word names on one line.
pub const NBSP: char = '\u{a0}';

/// Compute a slug suitable for URL paths.
///
/// Every run of whitespace collapses into a single hyphen, then the whole
/// result is lowercased at once so context-sensitive mappings (Greek final
/// sigma) apply. Nothing is trimmed, so leading whitespace becomes a leading
/// hyphen.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_space = false;

    for ch in input.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }

    out.to_lowercase()
}

/// Uppercase the first character and lowercase the rest.
///
/// The empty string maps to itself.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Replace every ASCII space with a non-breaking space.
pub fn nbspize(s: &str) -> String {
    s.replace(' ', &NBSP.to_string())
}
