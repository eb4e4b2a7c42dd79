/// Marker appended to text cut by [`truncate_with_ellipsis`].
pub const ELLIPSIS: &str = "...";

/// Keep at most `max_chars` characters, appending `...` when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_owned(),
    }
}

/// Format an integer with `,` between groups of three digits (e.g. 1234567 -> "1,234,567").
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Render a rarity as that many star glyphs.
pub fn star_rating(count: u32) -> String {
    "⭐".repeat(count as usize)
}

/// Uppercase the first character (e.g. "profile" -> "Profile").
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
