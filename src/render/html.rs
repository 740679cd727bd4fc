/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Turns an upstream location key like `north_carolina-usa` into `North Carolina, USA`.
pub fn display_location(raw: &str) -> String {
    let parts: Vec<&str> = raw.split('-').collect();
    let last = parts.len().saturating_sub(1);
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            // country codes such as usa or uk
            if i == last && i > 0 && part.len() <= 3 {
                part.to_uppercase()
            } else {
                part.split('_').map(capitalize).collect::<Vec<_>>().join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Upstream prefixes some dates with `*`.
pub fn display_date(raw: &str) -> &str {
    raw.trim_start_matches('*')
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
