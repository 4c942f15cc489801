/// Display width used by the launcher rows when nothing else is configured.
pub const DEFAULT_MAX_WIDTH: usize = 45;

const ELLIPSIS: &str = "...";

/// Shortens `path` to at most `max_width` characters by keeping its trailing
/// segments behind a `...` marker.
///
/// Segments are taken from the end (the file or directory name) towards the
/// root for as long as `".../" + kept` still fits. A path that already fits,
/// or that has a single segment, comes back unchanged.
pub fn abbreviate(path: &str, max_width: usize) -> String {
    if path.chars().count() <= max_width {
        return path.to_string();
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() < 2 {
        return path.to_string();
    }

    let mut width = ELLIPSIS.len();
    let mut kept = Vec::new();
    for segment in segments.iter().rev() {
        let candidate = width + 1 + segment.chars().count();
        if candidate > max_width {
            break;
        }
        width = candidate;
        kept.push(*segment);
    }

    let mut short = String::from(ELLIPSIS);
    for segment in kept.iter().rev() {
        short.push('/');
        short.push_str(segment);
    }
    short
}

/// Wraps the final segment of an (already abbreviated) path in `<b>` tags.
///
/// The host renders item text as rich text, so the rest of the string is
/// escaped to keep `<`, `>` and `&` in file names literal.
pub fn emphasize_last_segment(display: &str) -> String {
    match display.rsplit_once('/') {
        Some((head, last)) if !last.is_empty() => {
            format!("{}/<b>{}</b>", escape_markup(head), escape_markup(last))
        }
        Some(_) => escape_markup(display),
        None => format!("<b>{}</b>", escape_markup(display)),
    }
}

fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
