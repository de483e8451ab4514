/// Maximum visible characters in a cached sidebar title.
pub const TITLE_MAX_CHARS: usize = 24;

/// Derive a document title from its content: first non-empty line, trimmed,
/// truncated to [`TITLE_MAX_CHARS`] characters with an ellipsis when longer.
/// `"Untitled"` when there is no non-empty line.
pub fn derive_title(content: &str) -> String {
    let first_line = content
        .split('\n')
        .map(str::trim)
        .find(|line| !line.is_empty());

    match first_line {
        None => "Untitled".to_string(),
        Some(line) => {
            if line.chars().count() > TITLE_MAX_CHARS {
                let mut title: String = line.chars().take(TITLE_MAX_CHARS).collect();
                title.push('…');
                title
            } else {
                line.to_string()
            }
        }
    }
}
