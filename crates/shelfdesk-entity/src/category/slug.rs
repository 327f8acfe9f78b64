//! Slug derivation for category names.

/// Derive a URL-safe slug from a display name.
///
/// Lowercases, drops anything other than ASCII word characters, whitespace
/// and `-`, collapses runs of whitespace, `_` and `-` into a single `-`
/// and trims dashes from both ends. Returns `None` when nothing is left.
pub fn slugify(name: &str) -> Option<String> {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = false;

    for ch in name.trim().to_lowercase().chars() {
        let mapped = if ch.is_whitespace() || ch == '-' || ch == '_' {
            Some('-')
        } else if ch.is_ascii_alphanumeric() {
            Some(ch)
        } else {
            None
        };

        match mapped {
            Some('-') => {
                if !last_dash {
                    slug.push('-');
                    last_dash = true;
                }
            }
            Some(c) => {
                slug.push(c);
                last_dash = false;
            }
            None => {}
        }
    }

    let slug = slug.trim_matches('-');
    (!slug.is_empty()).then(|| slug.to_string())
}
