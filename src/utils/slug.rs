//! Entity name <-> URL slug conversion.
//!
//! `slugify` is the only transform used to build detail-view links, and the
//! entity index resolves incoming slugs with the same function.

/// Lowercase the name and replace each run of whitespace with one hyphen
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }

    slug
}

/// Best-effort display name from a slug: hyphens to spaces, words capitalised
///
/// Only reproduces names whose words are all capitalised; resolve slugs through
/// the entity index for an exact name.
#[must_use]
pub fn deslugify(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
