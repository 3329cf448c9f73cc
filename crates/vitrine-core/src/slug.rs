//! Slug normalization for catalog entities.
//!
//! Product, category and brand slugs appear in public URLs
//! (`/produto/{slug}`) and must be stable, lowercase and ASCII.

use crate::error::{CoreError, Result};

/// Normalizes a display name into a URL slug.
///
/// Lowercases, strips the accents common in Portuguese product names,
/// collapses runs of non-alphanumeric characters into single dashes and
/// trims leading/trailing dashes.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = true;
    for ch in name.chars() {
        let ch = fold_accent(ch);
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Validates a caller-supplied slug.
///
/// Accepts lowercase ASCII alphanumerics and single interior dashes.
pub fn validate(slug: &str) -> Result<()> {
    if slug.is_empty() || slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return Err(CoreError::invalid_slug(slug));
    }
    if slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        Ok(())
    } else {
        Err(CoreError::invalid_slug(slug))
    }
}

fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'Á' | 'À' | 'Â' | 'Ã' => 'a',
        'é' | 'ê' | 'É' | 'Ê' => 'e',
        'í' | 'Í' => 'i',
        'ó' | 'ô' | 'õ' | 'Ó' | 'Ô' | 'Õ' => 'o',
        'ú' | 'ü' | 'Ú' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Tênis Esportivo"), "tenis-esportivo");
        assert_eq!(slugify("Camisa   Polo"), "camisa-polo");
        assert_eq!(slugify("Promoção de Verão!"), "promocao-de-verao");
    }

    #[test]
    fn test_slugify_trims_dashes() {
        assert_eq!(slugify("--edge case--"), "edge-case");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_validate_accepts_normalized() {
        assert!(validate("tenis-esportivo").is_ok());
        assert!(validate("produto-123").is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed() {
        assert!(validate("").is_err());
        assert!(validate("-leading").is_err());
        assert!(validate("trailing-").is_err());
        assert!(validate("double--dash").is_err());
        assert!(validate("UpperCase").is_err());
        assert!(validate("acentuação").is_err());
    }

    #[test]
    fn test_slugify_output_validates() {
        for name in ["Tênis Esportivo", "Çedilha & Cia", "100% Algodão"] {
            let slug = slugify(name);
            assert!(validate(&slug).is_ok(), "slug {slug:?} should validate");
        }
    }
}
