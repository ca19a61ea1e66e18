use crate::application::ports::util::SlugGenerator;
use crate::domain::article::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

const FALLBACK_SLUG: &str = "article";

/// Slug for a title. Titles made only of punctuation fall back to a fixed
/// slug; identical titles share a slug. Transliteration can make a slug
/// several times longer than its title, so it is cut back to
/// [`ArticleSlug::MAX_BYTES`] on a separator.
pub fn derive_slug(generator: &dyn SlugGenerator, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
    let base = generator.slugify(title.as_str());
    let bounded = truncate_on_separator(&base, ArticleSlug::MAX_BYTES);
    if bounded.is_empty() {
        ArticleSlug::new(FALLBACK_SLUG)
    } else {
        ArticleSlug::new(bounded)
    }
}

fn truncate_on_separator(slug: &str, max_bytes: usize) -> &str {
    if slug.len() <= max_bytes {
        return slug;
    }
    let end = (0..=max_bytes)
        .rev()
        .find(|&i| slug.is_char_boundary(i))
        .unwrap_or(0);
    let head = &slug[..end];
    // keep whole words unless the cut already falls on a separator
    let head = if slug[end..].starts_with('-') {
        head
    } else {
        head.rfind('-').map_or(head, |i| &head[..i])
    };
    head.trim_end_matches('-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::util::DefaultSlugGenerator;

    fn slug_for(title: &str) -> ArticleSlug {
        derive_slug(&DefaultSlugGenerator, &ArticleTitle::new(title).unwrap()).unwrap()
    }

    #[test]
    fn punctuation_only_title_uses_fallback() {
        assert_eq!(slug_for("!!! ???").as_str(), "article");
    }

    #[test]
    fn plain_title_is_slugified() {
        assert_eq!(slug_for("Hello World!").as_str(), "hello-world");
    }

    #[test]
    fn long_non_latin_titles_stay_within_bound() {
        for title in ["漢".repeat(150), "🎉".repeat(150), "Ωμέγα ".repeat(25)] {
            let slug = slug_for(&title);
            assert!(!slug.as_str().is_empty());
            assert!(slug.as_str().len() <= ArticleSlug::MAX_BYTES, "{}", slug.as_str().len());
            assert!(!slug.as_str().ends_with('-'));
        }
    }

    #[test]
    fn truncation_keeps_whole_words() {
        assert_eq!(truncate_on_separator("alpha-beta-gamma", 12), "alpha-beta");
        assert_eq!(truncate_on_separator("alpha-beta-gamma", 10), "alpha-beta");
        assert_eq!(truncate_on_separator("alpha-beta", 64), "alpha-beta");
        assert_eq!(truncate_on_separator("abcdefghij", 4), "abcd");
    }
}
