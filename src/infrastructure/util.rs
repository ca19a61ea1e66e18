use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_lowercase_and_hyphenated() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Hello World!"), "hello-world");
        assert_eq!(slugger.slugify("  Déjà vu, again  "), "deja-vu-again");
    }

    #[test]
    fn slugify_is_deterministic() {
        let slugger = DefaultSlugGenerator;
        let title = "Rust & Axum: a tour";
        assert_eq!(slugger.slugify(title), slugger.slugify(title));
    }
}
