use crate::normalize::normalize;
use bitflags::bitflags;
use once_cell::sync::Lazy;
use regex::Regex;

bitflags! {
    /// Allergen and diet-relevant tags attached to an ingredient.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AllergenTags: u8 {
        /// Eggs, dairy, honey and other animal-derived products.
        const ANIMAL_PRODUCT = 1 << 0;
        /// Meat or fish.
        const MEAT = 1 << 1;
        const GLUTEN = 1 << 2;
        const DAIRY = 1 << 3;
        const NUTS = 1 << 4;
    }
}

/// Turns an ingredient name into the set of tags the dietary filter checks.
///
/// The scorer only depends on this trait, so the heuristic default can be
/// replaced with a structured allergen lookup.
pub trait AllergenClassifier: Send + Sync {
    fn classify(&self, ingredient: &str) -> AllergenTags;
}

const ANIMAL_PRODUCTS: &[&str] = &[
    "huevo", "huevos", "queso", "leche", "miel", "mantequilla", "nata", "yogur", "egg", "eggs",
    "cheese", "milk", "honey", "butter", "cream", "yogurt", "yoghurt",
];

static MEAT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(pollo|pechugas?|carnes?|jamon|atun|cerdo|ternera|pescados?|chorizo|panceta|chicken|beef|pork|ham|bacon|tuna|salmon|fish|meat|turkey|sausages?)\b",
    )
    .expect("valid meat pattern")
});

static GLUTEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"trigo|pan|harina|cuscus|pasta|wheat|bread|flour|couscous|barley")
        .expect("valid gluten pattern")
});

static DAIRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"leche|nata|queso|mantequilla|yogur|milk|cream|cheese|butter|yoghurt")
        .expect("valid dairy pattern")
});

static NUT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"nuez|nueces|almendra|avellana|cacahuete|walnut|almond|hazelnut|peanut|cashew|pecan|pistachio")
        .expect("valid nut pattern")
});

/// Default classifier: an exact word list for animal products, whole-word
/// matching for meat and fish, substring patterns for gluten, dairy and nuts.
/// Approximate by nature.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternClassifier;

impl AllergenClassifier for PatternClassifier {
    fn classify(&self, ingredient: &str) -> AllergenTags {
        let name = normalize(ingredient);
        let mut tags = AllergenTags::empty();
        if ANIMAL_PRODUCTS.contains(&name.as_str()) {
            tags |= AllergenTags::ANIMAL_PRODUCT;
        }
        if MEAT_PATTERN.is_match(&name) {
            tags |= AllergenTags::MEAT;
        }
        if GLUTEN_PATTERN.is_match(&name) {
            tags |= AllergenTags::GLUTEN;
        }
        if DAIRY_PATTERN.is_match(&name) {
            tags |= AllergenTags::DAIRY;
        }
        if NUT_PATTERN.is_match(&name) {
            tags |= AllergenTags::NUTS;
        }
        tags
    }
}
