// ABOUTME: Food keyword extraction from free text for provider search queries
// ABOUTME: Lexicon-based part-of-speech filter, stop-word removal, and weight-goal overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Keyword Extraction
//!
//! Keeps the nouns and adjectives of an utterance, drops request filler
//! ("suggest", "some", "meal") and joins what is left. Weight goals override
//! everything else:
//!
//! | Text mentions | Result |
//! |---|---|
//! | weight loss, weight-loss, lose weight, losing weight | `low calorie` |
//! | weight gain, weight-gain, gain weight, gaining weight | `high calorie` |
//! | nothing usable | `healthy meal` |
//!
//! Tagging uses closed-class word lists: any token that is not a known
//! pronoun, determiner, preposition, conjunction, auxiliary, verb, adverb,
//! particle, interjection or numeral is treated as a noun or adjective.

use tracing::trace;

use crate::constants::queries::{
    DEFAULT_QUERY, HIGH_CALORIE, LOW_CALORIE, WEIGHT_GAIN_PHRASES, WEIGHT_LOSS_PHRASES,
};

/// Additional goal phrasings that express the same weight goals
const LOSE_WEIGHT_PHRASES: &[&str] = &["lose weight", "losing weight"];
const GAIN_WEIGHT_PHRASES: &[&str] = &["gain weight", "gaining weight"];

/// Request filler removed after tagging
const STOP_WORDS: &[&str] = &[
    "suggest", "recommend", "give", "want", "need", "meal", "meals", "food", "foods", "diet",
    "diets", "some", "for", "me", "to", "a", "the", "that", "which",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his",
    "she", "her", "hers", "it", "its", "we", "us", "our", "ours", "they", "them", "their",
    "theirs", "something", "anything", "everything", "nothing", "someone", "anyone", "what",
    "who", "whom", "whose",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "no",
    "another", "which", "all", "both", "either", "neither",
];

const PREPOSITIONS: &[&str] = &[
    "for", "to", "of", "in", "on", "at", "with", "without", "from", "by", "about", "into",
    "after", "before", "during", "like", "than", "under", "over", "around", "per",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "when", "where", "how",
    "why",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has",
    "had", "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

const VERBS: &[&str] = &[
    "want", "need", "give", "suggest", "recommend", "eat", "eating", "ate", "help", "gain",
    "lose", "make", "cook", "cooking", "get", "try", "show", "tell", "find", "prefer", "looking",
    "look", "know", "let", "share", "see", "craving", "crave", "feel", "avoid", "build",
    "follow", "following", "go", "going", "love", "enjoy", "hate", "keep", "stay", "think",
];

const ADVERBS: &[&str] = &[
    "very", "really", "just", "also", "too", "only", "please", "now", "today", "tonight",
    "maybe", "quickly", "mostly", "more", "less", "again", "not", "never", "always", "there",
    "here", "then", "up", "out",
];

const INTERJECTIONS: &[&str] = &["hi", "hello", "hey", "thanks", "thank", "ok", "okay", "yes"];

const ADJECTIVES: &[&str] = &[
    "healthy", "quick", "easy", "light", "heavy", "spicy", "sweet", "savory", "fresh", "green",
    "cheap", "simple", "hot", "cold", "low", "high", "lean", "fried", "grilled", "baked",
    "vegan", "vegetarian", "keto", "paleo", "gluten-free", "dairy-free", "low-carb",
    "high-protein", "italian", "mexican", "indian", "asian", "good", "tasty", "delicious",
];

/// Coarse part-of-speech classes used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    /// Content word, kept
    Noun,
    /// Content word, kept
    Adjective,
    /// Action word
    Verb,
    /// Auxiliary or modal verb
    Auxiliary,
    /// Personal or indefinite pronoun
    Pronoun,
    /// Article or quantifier
    Determiner,
    /// Preposition
    Preposition,
    /// Coordinating or subordinating conjunction
    Conjunction,
    /// Adverb or particle
    Adverb,
    /// Greeting or acknowledgement
    Interjection,
    /// Number
    Numeral,
}

impl PartOfSpeech {
    /// Tag a single lowercase token
    #[must_use]
    pub fn tag(token: &str) -> Self {
        if token.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
            return Self::Numeral;
        }
        if ADJECTIVES.contains(&token) {
            return Self::Adjective;
        }

        let closed_classes: [(&[&str], Self); 8] = [
            (PRONOUNS, Self::Pronoun),
            (DETERMINERS, Self::Determiner),
            (PREPOSITIONS, Self::Preposition),
            (CONJUNCTIONS, Self::Conjunction),
            (AUXILIARIES, Self::Auxiliary),
            (VERBS, Self::Verb),
            (ADVERBS, Self::Adverb),
            (INTERJECTIONS, Self::Interjection),
        ];

        closed_classes
            .iter()
            .find(|(words, _)| words.contains(&token))
            .map_or(Self::Noun, |(_, tag)| *tag)
    }

    /// Whether tokens of this class can carry food keywords
    #[must_use]
    pub const fn is_content(self) -> bool {
        matches!(self, Self::Noun | Self::Adjective)
    }
}

/// Maps raw text to a normalized food keyword string
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    /// Create an extractor
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Extract a keyword string from `text`
    ///
    /// Never returns an empty string: the fallback is `"healthy meal"`.
    /// Tokens keep their first-seen order and appear once.
    #[must_use]
    pub fn extract(&self, text: &str) -> String {
        let lowered = text.to_lowercase();

        if let Some(goal) = Self::weight_goal_override(&lowered) {
            trace!(goal, "Weight goal override applied");
            return goal.to_owned();
        }

        let mut keywords: Vec<String> = Vec::new();
        for token in tokenize(&lowered) {
            if !PartOfSpeech::tag(&token).is_content() || STOP_WORDS.contains(&token.as_str()) {
                continue;
            }
            if !keywords.contains(&token) {
                keywords.push(token);
            }
        }

        if keywords.is_empty() {
            DEFAULT_QUERY.to_owned()
        } else {
            keywords.join(" ")
        }
    }

    /// Goal keyword forced by weight-loss / weight-gain phrasing
    ///
    /// Weight loss is checked first when both appear.
    fn weight_goal_override(lowered: &str) -> Option<&'static str> {
        let mentions = |phrases: &[&str]| phrases.iter().any(|phrase| lowered.contains(phrase));

        if mentions(WEIGHT_LOSS_PHRASES) || mentions(LOSE_WEIGHT_PHRASES) {
            Some(LOW_CALORIE)
        } else if mentions(WEIGHT_GAIN_PHRASES) || mentions(GAIN_WEIGHT_PHRASES) {
            Some(HIGH_CALORIE)
        } else {
            None
        }
    }
}

/// Split lowercase text into word tokens
///
/// Punctuation separates tokens, inner hyphens are kept (`gluten-free`),
/// and contraction suffixes are dropped (`i'm` → `i`, `don't` → `do`).
fn tokenize(lowered: &str) -> Vec<String> {
    lowered
        .split(|ch: char| !(ch.is_alphanumeric() || ch == '-' || ch == '\'' || ch == '’'))
        .filter_map(|raw| {
            let word = raw.split(['\'', '’']).next().unwrap_or(raw);
            let word = if raw.ends_with("n't") || raw.ends_with("n’t") {
                word.strip_suffix('n').unwrap_or(word)
            } else {
                word
            };
            let word = word.trim_matches('-');
            (!word.is_empty()).then(|| word.to_owned())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_loss_override() {
        let extractor = KeywordExtractor::new();
        assert_eq!(extractor.extract("I want weight loss meals"), "low calorie");
        assert_eq!(extractor.extract("weight-loss dinner ideas"), "low calorie");
        assert_eq!(extractor.extract("I need to lose weight"), "low calorie");
    }

    #[test]
    fn test_weight_gain_override() {
        let extractor = KeywordExtractor::new();
        assert_eq!(extractor.extract("help me gain weight"), "high calorie");
        assert_eq!(extractor.extract("Weight gain shakes"), "high calorie");
    }

    #[test]
    fn test_loss_wins_over_gain() {
        let extractor = KeywordExtractor::new();
        assert_eq!(
            extractor.extract("weight loss, not weight gain"),
            "low calorie"
        );
    }

    #[test]
    fn test_empty_and_filler_default_to_healthy_meal() {
        let extractor = KeywordExtractor::new();
        assert_eq!(extractor.extract(""), "healthy meal");
        assert_eq!(extractor.extract("suggest me some food"), "healthy meal");
        assert_eq!(extractor.extract("Can you give me a meal?"), "healthy meal");
    }

    #[test]
    fn test_keeps_nouns_and_adjectives_in_order() {
        let extractor = KeywordExtractor::new();
        assert_eq!(
            extractor.extract("Suggest some spicy chicken for dinner"),
            "spicy chicken dinner"
        );
        assert_eq!(
            extractor.extract("I'm craving gluten-free pasta!"),
            "gluten-free pasta"
        );
    }

    #[test]
    fn test_deduplicates_tokens() {
        let extractor = KeywordExtractor::new();
        assert_eq!(extractor.extract("salmon and more salmon"), "salmon");
    }

    #[test]
    fn test_tokenize_contractions() {
        assert_eq!(tokenize("i'm fine"), vec!["i", "fine"]);
        assert_eq!(tokenize("don't eat"), vec!["do", "eat"]);
        assert_eq!(tokenize("-tofu- bowl?"), vec!["tofu", "bowl"]);
    }

    #[test]
    fn test_tagging() {
        assert_eq!(PartOfSpeech::tag("chicken"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::tag("healthy"), PartOfSpeech::Adjective);
        assert_eq!(PartOfSpeech::tag("want"), PartOfSpeech::Verb);
        assert_eq!(PartOfSpeech::tag("the"), PartOfSpeech::Determiner);
        assert_eq!(PartOfSpeech::tag("500"), PartOfSpeech::Numeral);
    }
}
