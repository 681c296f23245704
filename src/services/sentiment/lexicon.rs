use std::collections::HashMap;

/// Word-level sentiment lexicon tuned for app-store review language
///
/// Scores are in [-1.0, 1.0]. Intensity modifiers scale the next scored
/// word; negation words flip it within a short window.
#[derive(Debug, Clone)]
pub struct ReviewLexicon {
    scores: HashMap<&'static str, f64>,
    modifiers: HashMap<&'static str, f64>,
    negations: &'static [&'static str],
}

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("amazing", 0.9),
    ("awesome", 0.85),
    ("excellent", 0.85),
    ("fantastic", 0.85),
    ("perfect", 0.9),
    ("incredible", 0.85),
    ("love", 0.8),
    ("loved", 0.8),
    ("best", 0.8),
    ("great", 0.7),
    ("wonderful", 0.8),
    ("brilliant", 0.8),
    ("flawless", 0.85),
    ("good", 0.5),
    ("nice", 0.45),
    ("like", 0.35),
    ("solid", 0.45),
    ("smooth", 0.5),
    ("fast", 0.45),
    ("reliable", 0.55),
    ("helpful", 0.5),
    ("useful", 0.5),
    ("easy", 0.45),
    ("intuitive", 0.55),
    ("clean", 0.4),
    ("stable", 0.45),
    ("responsive", 0.5),
    ("recommend", 0.65),
    ("recommended", 0.65),
    ("works", 0.35),
    ("improved", 0.45),
    ("free", 0.3),
    ("fun", 0.55),
    ("enjoy", 0.55),
    ("happy", 0.55),
    ("satisfied", 0.55),
    ("worth", 0.5),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("terrible", -0.85),
    ("horrible", -0.85),
    ("awful", -0.8),
    ("worst", -0.85),
    ("hate", -0.75),
    ("garbage", -0.8),
    ("trash", -0.8),
    ("useless", -0.75),
    ("unusable", -0.8),
    ("scam", -0.95),
    ("fraud", -0.95),
    ("broken", -0.7),
    ("crash", -0.7),
    ("crashes", -0.75),
    ("crashed", -0.7),
    ("crashing", -0.75),
    ("freeze", -0.6),
    ("freezes", -0.65),
    ("frozen", -0.6),
    ("bug", -0.5),
    ("bugs", -0.55),
    ("buggy", -0.65),
    ("glitch", -0.5),
    ("glitchy", -0.6),
    ("slow", -0.5),
    ("laggy", -0.55),
    ("lag", -0.5),
    ("bad", -0.5),
    ("poor", -0.5),
    ("annoying", -0.55),
    ("ads", -0.4),
    ("intrusive", -0.55),
    ("spam", -0.6),
    ("uninstall", -0.65),
    ("uninstalled", -0.7),
    ("uninstalling", -0.7),
    ("refund", -0.6),
    ("disappointing", -0.6),
    ("disappointed", -0.6),
    ("expensive", -0.45),
    ("overpriced", -0.55),
    ("confusing", -0.5),
    ("fail", -0.55),
    ("fails", -0.55),
    ("failed", -0.55),
    ("waste", -0.6),
    ("battery", -0.3),
    ("drains", -0.5),
];

const MODIFIER_WORDS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("really", 1.4),
    ("extremely", 1.8),
    ("incredibly", 1.7),
    ("super", 1.5),
    ("absolutely", 1.6),
    ("totally", 1.4),
    ("completely", 1.5),
    ("so", 1.3),
    ("quite", 1.2),
    ("pretty", 1.15),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("barely", 0.6),
    ("kinda", 0.8),
    ("bit", 0.75),
];

const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "neither", "dont", "don't", "doesnt", "doesn't",
    "didnt", "didn't", "cant", "can't", "cannot", "couldnt", "couldn't", "wont", "won't",
    "wouldnt", "wouldn't", "isnt", "isn't", "arent", "aren't", "wasnt", "wasn't",
];

impl ReviewLexicon {
    pub fn new() -> Self {
        let scores = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS.iter())
            .copied()
            .collect();
        let modifiers = MODIFIER_WORDS.iter().copied().collect();

        Self {
            scores,
            modifiers,
            negations: NEGATION_WORDS,
        }
    }

    /// Sentiment score for a lowercased token, if it carries one
    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// Intensity multiplier for a lowercased token, if it is a modifier
    pub fn modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word)
    }
}

impl Default for ReviewLexicon {
    fn default() -> Self {
        Self::new()
    }
}
