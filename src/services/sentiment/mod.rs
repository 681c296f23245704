/// Lexicon-based sentiment classification
///
/// Polarity is the clamped mean of the lexicon scores of the words in the
/// text, with intensity modifiers and a short negation window. Text with no
/// scored words (including empty text) has polarity 0.0 and classifies as
/// neutral.
use crate::models::Sentiment;

pub mod lexicon;

pub use lexicon::ReviewLexicon;

/// Polarity strictly above this classifies as positive
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Polarity strictly below this classifies as negative
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Number of tokens after a negation word that it still inverts
const NEGATION_WINDOW: usize = 3;

/// Damping applied when a negation inverts a word score
const NEGATION_DAMPING: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    lexicon: ReviewLexicon,
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self {
            lexicon: ReviewLexicon::new(),
        }
    }

    /// Polarity score for a text in [-1.0, 1.0]
    pub fn polarity(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut scored_words = 0usize;
        let mut current_modifier = 1.0;
        let mut negation_active = false;
        let mut words_since_negation = 0usize;

        for token in tokenize(text) {
            if self.lexicon.is_negation(&token) {
                negation_active = true;
                words_since_negation = 0;
                continue;
            }

            if let Some(modifier) = self.lexicon.modifier(&token) {
                current_modifier = modifier;
                continue;
            }

            if let Some(base) = self.lexicon.score(&token) {
                let mut score = base * current_modifier;
                if negation_active && words_since_negation < NEGATION_WINDOW {
                    score = -score * NEGATION_DAMPING;
                }
                total += score;
                scored_words += 1;
                current_modifier = 1.0;
            }

            if negation_active {
                words_since_negation += 1;
                if words_since_negation >= NEGATION_WINDOW {
                    negation_active = false;
                }
            }
        }

        if scored_words == 0 {
            return 0.0;
        }

        (total / scored_words as f64).clamp(-1.0, 1.0)
    }

    /// Map a text to its sentiment label
    pub fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_polarity(self.polarity(text))
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Sentiment {
    /// Threshold rule: > 0.1 positive, < -0.1 negative, else neutral.
    /// The boundary values themselves are neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(|raw| {
        let token: String = raw
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '\'')
            .flat_map(|c| c.to_lowercase())
            .collect();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    })
}
