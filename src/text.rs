use rust_stemmers::{Algorithm, Stemmer};

/// Quote characters removed before tokenizing: straight and curly quotes plus backticks.
pub fn is_quote_char(c: char) -> bool {
    matches!(c, '"' | '\'' | '`' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}')
}

pub fn strip_quotes(text: &str) -> String {
    text.chars().filter(|&c| !is_quote_char(c)).collect()
}

pub fn is_stop_word(w: &str) -> bool {
    matches!(
        w,
        "a" | "an" | "the" | "and" | "or" | "but" | "if" | "then" | "else" | "nor"
        | "so" | "when" | "while" | "where" | "why" | "how" | "what" | "which"
        | "who" | "whom" | "of" | "to" | "in" | "on" | "at" | "by" | "for"
        | "with" | "about" | "from" | "into" | "onto" | "over" | "under"
        | "above" | "below" | "up" | "down" | "out" | "off" | "after" | "before"
        | "again" | "further" | "once" | "between" | "through" | "during"
        | "without" | "within" | "against" | "because" | "until" | "is" | "are"
        | "was" | "were" | "be" | "been" | "being" | "am" | "do" | "does" | "did"
        | "doing" | "will" | "have" | "has" | "had" | "having" | "can" | "could"
        | "should" | "would" | "may" | "might" | "must" | "shall" | "such" | "as"
        | "it" | "its" | "itself" | "this" | "that" | "these" | "those" | "he"
        | "him" | "his" | "himself" | "she" | "her" | "hers" | "herself" | "they"
        | "them" | "their" | "theirs" | "themselves" | "there" | "here" | "we"
        | "our" | "ours" | "ourselves" | "you" | "your" | "yours" | "yourself"
        | "i" | "me" | "my" | "myself" | "us" | "not" | "no" | "than" | "too"
        | "very" | "also" | "just" | "only" | "own" | "same" | "both" | "few"
        | "more" | "most" | "some" | "any" | "all" | "each" | "other"
    )
}

/// Split lowercased `text` into word tokens, dropping stop-words.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty() && !is_stop_word(w))
}

/// Turns raw biography or query text into a space-joined sequence of base forms.
///
/// The snowball stemmer stands in for a dictionary lemmatizer: it collapses
/// inflectional variants ("researches", "researching") onto one feature.
pub struct Normalizer {
    stemmer: Stemmer,
}

impl Normalizer {
    pub fn new() -> Self {
        Normalizer {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        let lowered = strip_quotes(text).to_lowercase();
        let lemmas: Vec<String> = tokenize(&lowered)
            .map(|w| self.stemmer.stem(w).into_owned())
            .filter(|w| !w.is_empty())
            .collect();
        lemmas.join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
