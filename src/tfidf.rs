//! TF-IDF vector space built over a single corpus.
//!
//! A [`TermWeightingModel`] is configuration only; calling [`TermWeightingModel::fit`]
//! produces a fresh [`FittedModel`] owning the vocabulary and IDF weights for
//! exactly that corpus. Nothing is shared between fits.

use std::collections::{BTreeSet, HashMap};

use crate::constants::MIN_TERM_LEN;
use crate::error::VectorizeError;

/// Sparse L2-normalised (or zero) term vector, entries sorted by term id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(u32, f64)>,
}

impl SparseVector {
    /// Build from arbitrary `(term, weight)` pairs; zero weights are dropped.
    pub fn from_entries(mut entries: Vec<(u32, f64)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(id, _)| id);
        SparseVector { entries }
    }

    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_id, a_w) = self.entries[i];
            let (b_id, b_w) = other.entries[j];
            match a_id.cmp(&b_id) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Cosine of the angle between `a` and `b`; 0.0 when either is the zero vector.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let na = a.norm();
    let nb = b.norm();
    if na > 0.0 && nb > 0.0 {
        (a.dot(b) / (na * nb)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub trait FittedModel {
    fn transform(&self, text: &str) -> SparseVector;
    fn vocabulary_len(&self) -> usize;
}

pub trait TermWeightingModel {
    type Fitted: FittedModel;

    fn fit(&self, corpus: &[String]) -> Result<Self::Fitted, VectorizeError>;
}

/// Word-ish runs of at least `min_len` chars; alphanumerics and `_` count as word chars.
pub fn terms(text: &str, min_len: usize) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(move |w| w.chars().count() >= min_len)
        .map(|w| w.to_lowercase())
}

#[derive(Debug, Clone, Copy)]
pub struct TfIdfVectorizer {
    pub min_term_len: usize,
    /// Add one to every document frequency, as if an extra document held every term.
    pub smooth_idf: bool,
    /// Use `1 + ln(tf)` in place of raw counts.
    pub sublinear_tf: bool,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        TfIdfVectorizer {
            min_term_len: MIN_TERM_LEN,
            smooth_idf: true,
            sublinear_tf: false,
        }
    }
}

impl TfIdfVectorizer {
    fn idf(&self, n: f64, df: f64) -> f64 {
        if self.smooth_idf {
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
            (n / df).ln() + 1.0
        }
    }
}

impl TermWeightingModel for TfIdfVectorizer {
    type Fitted = TfIdfModel;

    fn fit(&self, corpus: &[String]) -> Result<TfIdfModel, VectorizeError> {
        if corpus.is_empty() {
            return Err(VectorizeError::EmptyCorpus);
        }

        let mut df: HashMap<String, u32> = HashMap::new();
        for doc in corpus {
            let unique: BTreeSet<String> = terms(doc, self.min_term_len).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        // Lexicographic ids keep the vector space identical across runs.
        let ordered: BTreeSet<&String> = df.keys().collect();
        let n = corpus.len() as f64;
        let mut vocabulary = HashMap::with_capacity(ordered.len());
        let mut idf = Vec::with_capacity(ordered.len());
        for (id, term) in ordered.into_iter().enumerate() {
            let weight = self.idf(n, df[term] as f64);
            if !weight.is_finite() {
                return Err(VectorizeError::NonFiniteWeight { term: term.clone() });
            }
            vocabulary.insert(term.clone(), id as u32);
            idf.push(weight);
        }

        Ok(TfIdfModel {
            vocabulary,
            idf,
            min_term_len: self.min_term_len,
            sublinear_tf: self.sublinear_tf,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TfIdfModel {
    vocabulary: HashMap<String, u32>,
    idf: Vec<f64>,
    min_term_len: usize,
    sublinear_tf: bool,
}

impl TfIdfModel {
    pub fn term_id(&self, term: &str) -> Option<u32> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_id(term).map(|id| self.idf[id as usize])
    }
}

impl FittedModel for TfIdfModel {
    fn transform(&self, text: &str) -> SparseVector {
        let mut tf: HashMap<u32, u32> = HashMap::new();
        for term in terms(text, self.min_term_len) {
            if let Some(&id) = self.vocabulary.get(&term) {
                *tf.entry(id).or_insert(0) += 1;
            }
        }

        let weighted: Vec<(u32, f64)> = tf
            .into_iter()
            .map(|(id, count)| {
                let count = count as f64;
                let tf = if self.sublinear_tf { 1.0 + count.ln() } else { count };
                (id, tf * self.idf[id as usize])
            })
            .collect();

        let mut vector = SparseVector::from_entries(weighted);
        let norm = vector.norm();
        if norm > 0.0 {
            for (_, w) in vector.entries.iter_mut() {
                *w /= norm;
            }
        }
        vector
    }

    fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&str]) -> Vec<String> {
        docs.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let err = TfIdfVectorizer::default().fit(&[]).unwrap_err();
        assert_eq!(err, VectorizeError::EmptyCorpus);
    }

    #[test]
    fn all_empty_documents_fit_to_zero_vectors() {
        let model = TfIdfVectorizer::default()
            .fit(&corpus(&["", "", ""]))
            .unwrap();
        assert_eq!(model.vocabulary_len(), 0);
        assert!(model.transform("").is_zero());
        assert!(model.transform("unseen words").is_zero());
    }

    #[test]
    fn smoothed_idf_weights() {
        let model = TfIdfVectorizer::default()
            .fit(&corpus(&["cell biolog", "cell", "plant"]))
            .unwrap();
        // n = 3: df(cell) = 2, df(plant) = 1
        let cell = model.idf("cell").unwrap();
        let plant = model.idf("plant").unwrap();
        assert!((cell - ((4.0f64 / 3.0).ln() + 1.0)).abs() < 1e-12);
        assert!((plant - (2.0f64.ln() + 1.0)).abs() < 1e-12);
        assert!(plant > cell);
    }

    #[test]
    fn vocabulary_is_lexicographic() {
        let model = TfIdfVectorizer::default()
            .fit(&corpus(&["zebra apple mango"]))
            .unwrap();
        assert_eq!(model.term_id("apple"), Some(0));
        assert_eq!(model.term_id("mango"), Some(1));
        assert_eq!(model.term_id("zebra"), Some(2));
    }

    #[test]
    fn single_char_terms_are_ignored() {
        let model = TfIdfVectorizer::default()
            .fit(&corpus(&["a b cd"]))
            .unwrap();
        assert_eq!(model.vocabulary_len(), 1);
        assert_eq!(model.term_id("cd"), Some(0));
    }

    #[test]
    fn transform_is_unit_length() {
        let model = TfIdfVectorizer::default()
            .fit(&corpus(&["cancer cell cell", "plant genom"]))
            .unwrap();
        let v = model.transform("cancer cell cell");
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert_eq!(v.entries().len(), 2);
    }

    #[test]
    fn cosine_handles_zero_vectors() {
        let zero = SparseVector::default();
        let v = SparseVector::from_entries(vec![(0, 1.0)]);
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn cosine_of_identical_and_disjoint_vectors() {
        let a = SparseVector::from_entries(vec![(2, 0.6), (0, 0.8)]);
        let b = SparseVector::from_entries(vec![(1, 1.0)]);
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-12);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn cosine_partial_overlap() {
        let a = SparseVector::from_entries(vec![(0, 1.0), (1, 1.0)]);
        let b = SparseVector::from_entries(vec![(1, 1.0), (2, 1.0)]);
        assert!((cosine_similarity(&a, &b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sublinear_tf_dampens_repeats() {
        let docs = corpus(&["gene gene gene gene protein", "other"]);
        let raw = TfIdfVectorizer::default().fit(&docs).unwrap();
        let damped = TfIdfVectorizer {
            sublinear_tf: true,
            ..TfIdfVectorizer::default()
        }
        .fit(&docs)
        .unwrap();
        let protein_raw = raw.transform(&docs[0]).entries()[1].1;
        let protein_damped = damped.transform(&docs[0]).entries()[1].1;
        assert!(protein_damped > protein_raw);
    }
}
