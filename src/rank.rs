use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RankConfig;
use crate::doc::DocumentSet;
use crate::error::{RankError, VectorizeError};
use crate::text::Normalizer;
use crate::tfidf::{cosine_similarity, FittedModel, TermWeightingModel, TfIdfVectorizer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFaculty {
    #[serde(rename = "professor")]
    pub name: String,
    #[serde(rename = "similarity_score")]
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub results: Vec<RankedFaculty>,
    #[serde(rename = "entry_results")]
    pub count: usize,
}

impl Ranking {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Keep scores strictly above the threshold, round them, and sort descending.
///
/// `names` and `scores` are index-aligned. The sort is stable, so equal
/// rounded scores stay in document order.
pub fn select<'a>(
    names: impl IntoIterator<Item = &'a str>,
    scores: &[f64],
    config: &RankConfig,
) -> Ranking {
    let mut results: Vec<RankedFaculty> = names
        .into_iter()
        .zip(scores)
        .filter(|&(_, &score)| score > config.threshold)
        .map(|(name, &score)| RankedFaculty {
            name: name.to_string(),
            score: config.round(score),
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    let count = results.len();
    Ranking { results, count }
}

/// Ranks documents against a query in a vector space fitted fresh per call.
pub struct Ranker<M = TfIdfVectorizer> {
    normalizer: Normalizer,
    model: M,
    config: RankConfig,
}

impl Ranker<TfIdfVectorizer> {
    pub fn new(config: RankConfig) -> Self {
        Self::with_model(TfIdfVectorizer::default(), config)
    }
}

impl Default for Ranker<TfIdfVectorizer> {
    fn default() -> Self {
        Self::new(RankConfig::default())
    }
}

impl<M: TermWeightingModel> Ranker<M> {
    pub fn with_model(model: M, config: RankConfig) -> Self {
        Ranker {
            normalizer: Normalizer::new(),
            model,
            config,
        }
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Raw cosine score of every document against `query`, in document order.
    pub fn scores(&self, query: &str, documents: &DocumentSet) -> Result<Vec<f64>, RankError> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let corpus: Vec<String> = std::iter::once(self.normalizer.normalize(query))
            .chain(documents.iter().map(|d| self.normalizer.normalize(&d.biography)))
            .collect();

        let fitted = self.model.fit(&corpus)?;
        let vectors: Vec<_> = corpus.iter().map(|doc| fitted.transform(doc)).collect();
        debug!(
            corpus = corpus.len(),
            vocabulary = fitted.vocabulary_len(),
            "fitted vector space"
        );

        let (query_vec, doc_vecs) = vectors
            .split_first()
            .ok_or(VectorizeError::EmptyCorpus)?;
        Ok(doc_vecs
            .iter()
            .map(|v| cosine_similarity(query_vec, v))
            .collect())
    }

    pub fn rank(&self, query: &str, documents: &DocumentSet) -> Result<Ranking, RankError> {
        let scores = self.scores(query, documents)?;
        let ranking = select(documents.names(), &scores, &self.config);
        debug!(
            documents = documents.len(),
            retained = ranking.count,
            "ranked documents"
        );
        Ok(ranking)
    }
}
