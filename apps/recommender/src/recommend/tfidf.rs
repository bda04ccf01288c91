//! TF-IDF vectorization over skill tokens, plus cosine similarity.
//!
//! Weighting:
//! - tf  = raw count of the token in the document
//! - idf = ln((1 + n) / (1 + df)) + 1, with n documents and df documents containing the token
//! - every row is scaled to unit L2 norm; a document without tokens stays the zero vector
//!
//! All weights are non-negative, so cosine similarity between two rows lies in [0, 1].

use std::collections::BTreeMap;

use super::tokenize::tokenize_skills;

/// Sparse row keyed by vocabulary index, sorted ascending by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_map(map: BTreeMap<usize, f64>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product via a merge over the two sorted index lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
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

    fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }
}

/// Fitted TF-IDF model: a vocabulary and one IDF weight per vocabulary entry.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf(&self, token: &str) -> Option<f64> {
        self.vocabulary.get(token).map(|&idx| self.idf[idx])
    }

    /// Learns vocabulary and IDF from `documents` and returns one normalized row per document.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<SparseVector> {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize_skills(doc.as_ref()))
            .collect();

        // Vocabulary indices follow sorted token order so rows are reproducible.
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&String> = tokens.iter().collect();
            seen.sort();
            seen.dedup();
            for token in seen {
                *doc_freq.entry(token.clone()).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        self.vocabulary = doc_freq
            .keys()
            .enumerate()
            .map(|(idx, token)| (token.clone(), idx))
            .collect();
        self.idf = doc_freq
            .values()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        tokenized
            .iter()
            .map(|tokens| self.weigh(tokens))
            .collect()
    }

    fn weigh(&self, tokens: &[String]) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }
        for (idx, weight) in counts.iter_mut() {
            *weight *= self.idf[*idx];
        }

        let mut row = SparseVector::from_map(counts);
        row.normalize();
        row
    }
}

/// Cosine of the angle between two rows. Returns 0.0 when either row is the zero vector.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    // rounding can push identical rows a hair past 1.0
    (a.dot(b) / denom).clamp(0.0, 1.0)
}
