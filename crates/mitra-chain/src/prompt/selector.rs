//! Few-shot example selection by TF-IDF cosine similarity.
//!
//! Tokens are lowercase alphanumeric runs of length >= 2, hashed into a
//! fixed number of buckets with FNV-1a. IDF is computed over the example
//! inputs, so words shared by every example weigh less than distinguishing
//! ones. Vectors are L2-normalized; similarity is a dot product.

use std::collections::HashSet;

use super::examples::builtin_examples;
use super::FewShotExample;

const DIMENSIONS: usize = 512;

/// Ranks stored examples against a question and keeps the closest `k`.
#[derive(Debug, Clone)]
pub struct ExampleSelector {
    examples: Vec<FewShotExample>,
    vectors: Vec<Vec<f32>>,
    idf: Vec<f32>,
    k: usize,
}

impl ExampleSelector {
    pub fn new(examples: Vec<FewShotExample>, k: usize) -> Self {
        let idf = inverse_document_frequency(&examples);
        let vectors = examples
            .iter()
            .map(|e| weigh(&e.input, &idf))
            .collect();
        Self {
            examples,
            vectors,
            idf,
            k,
        }
    }

    /// Selector over [`builtin_examples`].
    pub fn builtin(k: usize) -> Self {
        Self::new(builtin_examples(), k)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Up to `k` examples, most similar first. Ties keep insertion order.
    pub fn select(&self, question: &str) -> Vec<&FewShotExample> {
        let query = weigh(question, &self.idf);
        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (i, dot(&query, v)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
            .into_iter()
            .take(self.k)
            .map(|(i, _)| &self.examples[i])
            .collect()
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|w| w.len() >= 2)
        .map(|w| w.to_lowercase())
        .collect()
}

/// FNV-1a hash into `DIMENSIONS` buckets.
fn bucket(token: &str) -> usize {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in token.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    (hash as usize) % DIMENSIONS
}

fn inverse_document_frequency(examples: &[FewShotExample]) -> Vec<f32> {
    let mut df = vec![0u32; DIMENSIONS];
    for example in examples {
        let seen: HashSet<usize> = tokenize(&example.input).iter().map(|t| bucket(t)).collect();
        for idx in seen {
            df[idx] += 1;
        }
    }
    let n = examples.len() as f32;
    df.into_iter()
        .map(|d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0)
        .collect()
}

fn weigh(text: &str, idf: &[f32]) -> Vec<f32> {
    let tokens = tokenize(text);
    let mut vector = vec![0.0f32; DIMENSIONS];
    if tokens.is_empty() {
        return vector;
    }
    let total = tokens.len() as f32;
    for token in &tokens {
        vector[bucket(token)] += 1.0 / total;
    }
    for (weight, factor) in vector.iter_mut().zip(idf) {
        *weight *= factor;
    }
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in &mut vector {
            *x /= norm;
        }
    }
    vector
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
