use serde::{Deserialize, Serialize};

/// Fraction of simulated samples strictly greater than zero. Always in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseProbability(f64);

impl PurchaseProbability {
    /// Compute from simulation samples. An empty slice yields 0.
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self(0.0);
        }
        let positive = samples.iter().filter(|&&s| s > 0.0).count();
        Self(positive as f64 / samples.len() as f64)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<PurchaseProbability> for f64 {
    fn from(p: PurchaseProbability) -> f64 {
        p.0
    }
}
