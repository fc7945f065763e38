use super::*;

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible undirected edge between `n` nodes with probability `p`
/// independent from each other. Self-loops are never generated.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "Invalid probability {prob}!");
        self.p = GnpType::Prob(prob);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                // every node has `n - 1` potential neighbors
                let p = d / (self.n.saturating_sub(1).max(1)) as f64;
                assert!(
                    (0.0..=1.0).contains(&p),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/(n - 1)`.
    /// Note that this conversion will only be done when calling `generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        let p = self.probability();

        let mut edges = Vec::new();
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                if rng.random_bool(p) {
                    edges.push(Edge(u, v));
                }
            }
        }
        edges
    }
}
