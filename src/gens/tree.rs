use rand::seq::SliceRandom;

use super::*;

/// Returns the `n - 1` edges of a random tree on nodes `0..n`.
///
/// Nodes are attached one after another to a uniformly chosen node that is already part of the
/// tree; node labels are shuffled afterwards so that the tree is not rooted at node `0`.
/// ** Panics if `n == 0` **
pub fn random_tree<R>(rng: &mut R, n: NumNodes) -> Vec<Edge>
where
    R: Rng,
{
    assert!(n > 0, "At least one node must be generated!");

    let mut labels: Vec<Node> = (0..n).collect();
    labels.shuffle(rng);

    (1..n)
        .map(|v| {
            let u = rng.random_range(0..v);
            Edge(labels[u as usize], labels[v as usize]).normalized()
        })
        .collect()
}
