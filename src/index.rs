//! Static augmented interval index for stabbing queries.
//!
//! [`IntervalIndex`] stores intervals in an implicit balanced BST layout:
//! nodes live in a contiguous `Vec` sorted by lower limit, and subtree
//! boundaries are recomputed from range endpoints instead of stored as child
//! pointers. Build once, then answer "which intervals contain this value?"
//! in O(log n + k) expected time.

use crate::bounds::Bounds;
use crate::error::{IntreeError, Result};
use crate::rng::Xorshift64;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pivot seed used by [`IntervalIndex::new`]. Builds are reproducible because
/// the generator is per-build, never process-global.
const DEFAULT_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Internal node in the implicit BST.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Node {
    lower: f64,
    upper: f64,
    /// Maximum upper limit in this node's implicit subtree (self included).
    max_upper: f64,
}

/// A static stabbing-query index over a fixed set of intervals.
///
/// Built once from a sequence of [`Bounds`], then queried arbitrarily often;
/// the structure cannot be modified after construction. Queries return
/// zero-based positions into the original input sequence.
///
/// Storage is two parallel, fixed-size vectors: `nodes` holds the limits plus
/// the augmented subtree maximum, `order` maps each tree slot back to the
/// input position it came from. Queries only read, so a built index can be
/// shared across threads freely.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntervalIndex {
    /// Permutation of `0..n`: tree slot -> original input position.
    order: Vec<usize>,
    nodes: Vec<Node>,
}

impl IntervalIndex {
    /// Build an index from a sequence of intervals. Expected O(n log n).
    ///
    /// Accepts any finite sequence, including empty. Bounds are copied out of
    /// the input; the source objects are not retained. Intervals must satisfy
    /// `lower <= upper` with finite limits — this is not checked, and queries
    /// against an index built from malformed bounds may spuriously miss or
    /// match (use [`IntervalIndex::validated`] for a checking front door).
    pub fn new<B: Bounds>(bounds: &[B]) -> Self {
        Self::with_seed(bounds, DEFAULT_SEED)
    }

    /// Build an index using a caller-supplied pivot seed.
    ///
    /// The seed only influences the internal layout; query results are
    /// identical across seeds for the same input.
    pub fn with_seed<B: Bounds>(bounds: &[B], seed: u64) -> Self {
        let n = bounds.len();
        let mut order: Vec<usize> = (0..n).collect();
        let mut nodes: Vec<Node> = bounds
            .iter()
            .map(|b| {
                let (lower, upper) = b.limits();
                Node {
                    lower,
                    upper,
                    max_upper: upper,
                }
            })
            .collect();

        if n > 1 {
            let mut rng = Xorshift64::new(seed);
            partition(&mut nodes, &mut order, 0, n - 1, &mut rng);
        }
        if n > 0 {
            augment(&mut nodes, 0, n - 1);
        }

        Self { order, nodes }
    }

    /// Build an index, rejecting malformed intervals.
    ///
    /// Returns [`IntreeError::Inverted`] for `lower > upper` and
    /// [`IntreeError::NonFinite`] for NaN or infinite limits. This is the
    /// defensive variant of [`IntervalIndex::new`]; the algorithm itself is
    /// unchanged.
    pub fn validated<B: Bounds>(bounds: &[B]) -> Result<Self> {
        for (position, b) in bounds.iter().enumerate() {
            let (lower, upper) = b.limits();
            if !lower.is_finite() || !upper.is_finite() {
                return Err(IntreeError::NonFinite { position });
            }
            if lower > upper {
                return Err(IntreeError::Inverted {
                    position,
                    lower,
                    upper,
                });
            }
        }
        Ok(Self::new(bounds))
    }

    /// Return the input positions of all intervals containing `value`.
    ///
    /// Both endpoints are inclusive: `lower <= value <= upper`. Results come
    /// back in no particular order, without duplicates. A NaN `value` (or any
    /// value outside every interval) yields an empty vector, as does querying
    /// an empty index.
    pub fn including(&self, value: f64) -> Vec<usize> {
        let mut hits = Vec::new();
        if self.nodes.is_empty() {
            return hits;
        }

        let mut stack = vec![(0usize, self.nodes.len() - 1)];
        while let Some((lb, rb)) = stack.pop() {
            let cn = range_root(lb, rb);
            let node = &self.nodes[cn];

            // Descend left only if some interval there can reach up to value
            if value <= node.max_upper && cn > lb {
                stack.push((lb, cn - 1));
            }

            // Everything right of cn has lower >= node.lower
            if node.lower <= value {
                if cn < rb {
                    stack.push((cn + 1, rb));
                }
                if value <= node.upper {
                    hits.push(self.order[cn]);
                }
            }
        }

        hits
    }

    /// Count intervals containing `value` without allocating.
    pub fn count_including(&self, value: f64) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }

        let mut count = 0;
        let mut stack = vec![(0usize, self.nodes.len() - 1)];
        while let Some((lb, rb)) = stack.pop() {
            let cn = range_root(lb, rb);
            let node = &self.nodes[cn];

            if value <= node.max_upper && cn > lb {
                stack.push((lb, cn - 1));
            }
            if node.lower <= value {
                if cn < rb {
                    stack.push((cn + 1, rb));
                }
                if value <= node.upper {
                    count += 1;
                }
            }
        }

        count
    }

    /// Whether any interval contains `value`. Stops at the first match.
    pub fn includes(&self, value: f64) -> bool {
        if self.nodes.is_empty() {
            return false;
        }

        let mut stack = vec![(0usize, self.nodes.len() - 1)];
        while let Some((lb, rb)) = stack.pop() {
            let cn = range_root(lb, rb);
            let node = &self.nodes[cn];

            if value <= node.max_upper && cn > lb {
                stack.push((lb, cn - 1));
            }
            if node.lower <= value {
                if value <= node.upper {
                    return true;
                }
                if cn < rb {
                    stack.push((cn + 1, rb));
                }
            }
        }

        false
    }

    /// Number of intervals in the index.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the index contains no intervals.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the stored `(lower, upper)` pairs in layout order
    /// (ascending lower limit).
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.nodes.iter().map(|n| (n.lower, n.upper))
    }
}

/// Implicit root of the inclusive range `[lb, rb]`.
///
/// Shared by the augmentation pass and every traversal: the tree has no child
/// pointers, so build and query must derive identical subtree boundaries from
/// the same midpoint. Equals `ceil((lb + rb) / 2)`.
#[inline]
fn range_root(lb: usize, rb: usize) -> usize {
    (lb + rb + 1) / 2
}

/// Randomized-pivot partition sort over `[lb, rb]`, keyed on lower limit.
///
/// Quicksort-shaped: pivot to the right edge, one left-to-right scan growing
/// a strictly-less left partition, pivot into the boundary, recurse on both
/// sides. Every swap is mirrored on `order` so slot identity survives the
/// reordering. Expected O(n log n), worst case O(n²).
fn partition(
    nodes: &mut [Node],
    order: &mut [usize],
    lb: usize,
    rb: usize,
    rng: &mut Xorshift64,
) {
    let p = lb + (rng.next_u64() as usize) % (rb - lb + 1);
    nodes.swap(p, rb);
    order.swap(p, rb);

    let mut l = lb;
    for i in lb..rb {
        if nodes[i].lower < nodes[rb].lower {
            nodes.swap(i, l);
            order.swap(i, l);
            l += 1;
        }
    }

    nodes.swap(l, rb);
    order.swap(l, rb);

    if l > lb + 1 {
        partition(nodes, order, lb, l - 1, rng);
    }
    if l + 2 <= rb {
        partition(nodes, order, l + 1, rb, rng);
    }
}

/// Post-order pass filling in `max_upper` for every range root.
///
/// Returns the maximum upper limit over `[lb, rb]` so each node's subtree
/// maximum is computed once, in O(n) total.
fn augment(nodes: &mut [Node], lb: usize, rb: usize) -> f64 {
    let cn = range_root(lb, rb);
    let mut max = nodes[cn].upper;
    if cn > lb {
        max = max.max(augment(nodes, lb, cn - 1));
    }
    if cn < rb {
        max = max.max(augment(nodes, cn + 1, rb));
    }
    nodes[cn].max_upper = max;
    max
}
