//! Priority reduction of candidate tags into the final label set.

use super::composer::Composition;
use super::taxonomy::PRIORITY_ORDER;
use super::types::{LabelSet, MAX_TAGS, TagList};

/// Keep the highest-priority candidates, at most [`MAX_TAGS`] of them.
///
/// A lone survivor is not informative enough to publish and becomes
/// [`LabelSet::Uncategorized`].
pub fn reduce(candidates: &TagList) -> LabelSet {
    let kept = PRIORITY_ORDER
        .iter()
        .copied()
        .filter(|tag| candidates.contains(*tag))
        .take(MAX_TAGS)
        .collect();
    LabelSet::from_reduced(kept)
}

/// Reduce a composition; the uncategorized sentinel passes through.
pub fn finalize(composition: Composition) -> LabelSet {
    match composition {
        Composition::Candidates(candidates) => reduce(&candidates),
        Composition::Uncategorized => LabelSet::Uncategorized,
    }
}
