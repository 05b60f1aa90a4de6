//! Winning-node selection.
//!
//! Scans the scored statistics table for the maximum-scoring node and
//! reports how far it stands above the average candidate.

use dom_query::NodeRef;

use crate::error::{Error, Result};
use crate::stats::NodeStats;

/// Pick the highest-scoring node and its confidence ratio.
///
/// The sentinel is zero: a node only qualifies with a strictly positive
/// score, so trees whose scores all collapsed to zero or below produce
/// `NoContent`. Confidence is the winning score over the mean score of all
/// candidates; it is unbounded and normally at least 1.
pub(crate) fn best_node<'a>(stats: &NodeStats<'a>) -> Result<(NodeRef<'a>, f64)> {
    let mut max_score = 0.0_f64;
    let mut best: Option<NodeRef<'a>> = None;
    let mut sum = 0.0_f64;

    for (node, info) in stats {
        if info.score > max_score {
            max_score = info.score;
            best = Some(*node);
        }
        sum += info.score;
    }

    let Some(node) = best else {
        return Err(Error::NoContent);
    };

    let mean = sum / stats.len() as f64;
    Ok((node, max_score / mean))
}
