//! Density scoring over the statistics table.
//!
//! Every record gets a text density (non-link text per non-link structural
//! node, log-scaled) and a symbol density (non-link text per punctuation
//! mark). The final score normalizes by the tree's own density distribution:
//! the log of the population standard deviation multiplies every node alike,
//! so it scales score magnitude (and the reported confidence) without
//! changing the ranking.

use crate::error::{Error, Result};
use crate::stats::NodeStats;

/// Compute densities and final scores for every record, in place.
///
/// Returns `DegenerateDistribution` when the density distribution carries no
/// signal (zero standard deviation) or a derived score is non-finite.
pub(crate) fn score_nodes(stats: &mut NodeStats) -> Result<()> {
    if stats.is_empty() {
        return Err(Error::NoContent);
    }

    let count = stats.len() as f64;
    let mut sum = 0.0;
    for (_, info) in stats.iter_mut() {
        // may go slightly negative after whitespace collapsing, so subtract in f64
        let non_link_text = info.text_len as f64 - info.link_text_len as f64;
        let non_link_tags = (info.tag_count - info.link_tag_count + 1) as f64;

        info.text_density = non_link_text / non_link_tags * non_link_tags.log10();
        info.symbol_density = non_link_text / (info.punct_count + 1) as f64;
        sum += info.text_density;
    }

    // population standard deviation: divisor is the record count
    let mean = sum / count;
    let variance = stats
        .iter()
        .map(|(_, info)| (info.text_density - mean).powi(2))
        .sum::<f64>()
        / count;
    let sd = variance.sqrt();

    if sd == 0.0 {
        return Err(Error::DegenerateDistribution);
    }

    let ln_sd = sd.ln();
    for (_, info) in stats.iter_mut() {
        info.score = ln_sd
            * info.text_density
            * ((info.p_count + 1) as f64).ln()
            * (info.symbol_density + 1.0).ln();
        if !info.score.is_finite() {
            return Err(Error::DegenerateDistribution);
        }
    }

    Ok(())
}
