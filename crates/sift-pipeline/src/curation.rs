//! Human review pass over the raw search results.
//!
//! The pass walks an owned snapshot of the posts and builds the retained set
//! by selection, so a discard never shifts the positions still to be shown.

use sift_core::RawPost;

use crate::error::PipelineError;
use crate::ports::{Decision, Operator, ReviewPosition};

/// Totals reported at the end of the review pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurationSummary {
    pub discarded: usize,
    pub retained: usize,
}

/// Posts the operator kept, in source order, plus the pass totals.
#[derive(Debug, Clone)]
pub struct Curated {
    pub posts: Vec<RawPost>,
    pub summary: CurationSummary,
}

/// Presents every post to `operator` and keeps the ones not discarded.
///
/// # Errors
///
/// Returns [`PipelineError::OperatorInput`] if the operator channel fails;
/// nothing reviewed so far is returned in that case.
pub fn curate<O>(posts: Vec<RawPost>, operator: &mut O) -> Result<Curated, PipelineError>
where
    O: Operator + ?Sized,
{
    let total = posts.len();
    let mut kept = Vec::with_capacity(total);
    let mut summary = CurationSummary::default();

    operator.begin(total)?;
    for (i, post) in posts.into_iter().enumerate() {
        let position = ReviewPosition {
            index: i + 1,
            total,
        };

        match operator.review(position, &post)? {
            Decision::Discard => {
                tracing::debug!(%position, handle = %post.handle, "discarded post");
                summary.discarded += 1;
            }
            Decision::Keep => {
                tracing::debug!(%position, handle = %post.handle, "kept post");
                summary.retained += 1;
                kept.push(post);
            }
        }
    }

    tracing::info!(
        discarded = summary.discarded,
        retained = summary.retained,
        "finished manual review"
    );
    operator.finish(&summary)?;

    Ok(Curated {
        posts: kept,
        summary,
    })
}
