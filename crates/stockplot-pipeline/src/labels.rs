//! X-axis label density planning.

use stockplot_types::LabelPlan;

/// Largest series length for which every label is drawn.
pub const FULL_LABEL_LIMIT: usize = 30;

/// Returns the stride between major labels, or `None` when every label is
/// drawn.
///
/// The stride is `n / 30` (integer division), which is at least one because
/// it is only computed for `n > 30`.
#[must_use]
pub const fn major_step(n: usize) -> Option<usize> {
    if n > FULL_LABEL_LIMIT {
        Some(n / FULL_LABEL_LIMIT)
    } else {
        None
    }
}

/// Decides which labels are drawn.
///
/// Up to 30 points, every label is shown. Beyond that, only indices
/// `0, step, 2*step, ...` are major labels and minor labels are suppressed;
/// the full label list is kept for tick alignment.
#[must_use]
pub fn plan_labels(labels: Vec<String>) -> LabelPlan {
    let major =
        major_step(labels.len()).map(|step| (0..labels.len()).step_by(step).collect::<Vec<_>>());
    LabelPlan { labels, major }
}
