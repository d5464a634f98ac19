//! In-memory conversion driver: normalize → parse → group → transform → render.
//!
//! File I/O stays with the caller so the whole pipeline can run against a
//! string in tests and benchmarks.

use crate::config::EmitConfig;
use crate::{emitter, grouper, normalizer, parser, transform, Bucket, Buckets, Result, Trial};

/// Progress reported while converting. Emitted before the transform stage, so
/// counts are visible even if a later record fails coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// All records parsed from the source.
    Read { total: usize },
    /// Records per bucket after grouping, in emission order.
    Grouped { counts: [(Bucket, usize); 4] },
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Records read from the source, including dropped ones.
    pub total_read: usize,
    pub trials: Buckets<Trial>,
    /// Rendered module text, ready to write.
    pub module: String,
}

impl Conversion {
    /// Records read but not placed in any bucket.
    pub fn dropped(&self) -> usize {
        self.total_read - self.trials.len()
    }
}

/// Convert raw source text into the rendered module.
pub fn convert(
    source: &str,
    emit: &EmitConfig,
    mut on_progress: impl FnMut(Progress),
) -> Result<Conversion> {
    let text = normalizer::normalize(source);
    let records = parser::parse_records(&text)?;
    let total_read = records.len();
    on_progress(Progress::Read { total: total_read });

    let grouped = grouper::group(records)?;
    on_progress(Progress::Grouped {
        counts: grouped.counts(),
    });

    let trials = transform::transform(grouped)?;
    let module = emitter::render_module(&trials, emit)?;
    tracing::debug!(
        total_read,
        kept = trials.len(),
        bytes = module.len(),
        "conversion finished"
    );

    Ok(Conversion {
        total_read,
        trials,
        module,
    })
}
