/// Conversion of many independent documents.
use super::ConvertedDocument;
use crate::common::Result;
use crate::document::WordDocument;
use crate::html::HtmlOptions;
use rayon::prelude::*;

/// Minimum batch size before conversion fans out across threads.
pub const PARALLEL_THRESHOLD: usize = 4;

/// Convert every document, keeping results in input order.
///
/// A failing document yields an `Err` in its slot and does not stop the
/// others. Each document gets its own converter and writer, so nothing is
/// shared between tasks beyond the read-only options.
pub fn convert_batch(documents: &[WordDocument], options: &HtmlOptions) -> Vec<Result<ConvertedDocument>> {
    if options.use_parallel && documents.len() >= PARALLEL_THRESHOLD {
        log::debug!("converting {} documents in parallel", documents.len());
        documents
            .par_iter()
            .map(|doc| doc.convert_with_options(options))
            .collect()
    } else {
        documents
            .iter()
            .map(|doc| doc.convert_with_options(options))
            .collect()
    }
}
