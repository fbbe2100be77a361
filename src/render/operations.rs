//! Response rendering implementation

use crate::error::Result;
use crate::render::format::size_format;
use crate::render::types::{DownloadLinks, RenderedSummary, SizeReport};
use crate::upload::types::{UploadResponse, UploadResult};

/// Decimal places used for every size in the summary
pub const SUMMARY_DECIMALS: usize = 2;

/// Compare a variant against its source
///
/// The ratio always divides the smaller size by the larger, so a variant
/// that grew reports the same savings magnitude as one that shrank. Two
/// empty files compare as identical.
pub fn compare(source_size: u64, variant_size: u64) -> SizeReport {
    let diff = source_size.abs_diff(variant_size);
    let smaller = source_size.min(variant_size);
    let larger = source_size.max(variant_size);

    let ratio = if larger == 0 {
        1.0
    } else {
        smaller as f64 / larger as f64
    };

    SizeReport {
        size: variant_size,
        size_text: size_format(variant_size, SUMMARY_DECIMALS),
        diff,
        diff_text: size_format(diff, SUMMARY_DECIMALS),
        savings_percent: 100.0 - ratio * 100.0,
    }
}

/// Build the summary for a completed upload
pub fn render(result: &UploadResult) -> RenderedSummary {
    let source_size = result.source.size;

    let summary = RenderedSummary {
        source_size,
        source_text: size_format(source_size, SUMMARY_DECIMALS),
        lossless: compare(source_size, result.compressed.size),
        lossy: result
            .lossy
            .as_ref()
            .map(|lossy| compare(source_size, lossy.size)),
        links: DownloadLinks {
            source: result.source.url.clone(),
            lossless: result.compressed.url.clone(),
            lossy: result.lossy.as_ref().map(|lossy| lossy.url.clone()),
        },
    };

    log::debug!("Rendered summary: {}", summary.status_text().replace('\n', " | "));
    summary
}

/// Parse a 200 response body into a result
pub fn parse_response(body: &str) -> Result<UploadResult> {
    UploadResponse::from_json(body)?.into_result()
}
