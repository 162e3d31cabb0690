//! Gzip for job listings.

use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::{And, DefaultPredicate, Predicate, SizeAbove};

/// Bodies at or below this size go out uncompressed.
pub const MIN_COMPRESSED_BYTES: u16 = 1024;

/// Gzip responses larger than [`MIN_COMPRESSED_BYTES`] when the client
/// accepts it. In practice that is `GET /job` once the table has a few
/// postings; error and health bodies stay plain.
pub fn build_compression_layer() -> CompressionLayer<And<DefaultPredicate, SizeAbove>> {
    CompressionLayer::new()
        .gzip(true)
        .compress_when(DefaultPredicate::new().and(SizeAbove::new(MIN_COMPRESSED_BYTES)))
}
