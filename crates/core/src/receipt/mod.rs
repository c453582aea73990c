//! Extracted receipt data and the transient receipt artifact.
//!
//! - `types` - Structured data pulled out of a receipt image
//! - `error` - Extraction capability errors
//! - `extractor` - The extraction capability trait and client cache
//! - `artifact` - Scoped ownership of the on-disk receipt image

pub mod artifact;
pub mod error;
pub mod extractor;
pub mod types;

pub use artifact::ReceiptArtifact;
pub use error::ExtractionError;
pub use extractor::{ExtractorCache, ReceiptExtractor, validate_image_paths};
pub use types::{ReceiptData, ReceiptItem};
