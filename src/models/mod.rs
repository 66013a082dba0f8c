pub mod cleaned_sample;
pub mod post;
pub mod raw_sample;
pub mod screenshot;
pub mod segment;

pub use cleaned_sample::CleanedSample;
pub use post::Post;
pub use raw_sample::RawSample;
pub use screenshot::Screenshot;
pub use segment::{PostSegment, SegmentPoint};
