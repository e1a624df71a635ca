pub mod extract;
pub mod kind;
pub mod normalize;

pub use extract::{DocumentTextExtractor, TextExtractor};
pub use kind::DocumentKind;
pub use normalize::normalize_text;
