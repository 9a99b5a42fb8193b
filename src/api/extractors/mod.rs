pub mod line_identity;

pub use line_identity::{LineIdentity, LineIdentityExtractor};
