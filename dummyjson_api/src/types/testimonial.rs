use serde::{Deserialize, Serialize};

/// A customer quote shown on the storefront.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub text: String,
    /// Attribution name, e.g. "Sarah D.".
    pub source: String,
}
