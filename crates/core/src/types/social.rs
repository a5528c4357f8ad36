//! Social media profile links.

use serde::Serialize;

/// Links shown in the storefront footer. Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub youtube: String,
    pub linkedin: String,
    pub pinterest: String,
}

impl SocialLinks {
    /// `(label, value)` pairs in display order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("facebook", &self.facebook),
            ("instagram", &self.instagram),
            ("twitter", &self.twitter),
            ("youtube", &self.youtube),
            ("linkedin", &self.linkedin),
            ("pinterest", &self.pinterest),
        ]
    }
}
