use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct ShortLinkResponse {
    /// Absolute short link to the recipe
    #[oai(rename = "short-link")]
    pub short_link: String,
}
