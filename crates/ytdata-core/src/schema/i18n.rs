use crate::field::Field;

schema! {
    /// An application language supported by the YouTube website.
    pub struct I18nLanguage {
        kind: String,
        etag: String,
        id: String,
        snippet: I18nLanguageSnippet,
    }

    pub struct I18nLanguageSnippet {
        /// BCP-47 code, usable as an `hl` parameter.
        hl: String,
        name: String,
    }

    /// A content region supported by the YouTube website.
    pub struct I18nRegion {
        kind: String,
        etag: String,
        id: String,
        snippet: I18nRegionSnippet,
    }

    pub struct I18nRegionSnippet {
        /// ISO 3166-1 alpha-2 code, usable as a `regionCode` parameter.
        gl: String,
        name: String,
    }
}
