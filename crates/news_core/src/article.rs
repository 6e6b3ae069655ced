/// Author shown when the response carries no contributor tag.
pub const AUTHOR_FALLBACK: &str = "N/A";

/// One decoded news item. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    title: String,
    section: String,
    author: String,
    date: String,
    url: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        section: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            section: section.into(),
            author: author.into(),
            date: date.into(),
            url: url.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Publication date exactly as the API returned it.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
