/// One row of the `pages` table, independent of where it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub url: String,
    pub language: String,
    // kept textual ("YYYY-MM-DD HH:MM:SS"), the seed renderer splits it itself
    pub last_updated: String,
    pub content: String,
}
