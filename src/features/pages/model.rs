use crate::domain::Page;
use anyhow::{Result, anyhow};
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

// sqlite hands back NULL text as an empty string unless the field is an Option
#[derive(sqlx::FromRow, Debug, Eq, PartialEq, Clone, Display)]
#[display("{}", url.as_deref().unwrap_or("<no url>"))]
pub struct DbPage {
    pub title: Option<String>,
    pub url: Option<String>,
    pub language: Option<String>,
    pub last_updated: Option<String>,
    pub content: Option<String>,
}

// field order is the key order of the exported json objects
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonPage {
    pub title: String,
    pub url: String,
    pub language: String,
    pub last_updated: String,
    pub content: String,
}

impl TryFrom<DbPage> for Page {
    type Error = anyhow::Error;

    fn try_from(db_page: DbPage) -> Result<Self> {
        let label = db_page.to_string();
        let required = |value: Option<String>, column: &str| {
            value.ok_or_else(|| anyhow!("Page {} has a NULL {} column", label, column))
        };

        Ok(Page {
            title: required(db_page.title, "title")?,
            url: required(db_page.url, "url")?,
            language: required(db_page.language, "language")?,
            last_updated: required(db_page.last_updated, "last_updated")?,
            content: required(db_page.content, "content")?,
        })
    }
}

impl From<&Page> for JsonPage {
    fn from(page: &Page) -> Self {
        JsonPage {
            title: page.title.to_owned(),
            url: page.url.to_owned(),
            language: page.language.to_owned(),
            last_updated: page.last_updated.to_owned(),
            content: page.content.to_owned(),
        }
    }
}

impl From<JsonPage> for Page {
    fn from(json_page: JsonPage) -> Self {
        Page {
            title: json_page.title,
            url: json_page.url,
            language: json_page.language,
            last_updated: json_page.last_updated,
            content: json_page.content,
        }
    }
}
