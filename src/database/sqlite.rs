use crate::database::PageRepository;
use crate::domain::Page;
use crate::features::pages::model::DbPage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PageRepository for SqliteRepository {
    async fn get_all_pages(&self) -> Result<Vec<Page>> {
        // TIMESTAMP columns may hold any storage class, the export keeps their text form
        let db_pages = sqlx::query_as::<_, DbPage>(
            r#"
            SELECT title, url, language, CAST(last_updated AS TEXT) AS last_updated, content
            FROM pages
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to read pages")?;

        // translate to pure Page model
        let mut pages = Vec::with_capacity(db_pages.len());
        for db_page in db_pages {
            let page: Page = db_page.try_into()?;
            pages.push(page);
        }

        Ok(pages)
    }
}
