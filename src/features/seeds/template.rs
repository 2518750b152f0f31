use crate::config::DEFAULT_APP_MODULE;
use crate::domain::{Page, SeedUser};
use crate::features::seeds::escape::{comment_line, escape_heredoc, escape_string};
use crate::features::seeds::timestamp::split_last_updated;
use anyhow::{Context, Result};

const SIGIL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed parts of a `priv/repo/seeds.exs` script for an Ecto application.
#[derive(Debug, Clone)]
pub struct SeedTemplate {
    /// Elixir application module, e.g. `WhoknowsElixirMonolith`.
    pub app_module: String,
    pub user: SeedUser,
}

impl SeedTemplate {
    pub fn new(app_module: impl Into<String>) -> Self {
        Self {
            app_module: app_module.into(),
            user: SeedUser::admin(),
        }
    }

    pub fn render_header(&self, page_count: usize) -> String {
        let app = &self.app_module;
        format!(
            r#"# Script for populating the database. You can run it as:
#
#     mix run priv/repo/seeds.exs
#
# Inside the script, you can read and write to any of your
# repositories directly:
#
#     {app}.Repo.insert!(%{app}.SomeSchema{{}})
#
# We recommend using the bang functions (`insert!`, `update!`
# and so on) as they will fail if something goes wrong.

alias {app}.Repo
alias {app}.Page
alias {app}.User

# Clear existing data (optional - comment out if you want to keep existing data)
Repo.delete_all(Page)
Repo.delete_all(User)

# Seed Pages
IO.puts("Seeding {page_count} pages...")

"#
        )
    }

    /// Renders the insert block of one page; `index` counts from 1.
    pub fn render_page(&self, index: usize, page: &Page) -> Result<String> {
        let timestamp = split_last_updated(&page.last_updated)
            .with_context(|| format!("Page {} ({}) has a malformed last_updated", index, page.url))?;

        Ok(format!(
            r#"
# Page {index}: {comment}
%Page{{
  title: "{title}",
  url: "{url}",
  language: "{language}",
  last_updated: ~U[{date} {time}Z],
  content: """
{content}
"""
}} |> Repo.insert!()

"#,
            comment = comment_line(&page.title),
            title = escape_string(&page.title),
            url = escape_string(&page.url),
            language = escape_string(&page.language),
            date = timestamp.date,
            time = timestamp.time,
            content = escape_heredoc(&page.content),
        ))
    }

    pub fn render_footer(&self, page_count: usize) -> String {
        let user = &self.user;
        format!(
            r#"
IO.puts("✓ Pages seeded")

# Seed Users
IO.puts("Seeding users...")

# The password for this admin user will be: "{password_comment}"
# Pre-hashed with PBKDF2 (100,000 rounds)
password_hash = "{password_hash}"

%User{{
  email: "{email}",
  name: "{name}",
  password_hash: password_hash,
  confirmed_at: ~U[{confirmed_at}Z]
}} |> Repo.insert!()

IO.puts("✓ Users seeded")
IO.puts("\n=== Seed data loaded successfully ===")
IO.puts("Admin user: {email}")
IO.puts("Admin password: {password}")
IO.puts("Total pages: {page_count}")
IO.puts("=====================================\n")
"#,
            password_comment = comment_line(&user.initial_password),
            password_hash = escape_string(&user.password_hash),
            email = escape_string(&user.email),
            name = escape_string(&user.name),
            confirmed_at = user.confirmed_at.format(SIGIL_DATETIME_FORMAT),
            password = escape_string(&user.initial_password),
        )
    }
}

impl Default for SeedTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_APP_MODULE)
    }
}
