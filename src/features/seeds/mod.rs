use crate::domain::Page;
use anyhow::Result;

pub mod escape;
pub mod template;
pub mod timestamp;

pub use template::SeedTemplate;

/// A rendered seed script and how many pages went into it.
#[derive(Debug, Clone)]
pub struct SeedScript {
    pub content: String,
    pub page_count: usize,
}

/// Renders one insert block per page, in order, followed by the fixed user block.
pub fn generate_seeds(pages: &[Page], template: &SeedTemplate) -> Result<SeedScript> {
    let page_count = pages.len();
    let mut content = template.render_header(page_count);

    for (index, page) in pages.iter().enumerate() {
        content.push_str(&template.render_page(index + 1, page)?);
    }

    content.push_str(&template.render_footer(page_count));

    Ok(SeedScript {
        content,
        page_count,
    })
}
