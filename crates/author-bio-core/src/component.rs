//! The `Bio` component.

use tracing::debug;

use crate::author::AuthorInfo;
use crate::error::BioResult;
use crate::fragment::{BioFragment, Paragraph};

/// Build the bio fragment for an author.
///
/// `None` is treated as a record with every field unset. Without a
/// non-empty name the container is rendered empty, even when a biography
/// is present.
pub fn bio(author: Option<&AuthorInfo>) -> BioFragment {
    let empty = AuthorInfo::default();
    let author = author.unwrap_or(&empty);

    let has_name = author.has_name();
    debug!(
        has_name,
        bio_len = author.bio.as_deref().map_or(0, str::len),
        "Building bio fragment"
    );

    if !has_name {
        return BioFragment::empty();
    }

    BioFragment::with_paragraph(Paragraph::new(
        author.name.as_deref().unwrap_or_default(),
        author.bio.as_deref().unwrap_or_default(),
    ))
}

/// Build the fragment for `author` and serialize it to HTML.
pub fn render_html(author: Option<&AuthorInfo>) -> BioResult<String> {
    bio(author).to_html()
}
