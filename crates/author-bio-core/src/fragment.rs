//! The rendered tree produced by the bio component.

use askama::Template;
use serde::Serialize;

use crate::error::BioResult;

/// Class name carried by the outer container.
pub const CONTAINER_CLASS: &str = "bio";

/// `<div class="bio">` with zero or one [`Paragraph`] inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Template)]
#[template(path = "bio.html")]
pub struct BioFragment {
    /// Class attribute of the container.
    pub class: &'static str,
    /// Paragraph shown when the author has a name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<Paragraph>,
}

/// `<p><strong>{name}</strong>, {bio}</p>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub name: String,
    /// Empty when the author has no biography.
    pub bio: String,
}

impl BioFragment {
    /// A container with no children.
    pub fn empty() -> Self {
        Self {
            class: CONTAINER_CLASS,
            paragraph: None,
        }
    }

    /// A container holding the given paragraph.
    pub fn with_paragraph(paragraph: Paragraph) -> Self {
        Self {
            class: CONTAINER_CLASS,
            paragraph: Some(paragraph),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paragraph.is_none()
    }

    /// Number of child elements of the container.
    pub fn child_count(&self) -> usize {
        usize::from(self.paragraph.is_some())
    }

    /// Text content of the fragment, without markup.
    pub fn text(&self) -> String {
        self.paragraph
            .as_ref()
            .map(Paragraph::text)
            .unwrap_or_default()
    }

    /// Serialize to HTML. Text content is escaped.
    pub fn to_html(&self) -> BioResult<String> {
        Ok(self.render()?)
    }

    /// Serialize the tree itself as JSON.
    pub fn to_json(&self) -> BioResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Paragraph {
    pub fn new(name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: bio.into(),
        }
    }

    /// `"{name}, {bio}"`
    pub fn text(&self) -> String {
        format!("{}, {}", self.name, self.bio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_container() {
        let fragment = BioFragment::empty();
        assert!(fragment.is_empty());
        assert_eq!(fragment.child_count(), 0);
        assert_eq!(fragment.text(), "");
        assert_eq!(fragment.to_html().unwrap(), r#"<div class="bio"></div>"#);
    }

    #[test]
    fn test_paragraph_markup() {
        let fragment = BioFragment::with_paragraph(Paragraph::new("Ada Lovelace", "Mathematician."));
        assert_eq!(fragment.child_count(), 1);
        assert_eq!(fragment.text(), "Ada Lovelace, Mathematician.");
        assert_eq!(
            fragment.to_html().unwrap(),
            r#"<div class="bio"><p><strong>Ada Lovelace</strong>, Mathematician.</p></div>"#
        );
    }

    #[test]
    fn test_empty_bio_keeps_separator() {
        let fragment = BioFragment::with_paragraph(Paragraph::new("Ada", ""));
        assert_eq!(fragment.text(), "Ada, ");
        assert_eq!(
            fragment.to_html().unwrap(),
            r#"<div class="bio"><p><strong>Ada</strong>, </p></div>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let fragment = BioFragment::with_paragraph(Paragraph::new("<b>Ada</b>", "Tom & Jerry"));
        let html = fragment.to_html().unwrap();
        assert!(html.contains("<strong>&lt;b&gt;Ada&lt;/b&gt;</strong>"));
        assert!(html.contains("Tom &amp; Jerry"));
        // Text content itself is untouched.
        assert_eq!(fragment.text(), "<b>Ada</b>, Tom & Jerry");
    }

    #[test]
    fn test_json_tree() {
        let empty = BioFragment::empty().to_json().unwrap();
        assert_eq!(empty, r#"{"class":"bio"}"#);

        let full = BioFragment::with_paragraph(Paragraph::new("Ada", "Count.")).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&full).unwrap();
        assert_eq!(value["paragraph"]["name"], "Ada");
        assert_eq!(value["paragraph"]["bio"], "Count.");
    }
}
