//! Author bio component.
//!
//! Turns an optional [`AuthorInfo`] record into a [`BioFragment`]: a
//! `div.bio` container that holds a single paragraph with the author's
//! name in bold followed by their biography, or nothing at all when no
//! name is known.
//!
//! ## Usage
//!
//! ```rust
//! use author_bio_core::{bio, AuthorInfo};
//!
//! let author = AuthorInfo::new("Ada Lovelace", "Mathematician.");
//! let fragment = bio(Some(&author));
//!
//! assert_eq!(
//!     fragment.to_html().unwrap(),
//!     r#"<div class="bio"><p><strong>Ada Lovelace</strong>, Mathematician.</p></div>"#
//! );
//!
//! // A missing author renders an empty container.
//! assert_eq!(bio(None).to_html().unwrap(), r#"<div class="bio"></div>"#);
//! ```

mod author;
mod component;
mod error;
mod fragment;

pub use author::AuthorInfo;
pub use component::{bio, render_html};
pub use error::{BioError, BioResult};
pub use fragment::{BioFragment, Paragraph, CONTAINER_CLASS};
