//! Render command implementation.
//!
//! Reads author records from flags, a file or stdin and writes the
//! rendered bio fragments, one per line.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use author_bio_core::{bio, AuthorInfo, BioFragment};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;

/// Output format for rendered fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unknown format: {}. Use 'html' or 'json'", s),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Arguments of `bio render`.
#[derive(Debug, Default)]
pub struct RenderArgs {
    pub name: Option<String>,
    pub bio: Option<String>,
    /// JSON file with one record or an array; `-` reads stdin.
    pub input: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

/// Render the requested authors and write the result.
pub fn execute(config: &Config, args: RenderArgs) -> Result<()> {
    let format = args.format.unwrap_or(config.default_format);
    let authors = collect_authors(&args)?;

    info!(count = authors.len(), %format, "Rendering bio fragments");

    let mut content = authors
        .iter()
        .map(|author| render(&bio(author.as_ref()), format))
        .collect::<Result<Vec<_>>>()?
        .join("\n");
    content.push('\n');

    match args.output {
        Some(path) => {
            let path = config.resolve_output(path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write output to: {}", path.display()))?;
            info!(path = %path.display(), "Output written");
        }
        None => print!("{}", content),
    }

    Ok(())
}

/// Build the list of records to render.
///
/// `None` stands for an omitted author: no input and no flags.
fn collect_authors(args: &RenderArgs) -> Result<Vec<Option<AuthorInfo>>> {
    let Some(input) = &args.input else {
        if args.name.is_none() && args.bio.is_none() {
            return Ok(vec![None]);
        }
        return Ok(vec![Some(apply_overrides(AuthorInfo::default(), args))]);
    };

    let document = read_input(input)?;
    let authors = AuthorInfo::from_json_many(&document)
        .with_context(|| format!("Failed to parse authors from {}", input.display()))?;

    Ok(authors
        .into_iter()
        .map(|author| Some(apply_overrides(author, args)))
        .collect())
}

fn apply_overrides(mut author: AuthorInfo, args: &RenderArgs) -> AuthorInfo {
    if let Some(name) = &args.name {
        author.name = Some(name.clone());
    }
    if let Some(bio) = &args.bio {
        author.bio = Some(bio.clone());
    }
    author
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .with_context(|| "Failed to read authors from stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))
}

fn render(fragment: &BioFragment, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Html => fragment.to_html(),
        OutputFormat::Json => fragment.to_json(),
    };
    rendered.with_context(|| format!("Failed to render {} output", format))
}
