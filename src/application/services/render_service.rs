//! Markdown rendering for mirrored documents.
//!
//! Rendering happens in three stages: source rewriting (public origin and
//! attachment references), markdown conversion with comrak, and heading
//! anchor post-processing.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use comrak::{Options, markdown_to_html};
use regex::{Captures, Regex};
use tracing::warn;

use super::ContentService;

/// Maximum excerpt length in characters, before the ellipsis.
pub const EXCERPT_LENGTH: usize = 300;

static ATTACHMENT_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"/api/attachments\.redirect\?id=([^"\s)]+)"#)
        .expect("attachment regex is valid")
});

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<h([1-6])[^>]*>([^<]+)</h([1-6])>").expect("heading regex is valid")
});

static SLUG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex is valid"));

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\(.*?\)").expect("image regex is valid"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(.*?\)").expect("link regex is valid"));

static MARKUP_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#>*_`~-]").expect("markup regex is valid"));

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("blank line regex is valid"));

/// Converts upstream markdown into page HTML.
pub struct RenderService {
    content: Arc<ContentService>,
    public_url: Option<String>,
    options: Options<'static>,
}

impl RenderService {
    /// Creates a renderer.
    ///
    /// `public_url` is the upstream web origin; links pointing at it are
    /// made site-relative and edit links are built against it.
    pub fn new(content: Arc<ContentService>, public_url: Option<String>) -> Self {
        let public_url = public_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Self {
            content,
            public_url,
            options: default_options(),
        }
    }

    /// Renders markdown to HTML with anchored headings.
    ///
    /// Attachment references are resolved through the cached content
    /// layer; a failed lookup leaves the reference untouched.
    pub async fn render(&self, markdown: &str) -> String {
        if markdown.is_empty() {
            return String::new();
        }

        let source = match &self.public_url {
            Some(origin) => markdown.replace(origin.as_str(), ""),
            None => markdown.to_string(),
        };
        let source = self.resolve_attachments(&source).await;

        let html = markdown_to_html(&source, &self.options);
        add_heading_anchors(&html).trim().to_string()
    }

    /// Builds the upstream edit link for an edit path.
    pub fn edit_url(&self, edit_path: &str) -> String {
        match &self.public_url {
            Some(origin) => format!("{}{}", origin, edit_path),
            None => edit_path.to_string(),
        }
    }

    async fn resolve_attachments(&self, source: &str) -> String {
        let mut resolved: HashMap<String, String> = HashMap::new();

        for caps in ATTACHMENT_REF.captures_iter(source) {
            let id = &caps[1];
            if resolved.contains_key(id) {
                continue;
            }

            match self.content.attachment_url(id).await {
                Ok(url) => {
                    resolved.insert(id.to_string(), url);
                }
                Err(e) => {
                    warn!(attachment_id = %id, error = %e, "Failed to resolve attachment");
                }
            }
        }

        if resolved.is_empty() {
            return source.to_string();
        }

        ATTACHMENT_REF
            .replace_all(source, |caps: &Captures| {
                resolved
                    .get(&caps[1])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

fn default_options() -> Options<'static> {
    let mut options = Options::default();

    let ext = &mut options.extension;
    ext.strikethrough = true;
    ext.table = true;
    ext.autolink = true;
    ext.tasklist = true;

    options.render.r#unsafe = true;

    options
}

/// Turns heading text into an anchor id.
///
/// ```
/// use outline_mirror::application::services::render_service::slugify;
///
/// assert_eq!(slugify("Getting Started!"), "getting-started");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    SLUG_SEPARATOR
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Adds an `id` and a trailing permalink to every plain-text heading.
pub fn add_heading_anchors(html: &str) -> String {
    HEADING
        .replace_all(html, |caps: &Captures| {
            let level = &caps[1];
            if level != &caps[3] {
                return caps[0].to_string();
            }

            let text = &caps[2];
            let anchor = slugify(text);
            format!(
                r##"<h{level} id="{anchor}">{text} <a href="#{anchor}" aria-label="Permalink to {text}">#</a></h{level}>"##
            )
        })
        .into_owned()
}

/// Produces a plain-text summary of markdown.
pub fn excerpt(markdown: &str) -> String {
    let text = IMAGE.replace_all(markdown, "");
    let text = LINK.replace_all(&text, "$1");
    let text = MARKUP_CHARS.replace_all(&text, "");
    let text = BLANK_LINES.replace_all(&text, "\n");
    let text = text.trim();

    if text.chars().count() > EXCERPT_LENGTH {
        let truncated: String = text.chars().take(EXCERPT_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
