//! Sitemap rendering
//!
//! Builds the sitemaps.org XML document from static pages plus one entry per
//! dog detail page.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

/// One `<url>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    /// Site-relative path starting with `/`
    pub path: String,
    pub changefreq: ChangeFreq,
    pub priority: &'static str,
}

impl SitemapEntry {
    pub fn new(path: impl Into<String>, changefreq: ChangeFreq, priority: &'static str) -> Self {
        Self {
            path: path.into(),
            changefreq,
            priority,
        }
    }

    pub fn dog(id: u32) -> Self {
        Self::new(format!("/dog/{}", id), ChangeFreq::Weekly, "0.7")
    }
}

/// Pages that exist regardless of data
pub fn static_pages() -> Vec<SitemapEntry> {
    vec![
        SitemapEntry::new("/", ChangeFreq::Daily, "1.0"),
        SitemapEntry::new("/about", ChangeFreq::Monthly, "0.8"),
    ]
}

/// Static pages followed by dog pages
pub fn sitemap_entries(dog_ids: &[u32]) -> Vec<SitemapEntry> {
    let mut entries = static_pages();
    entries.extend(dog_ids.iter().copied().map(SitemapEntry::dog));
    entries
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the XML document; `base_url` must not end with `/`
pub fn render_sitemap(base_url: &str, entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        // Writing to a String cannot fail
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            escape_xml(&format!("{}{}", base_url, entry.path)),
            entry.changefreq.as_str(),
            entry.priority,
        );
    }
    xml.push_str("</urlset>");
    xml
}
