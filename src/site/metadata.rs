//! Page metadata shared by the client `<head>` and the crawler documents
//! the server hands out.

use serde::Serialize;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://codeclean.vercel.app/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Guide,
}

impl Page {
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub const ALL: [Page; 2] = [Page::Home, Page::Guide];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Guide => "/guide",
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn document_title(self) -> &'static str {
        match self {
            Self::Home => SITE.title,
            Self::Guide => "Guide - Clean Code Guide",
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Debug)]
pub struct OpenGraphImage {
    pub path: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

#[derive(Debug)]
pub struct OpenGraph {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub kind: &'static str,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub locale: &'static str,
    pub site_name: &'static str,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub title: &'static str,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub description: &'static str,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub image: OpenGraphImage,
}

#[derive(Debug)]
pub struct Robots {
    pub index: bool,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub follow: bool,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub max_video_preview: i32,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub max_image_preview: &'static str,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub max_snippet: i32,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl Robots {
    fn basic(&self) -> String {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        format!("{index}, {follow}")
    }

    fn googlebot(&self) -> String {
        format!(
            "{}, max-video-preview:{}, max-image-preview:{}, max-snippet:{}",
            self.basic(),
            self.max_video_preview,
            self.max_image_preview,
            self.max_snippet
        )
    }
}

#[derive(Debug)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub keywords: &'static [&'static str],
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub author: &'static str,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub creator: &'static str,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub publisher: &'static str,
    pub icon: &'static str,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub manifest: &'static str,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub theme_color: &'static str,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub background_color: &'static str,
    pub open_graph: OpenGraph,
    pub robots: Robots,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub viewport: &'static str,
}

pub static SITE: SiteMetadata = SiteMetadata {
    title: "Clean Code Guide",
    description: "A guide to writing clean, readable, and maintainable code. Learn best practices, principles, and tips for better coding.",
    keywords: &[
        "clean code",
        "coding best practices",
        "software development",
        "code readability",
        "refactoring",
        "design principles",
        "DRY",
        "SOLID",
        "KISS",
        "YAGNI",
        "maintainable code",
    ],
    author: "Shaikh Rumman Fardeen",
    creator: "Shaikh Rumman Fardeen",
    publisher: "Clean Code Guide",
    icon: "/favicon.ico",
    manifest: "/site.webmanifest",
    theme_color: "#c381b5",
    background_color: "#ffffff",
    open_graph: OpenGraph {
        kind: "website",
        locale: "en_US",
        site_name: "Clean Code Guide",
        title: "Clean Code Guide - Write Better, Maintainable Code",
        description: "Master clean coding principles like DRY, SOLID, KISS, and YAGNI. Improve code readability and maintainability.",
        image: OpenGraphImage {
            path: "/og-image.png",
            width: 1200,
            height: 630,
            alt: "Clean Code Guide - Best Practices for Developers",
        },
    },
    robots: Robots {
        index: true,
        follow: true,
        max_video_preview: -1,
        max_image_preview: "large",
        max_snippet: -1,
    },
    viewport: "width=device-width, initial-scale=1, maximum-scale=1",
};

/// Where a head tag takes its key from.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKey {
    Name,
    Property,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl TagKey {
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadTag {
    Meta {
        key: TagKey,
        name: &'static str,
        content: String,
    },
    Link {
        rel: &'static str,
        href: String,
    },
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl HeadTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        Self::Meta {
            key: TagKey::Name,
            name,
            content: content.into(),
        }
    }

    fn property(name: &'static str, content: impl Into<String>) -> Self {
        Self::Meta {
            key: TagKey::Property,
            name,
            content: content.into(),
        }
    }

    fn link(rel: &'static str, href: impl Into<String>) -> Self {
        Self::Link {
            rel,
            href: href.into(),
        }
    }
}

impl SiteMetadata {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn head_tags(&self, base: &Url, page: Page) -> Vec<HeadTag> {
        let page_url = absolute_url(base, page.path());
        let image = &self.open_graph.image;

        vec![
            HeadTag::name("description", self.description),
            HeadTag::name("keywords", self.keywords.join(", ")),
            HeadTag::name("author", self.author),
            HeadTag::name("creator", self.creator),
            HeadTag::name("publisher", self.publisher),
            HeadTag::name("viewport", self.viewport),
            HeadTag::name("robots", self.robots.basic()),
            HeadTag::name("googlebot", self.robots.googlebot()),
            HeadTag::property("og:type", self.open_graph.kind),
            HeadTag::property("og:locale", self.open_graph.locale),
            HeadTag::property("og:url", page_url.clone()),
            HeadTag::property("og:site_name", self.open_graph.site_name),
            HeadTag::property("og:title", self.open_graph.title),
            HeadTag::property("og:description", self.open_graph.description),
            HeadTag::property("og:image", absolute_url(base, image.path)),
            HeadTag::property("og:image:width", image.width.to_string()),
            HeadTag::property("og:image:height", image.height.to_string()),
            HeadTag::property("og:image:alt", image.alt),
            HeadTag::link("canonical", page_url),
            HeadTag::link("icon", self.icon),
            HeadTag::link("shortcut icon", self.icon),
            HeadTag::link("manifest", self.manifest),
        ]
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn robots_txt(&self, base: &Url) -> String {
        let rule = if self.robots.index { "Allow" } else { "Disallow" };
        format!(
            "User-agent: *\n{rule}: /\n\nSitemap: {}\n",
            absolute_url(base, "/sitemap.xml")
        )
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn sitemap_xml(&self, base: &Url) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );

        for page in Page::ALL {
            xml.push_str(&format!(
                "  <url><loc>{}</loc></url>\n",
                absolute_url(base, page.path())
            ));
        }

        xml.push_str("</urlset>\n");
        xml
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn web_manifest(&self) -> serde_json::Value {
        let manifest = WebManifest {
            name: self.title,
            short_name: self.open_graph.site_name,
            description: self.description,
            start_url: Page::Home.path(),
            display: "standalone",
            theme_color: self.theme_color,
            background_color: self.background_color,
            icons: vec![ManifestIcon {
                src: self.icon,
                sizes: "any",
                kind: "image/x-icon",
            }],
        };

        serde_json::to_value(manifest).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
#[derive(Serialize)]
struct ManifestIcon {
    src: &'static str,
    sizes: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
#[derive(Serialize)]
struct WebManifest {
    name: &'static str,
    short_name: &'static str,
    description: &'static str,
    start_url: &'static str,
    display: &'static str,
    theme_color: &'static str,
    background_color: &'static str,
    icons: Vec<ManifestIcon>,
}

pub fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

/// Parses a site base URL, accepting only http and https.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub fn parse_base_url(raw: &str) -> Option<Url> {
    let parsed = Url::parse(raw.trim()).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

pub fn absolute_url(base: &Url, path: &str) -> String {
    base.join(path)
        .map(|value| value.to_string())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta_content<'a>(tags: &'a [HeadTag], wanted: &str) -> Option<&'a str> {
        tags.iter().find_map(|tag| match tag {
            HeadTag::Meta { name, content, .. } if *name == wanted => Some(content.as_str()),
            _ => None,
        })
    }

    #[test]
    fn head_tags_use_absolute_urls() {
        let base = default_base_url();
        let tags = SITE.head_tags(&base, Page::Guide);

        assert_eq!(
            meta_content(&tags, "og:url"),
            Some("https://codeclean.vercel.app/guide")
        );
        assert_eq!(
            meta_content(&tags, "og:image"),
            Some("https://codeclean.vercel.app/og-image.png")
        );
        assert!(tags.contains(&HeadTag::Link {
            rel: "canonical",
            href: "https://codeclean.vercel.app/guide".to_string(),
        }));
    }

    #[test]
    fn robot_directives_render() {
        let tags = SITE.head_tags(&default_base_url(), Page::Home);

        assert_eq!(meta_content(&tags, "robots"), Some("index, follow"));
        assert_eq!(
            meta_content(&tags, "googlebot"),
            Some("index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1")
        );
        assert!(meta_content(&tags, "keywords")
            .is_some_and(|value| value.starts_with("clean code, coding best practices")));
    }

    #[test]
    fn sitemap_lists_both_pages() {
        let base = parse_base_url("http://localhost:8080").expect("valid base");
        let xml = SITE.sitemap_xml(&base);

        assert!(xml.contains("<loc>http://localhost:8080/</loc>"));
        assert!(xml.contains("<loc>http://localhost:8080/guide</loc>"));
    }

    #[test]
    fn robots_txt_points_at_sitemap() {
        let text = SITE.robots_txt(&default_base_url());
        assert!(text.contains("Allow: /"));
        assert!(text.ends_with("Sitemap: https://codeclean.vercel.app/sitemap.xml\n"));
    }

    #[test]
    fn manifest_carries_name_and_icon() {
        let manifest = SITE.web_manifest();
        assert_eq!(manifest["name"], "Clean Code Guide");
        assert_eq!(manifest["icons"][0]["type"], "image/x-icon");
        assert_eq!(manifest["start_url"], "/");
    }

    #[test]
    fn non_http_base_is_rejected() {
        assert!(parse_base_url("ftp://example.com").is_none());
        assert!(parse_base_url("not a url").is_none());
        assert!(parse_base_url(" https://example.com/ ").is_some());
    }
}
