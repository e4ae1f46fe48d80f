/// Turns a heading anchor into a link target
pub trait LinkResolver {
    fn resolve(&self, anchor: &str) -> String;
}

impl<F> LinkResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, anchor: &str) -> String {
        self(anchor)
    }
}

/// Resolves anchors against one page's URL.
///
/// When the page is the one the request is for, links collapse to the bare
/// `#anchor` fragment.
#[derive(Debug, Clone)]
pub struct PageLinkResolver {
    page_url: String,
    request_path: String,
}

impl PageLinkResolver {
    pub fn new(page_url: impl Into<String>, request_path: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            request_path: request_path.into(),
        }
    }
}

impl LinkResolver for PageLinkResolver {
    fn resolve(&self, anchor: &str) -> String {
        if url_path(&self.page_url) == self.request_path {
            format!("#{}", anchor)
        } else {
            format!("{}#{}", self.page_url, anchor)
        }
    }
}

/// The path component of a URL, without scheme, authority, query or fragment
pub fn url_path(url: &str) -> &str {
    let rest = match url.find("://") {
        Some(pos) => {
            let after_scheme = &url[pos + 3..];
            match after_scheme.find('/') {
                Some(slash) => &after_scheme[slash..],
                None => "",
            }
        }
        None => url,
    };

    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

/// Build the URL of a wiki page below `base_url`, encoding each path segment
pub fn page_url(base_url: &str, page: &str) -> String {
    let encoded = page
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    let base = base_url.trim_end_matches('/');
    if base.is_empty() {
        format!("/{}", encoded)
    } else {
        format!("{}/{}", base, encoded)
    }
}
