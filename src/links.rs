use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Anchor,
    External,
    Mail,
    Asset,
}

impl LinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anchor => "anchor",
            Self::External => "external",
            Self::Mail => "mail",
            Self::Asset => "asset",
        }
    }
}

pub fn classify(href: &str) -> LinkKind {
    let href = href.trim();
    if href.starts_with('#') {
        return LinkKind::Anchor;
    }

    match Url::parse(href) {
        Ok(url) if url.scheme() == "mailto" => LinkKind::Mail,
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => LinkKind::External,
        // Relative paths fail to parse without a base; other schemes stay in
        // the current tab as well.
        Ok(_) | Err(_) => LinkKind::Asset,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkAttrs {
    pub href: &'static str,
    pub kind: LinkKind,
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
}

impl LinkAttrs {
    pub fn new(href: &'static str) -> Self {
        let kind = classify(href);
        let (target, rel) = match kind {
            LinkKind::External => (Some("_blank"), Some("noopener noreferrer")),
            LinkKind::Anchor | LinkKind::Mail | LinkKind::Asset => (None, None),
        };

        Self {
            href,
            kind,
            target,
            rel,
        }
    }

    pub fn opens_new_tab(&self) -> bool {
        self.target.is_some()
    }
}
