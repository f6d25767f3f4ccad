use fnv::FnvHashSet;

/// What a media source fundamentally is; drives how its surface gets
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// One entry of the gallery catalog. Immutable; identity is `id`.
#[derive(Debug, Clone)]
pub struct MediaDescriptor {
    pub id: String,
    pub kind: MediaKind,
    pub source: String,
    pub title: String,
    pub external_link: Option<String>,
}

impl MediaDescriptor {
    pub fn image(id: &str, source: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: MediaKind::Image,
            source: source.to_string(),
            title: title.to_string(),
            external_link: None,
        }
    }

    pub fn video(id: &str, source: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: MediaKind::Video,
            source: source.to_string(),
            title: title.to_string(),
            external_link: None,
        }
    }

    pub fn with_link(mut self, url: &str) -> Self {
        self.external_link = Some(url.to_string());
        self
    }
}

/// Reject catalogs that would break item identity.
pub fn validate_catalog(catalog: &[MediaDescriptor]) -> anyhow::Result<()> {
    let mut seen = FnvHashSet::default();
    for d in catalog {
        if d.id.is_empty() {
            anyhow::bail!("catalog entry {:?} has an empty id", d.title);
        }
        if !seen.insert(d.id.as_str()) {
            anyhow::bail!("duplicate media id: {}", d.id);
        }
    }
    Ok(())
}
