//! Discussion-thread data model: sections of comment entries.

use crate::settings;

/// One discussion entry, classified once when the page is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Author/date line, as plain text.
    Heading(String),
    /// Comment body markup, converted to text at render time.
    Body(String),
}

impl Entry {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(text.into())
    }

    pub fn body(markup: impl Into<String>) -> Self {
        Self::Body(markup.into())
    }
}

/// An ordered group of comment entries, e.g. "Pinned Comments".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub title: Option<String>,
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn new(title: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            title: Some(title.into()),
            entries,
        }
    }

    /// True for the "Pinned Comments" section.
    pub fn is_pinned(&self) -> bool {
        self.title.as_deref() == Some(settings::PINNED_SECTION_TITLE)
    }
}

/// Which sections to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionFilter {
    #[default]
    All,
    LatestOnly,
    PinnedOnly,
}

/// Informational outcome that replaces regular output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The page has no comment sections.
    NoComments,
    /// Pinned comments were requested but the page has none.
    NoPinnedComments,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoComments => settings::NOTICE_NO_COMMENTS,
            Self::NoPinnedComments => settings::NOTICE_NO_PINNED_COMMENTS,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Apply `filter` to `sections`, or explain why nothing can be shown.
///
/// `LatestOnly` drops a leading pinned section when another section follows.
/// `PinnedOnly` keeps just the leading pinned section.
pub fn select_sections(
    sections: &[Section],
    filter: SectionFilter,
) -> Result<Vec<&Section>, Notice> {
    let Some(first) = sections.first() else {
        return Err(Notice::NoComments);
    };
    let has_pinned = first.is_pinned();

    match filter {
        SectionFilter::All => Ok(sections.iter().collect()),
        SectionFilter::LatestOnly if has_pinned && sections.len() > 1 => {
            Ok(sections[1..].iter().collect())
        }
        SectionFilter::LatestOnly => Ok(sections.iter().collect()),
        SectionFilter::PinnedOnly if has_pinned => Ok(vec![first]),
        SectionFilter::PinnedOnly => Err(Notice::NoPinnedComments),
    }
}
