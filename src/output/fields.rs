//! Article field selection

/// Fields of a Help Center article, in export order
pub const ARTICLE_FIELDS: &[&str] = &[
    "author_id",
    "body",
    "comments_disabled",
    "content_tag_ids",
    "created_at",
    "draft",
    "edited_at",
    "html_url",
    "id",
    "label_names",
    "locale",
    "outdated",
    "outdated_locales",
    "permission_group_id",
    "position",
    "promoted",
    "section_id",
    "source_locale",
    "title",
    "updated_at",
    "url",
    "user_segment_id",
    "vote_count",
    "vote_sum",
];

/// Which fields end up in the output
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldSelection {
    /// Every known article field
    #[default]
    All,
    /// Exactly these fields, in this order
    Include(Vec<String>),
    /// Every known field except these
    Exclude(Vec<String>),
}

impl FieldSelection {
    /// Build a selection from the include/exclude CLI lists
    ///
    /// Empty lists count as not given.
    pub fn from_lists(include: Option<Vec<String>>, exclude: Option<Vec<String>>) -> Self {
        match (include, exclude) {
            (Some(include), _) if !include.is_empty() => Self::Include(include),
            (_, Some(exclude)) if !exclude.is_empty() => Self::Exclude(exclude),
            _ => Self::All,
        }
    }

    /// Resolve to the ordered list of field names
    pub fn resolve(&self) -> Vec<String> {
        match self {
            FieldSelection::All => ARTICLE_FIELDS.iter().map(ToString::to_string).collect(),
            FieldSelection::Include(fields) => fields.clone(),
            FieldSelection::Exclude(excluded) => ARTICLE_FIELDS
                .iter()
                .filter(|f| !excluded.iter().any(|e| e.as_str() == **f))
                .map(ToString::to_string)
                .collect(),
        }
    }
}
