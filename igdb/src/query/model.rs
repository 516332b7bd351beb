use serde::Deserialize;

/// Structured narrowing for generated queries. All fields optional; absent
/// fields simply contribute nothing to the where clause.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameFilters {
    pub platform_ids: Option<Vec<u64>>,
    pub genre_ids: Option<Vec<u64>>,
    pub limit: Option<u32>,
}

/// Named browse lists the proxy knows how to build queries for.
///
/// Clients send these as lowercase strings; anything unrecognized lands on
/// `Unknown`, which still produces a valid query (rating sort, no window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    Popular,
    Upcoming,
    Top,
    Recent,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One `sort <field> <dir>;` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortClause {
    pub field: String,
    pub direction: SortDirection,
}

impl SortClause {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn render(&self) -> String {
        format!("sort {} {};", self.field, self.direction.keyword())
    }
}

/// Knobs for the query builder that are deployment configuration rather than
/// per-request input.
#[derive(Debug, Clone)]
pub struct QueryPolicy {
    /// Applied when the request carries no limit, or a limit of zero.
    pub default_limit: u32,
    /// Sort appended to search queries. `None` leaves ordering to IGDB's
    /// relevance ranking, which is what you want for text search.
    pub search_sort: Option<SortClause>,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            default_limit: 50,
            search_sort: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_parse_from_camel_case() {
        let filters: GameFilters =
            serde_json::from_str(r#"{"platformIds":[6,48],"genreIds":[12],"limit":25}"#)
                .expect("filters should parse");
        assert_eq!(filters.platform_ids, Some(vec![6, 48]));
        assert_eq!(filters.genre_ids, Some(vec![12]));
        assert_eq!(filters.limit, Some(25));
    }

    #[test]
    fn test_list_type_parses_lowercase() {
        let parsed: ListType = serde_json::from_str(r#""upcoming""#).expect("should parse");
        assert_eq!(parsed, ListType::Upcoming);
    }

    #[test]
    fn test_unrecognized_list_type_falls_back_to_unknown() {
        let parsed: ListType = serde_json::from_str(r#""trending""#).expect("should parse");
        assert_eq!(parsed, ListType::Unknown);
    }

    #[test]
    fn test_sort_clause_renders_with_terminator() {
        let clause = SortClause::new("total_rating", SortDirection::Desc);
        assert_eq!(clause.render(), "sort total_rating desc;");
    }
}
