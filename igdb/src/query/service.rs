use super::model::{GameFilters, ListType, QueryPolicy, SortClause, SortDirection};

/// Projection requested from IGDB when the caller doesn't supply a raw query.
pub const DEFAULT_FIELDS: &str = "name,cover.url,first_release_date,summary,screenshots.url,\
videos.video_id,total_rating,total_rating_count,platforms,genres";

/// 2020-01-01T00:00:00Z. Floor of the release window for popular lists.
const POPULAR_WINDOW_START: i64 = 1_577_836_800;

/// Builds IGDB query text from the structured request parameters.
///
/// A non-empty `search` takes priority over `list_type`; an empty search
/// string counts as absent. `now` is the Unix timestamp the caller computed
/// for this request, so every time-windowed condition in one query agrees.
pub fn build_query(
    search: Option<&str>,
    list_type: ListType,
    filters: Option<&GameFilters>,
    policy: &QueryPolicy,
    now: i64,
) -> String {
    match search.filter(|s| !s.is_empty()) {
        Some(text) => build_search_query(text, filters, policy),
        None => build_list_query(list_type, filters, policy, now),
    }
}

fn build_search_query(search: &str, filters: Option<&GameFilters>, policy: &QueryPolicy) -> String {
    let mut parts = Vec::new();

    parts.push(format!("search \"{}\";", search.replace('"', "\\\"")));
    parts.push(format!("fields {};", DEFAULT_FIELDS));
    parts.push(format!("where {};", where_conditions(filters).join(" & ")));
    if let Some(sort) = &policy.search_sort {
        parts.push(sort.render());
    }
    parts.push(format!("limit {};", effective_limit(filters, policy)));

    parts.join("\n")
}

fn build_list_query(
    list_type: ListType,
    filters: Option<&GameFilters>,
    policy: &QueryPolicy,
    now: i64,
) -> String {
    let mut conditions = where_conditions(filters);

    let sort = match list_type {
        ListType::Popular => {
            conditions.push(format!(
                "(first_release_date >= {} | first_release_date > {})",
                POPULAR_WINDOW_START, now
            ));
            conditions.push("total_rating_count > 0".to_string());
            SortClause::new("first_release_date", SortDirection::Desc)
        }
        ListType::Upcoming => {
            conditions.push(format!("first_release_date > {}", now));
            SortClause::new("first_release_date", SortDirection::Asc)
        }
        ListType::Top => {
            conditions.push("total_rating_count > 10".to_string());
            SortClause::new("total_rating", SortDirection::Desc)
        }
        ListType::Recent => {
            conditions.push(format!("first_release_date < {}", now));
            SortClause::new("first_release_date", SortDirection::Desc)
        }
        // Unrecognized list types still get a valid query, just without a
        // narrowing condition.
        ListType::Unknown => SortClause::new("first_release_date", SortDirection::Desc),
    };

    [
        format!("fields {};", DEFAULT_FIELDS),
        format!("where {};", conditions.join(" & ")),
        sort.render(),
        format!("limit {};", effective_limit(filters, policy)),
    ]
    .join("\n")
}

/// `cover != null` always applies; platform/genre constraints only when the
/// caller sent a non-empty ID list.
fn where_conditions(filters: Option<&GameFilters>) -> Vec<String> {
    let mut conditions = vec!["cover != null".to_string()];

    if let Some(filters) = filters {
        if let Some(ids) = filters.platform_ids.as_deref().filter(|ids| !ids.is_empty()) {
            conditions.push(format!("platforms = ({})", join_ids(ids)));
        }
        if let Some(ids) = filters.genre_ids.as_deref().filter(|ids| !ids.is_empty()) {
            conditions.push(format!("genres = ({})", join_ids(ids)));
        }
    }

    conditions
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

// A limit of zero falls back to the default, same as an absent one.
fn effective_limit(filters: Option<&GameFilters>, policy: &QueryPolicy) -> u32 {
    filters
        .and_then(|f| f.limit)
        .filter(|limit| *limit > 0)
        .unwrap_or(policy.default_limit)
}
