use super::models::ArtistSummary;

/// Artists whose name contains `query`, ignoring ASCII case, in input order.
///
/// An empty query matches everything.
pub fn search_by_name<'a, I>(artists: I, query: &str) -> Vec<&'a ArtistSummary>
where
    I: IntoIterator<Item = &'a ArtistSummary>,
{
    if query.is_empty() {
        return artists.into_iter().collect();
    }

    let needle = query.to_ascii_lowercase();
    artists
        .into_iter()
        .filter(|artist| artist.name.to_ascii_lowercase().contains(&needle))
        .collect()
}
