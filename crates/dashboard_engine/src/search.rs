use models::{Language, SearchResults};

/// Global search. Matching was never wired up for the demo data set, so
/// every bucket comes back empty; the HTTP route and the client wrapper
/// keep the full plumbing in place for a later data source.
pub fn search(_query: &str, _language: Language) -> SearchResults {
    SearchResults::default()
}
