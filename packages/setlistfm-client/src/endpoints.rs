//! setlist.fm endpoint table
//!
//! Endpoints come in two kinds. *Search* endpoints return a collection
//! filtered by query parameters; *resource* endpoints return one entity
//! addressed by an identifier embedded in the path at [`PK_PLACEHOLDER`].
//!
//! The tables and the per-endpoint client methods are generated from a
//! single declaration, so every name in [`SEARCH`] and [`RESOURCE`] is also
//! a method on [`SetlistfmClient`].

use serde_json::Value;

use crate::client::SetlistfmClient;
use crate::error::SetlistfmResult;

/// Path segment replaced by the resource identifier
pub const PK_PLACEHOLDER: &str = "{pk}";

/// The only search endpoint that may be called without filters
pub const COUNTRIES_TEMPLATE: &str = "search/countries";

/// Endpoint category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    /// Filtered collection, needs query parameters
    Search,
    /// Single entity, needs an identifier
    Resource,
}

/// Outcome of looking up an endpoint by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Search endpoint with its path template
    Search(&'static str),
    /// Resource endpoint with its path template
    Resource(&'static str),
    /// No endpoint has this name
    NotFound,
}

impl Resolution {
    /// Path template of the resolved endpoint
    pub fn template(&self) -> Option<&'static str> {
        match self {
            Resolution::Search(template) | Resolution::Resource(template) => Some(*template),
            Resolution::NotFound => None,
        }
    }

    /// Category of the resolved endpoint
    pub fn kind(&self) -> Option<EndpointKind> {
        match self {
            Resolution::Search(_) => Some(EndpointKind::Search),
            Resolution::Resource(_) => Some(EndpointKind::Resource),
            Resolution::NotFound => None,
        }
    }
}

macro_rules! endpoints {
    (
        search { $($search:ident => $search_path:literal,)* }
        resource { $($resource:ident => $resource_path:literal,)* }
    ) => {
        /// Search endpoints: name and path template
        pub const SEARCH: &[(&str, &str)] = &[$((stringify!($search), $search_path),)*];

        /// Resource endpoints: name and path template containing [`PK_PLACEHOLDER`]
        pub const RESOURCE: &[(&str, &str)] = &[$((stringify!($resource), $resource_path),)*];

        impl SetlistfmClient {
            $(
                #[doc = concat!("`GET ", $search_path, "` filtered by `params`")]
                pub async fn $search(&self, params: &[(&str, &str)]) -> SetlistfmResult<Value> {
                    self.resource($search_path, None, params).await
                }
            )*

            $(
                #[doc = concat!("`GET ", $resource_path, "` for the entity identified by `pk`")]
                pub async fn $resource(
                    &self,
                    pk: &str,
                    params: &[(&str, &str)],
                ) -> SetlistfmResult<Value> {
                    self.resource($resource_path, Some(pk), params).await
                }
            )*
        }
    };
}

endpoints! {
    search {
        artists => "search/artists",
        cities => "search/cities",
        countries => "search/countries",
        setlists => "search/setlists",
        venues => "search/venues",
    }
    resource {
        artist => "artist/{pk}",
        artist_setlists => "artist/{pk}/setlists",
        city => "city/{pk}",
        setlist => "setlist/{pk}",
        setlist_version => "setlist/version/{pk}",
        user => "user/{pk}",
        user_attended => "user/{pk}/attended",
        user_edited => "user/{pk}/edited",
        venue => "venue/{pk}",
        venue_setlists => "venue/{pk}/setlists",
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, template)| *template)
}

/// Look up an endpoint by name, search table first
pub fn resolve(name: &str) -> Resolution {
    if let Some(template) = lookup(SEARCH, name) {
        return Resolution::Search(template);
    }
    if let Some(template) = lookup(RESOURCE, name) {
        return Resolution::Resource(template);
    }
    Resolution::NotFound
}

/// Category of a path template, if it belongs to either table
pub fn kind_of(template: &str) -> Option<EndpointKind> {
    if SEARCH.iter().any(|(_, candidate)| *candidate == template) {
        Some(EndpointKind::Search)
    } else if RESOURCE.iter().any(|(_, candidate)| *candidate == template) {
        Some(EndpointKind::Resource)
    } else {
        None
    }
}

/// All endpoint names, search endpoints first, in table order
pub fn endpoint_names() -> impl Iterator<Item = &'static str> {
    SEARCH.iter().chain(RESOURCE.iter()).map(|(name, _)| *name)
}

/// Path segments of `template` with the identifier substituted
///
/// Without an identifier the placeholder is left as is; templates without
/// a placeholder ignore the identifier.
pub fn expand<'a>(template: &'a str, pk: Option<&'a str>) -> impl Iterator<Item = &'a str> {
    template.split('/').map(move |segment| match pk {
        Some(pk) if segment == PK_PLACEHOLDER => pk,
        _ => segment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_tables_are_exact() {
        assert_eq!(
            SEARCH,
            &[
                ("artists", "search/artists"),
                ("cities", "search/cities"),
                ("countries", "search/countries"),
                ("setlists", "search/setlists"),
                ("venues", "search/venues"),
            ]
        );
        assert_eq!(
            RESOURCE,
            &[
                ("artist", "artist/{pk}"),
                ("artist_setlists", "artist/{pk}/setlists"),
                ("city", "city/{pk}"),
                ("setlist", "setlist/{pk}"),
                ("setlist_version", "setlist/version/{pk}"),
                ("user", "user/{pk}"),
                ("user_attended", "user/{pk}/attended"),
                ("user_edited", "user/{pk}/edited"),
                ("venue", "venue/{pk}"),
                ("venue_setlists", "venue/{pk}/setlists"),
            ]
        );
        assert!(RESOURCE
            .iter()
            .all(|(_, template)| template.contains(PK_PLACEHOLDER)));
    }

    #[rstest]
    #[case("artists", Resolution::Search("search/artists"))]
    #[case("countries", Resolution::Search("search/countries"))]
    #[case("artist", Resolution::Resource("artist/{pk}"))]
    #[case("setlist_version", Resolution::Resource("setlist/version/{pk}"))]
    #[case("user_edited", Resolution::Resource("user/{pk}/edited"))]
    #[case("invalid_endpoint", Resolution::NotFound)]
    #[case("", Resolution::NotFound)]
    #[case("search/artists", Resolution::NotFound)]
    fn test_resolve(#[case] name: &str, #[case] expected: Resolution) {
        assert_eq!(resolve(name), expected);
    }

    #[test]
    fn test_resolution_accessors() {
        assert_eq!(
            Resolution::Search("search/venues").kind(),
            Some(EndpointKind::Search)
        );
        assert_eq!(
            Resolution::Resource("venue/{pk}").template(),
            Some("venue/{pk}")
        );
        assert_eq!(Resolution::NotFound.template(), None);
        assert_eq!(Resolution::NotFound.kind(), None);
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(kind_of("search/cities"), Some(EndpointKind::Search));
        assert_eq!(kind_of("city/{pk}"), Some(EndpointKind::Resource));
        assert_eq!(kind_of("cities"), None);
    }

    #[test]
    fn test_endpoint_names_order() {
        let names: Vec<&str> = endpoint_names().collect();
        assert_eq!(names.len(), SEARCH.len() + RESOURCE.len());
        assert_eq!(names.first(), Some(&"artists"));
        assert_eq!(names.get(SEARCH.len()), Some(&"artist"));
        assert_eq!(names.last(), Some(&"venue_setlists"));
    }

    #[test]
    fn test_expand_substitutes_placeholder() {
        let segments: Vec<&str> = expand("artist/{pk}/setlists", Some("abc")).collect();
        assert_eq!(segments, ["artist", "abc", "setlists"]);
    }

    #[test]
    fn test_expand_ignores_pk_without_placeholder() {
        let segments: Vec<&str> = expand("search/artists", Some("abc")).collect();
        assert_eq!(segments, ["search", "artists"]);
    }
}
