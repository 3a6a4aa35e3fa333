//! Response cache key derivation

use std::fmt;

use url::form_urlencoded;

/// Cache key identifying a read request by origin, path and query string
///
/// Query parameters are decoded, then sorted by name (then value) so that
/// requests differing only in parameter order or in percent-encoding share
/// one entry. The rendered form is a canonical URL,
/// `{origin}{path}?{name}={value}&...`, with names and values re-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResponseCacheKey(String);

impl ResponseCacheKey {
    /// Derives the key from the origin the links are built against, the
    /// request path and its raw query string
    pub fn new(origin: &str, path: &str, query: Option<&str>) -> Self {
        let mut pairs: Vec<(String, String)> =
            form_urlencoded::parse(query.unwrap_or_default().as_bytes())
                .into_owned()
                .collect();

        pairs.sort_unstable();

        let mut key = format!("{}{}", origin, path);

        if !pairs.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&pairs)
                .finish();

            key.push('?');
            key.push_str(&query);
        }

        Self(key)
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResponseCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ResponseCacheKey> for String {
    fn from(key: ResponseCacheKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://localhost";

    fn key(path: &str, query: Option<&str>) -> ResponseCacheKey {
        ResponseCacheKey::new(ORIGIN, path, query)
    }

    #[test]
    fn test_path_only() {
        assert_eq!(key("/api/authors", None).as_str(), "http://localhost/api/authors");
    }

    #[test]
    fn test_empty_query_is_ignored() {
        assert_eq!(key("/api/authors", Some("")).as_str(), "http://localhost/api/authors");
    }

    #[test]
    fn test_query_parameters_are_appended() {
        let key = key("/api/authors/1/courses", Some("pageNumber=2&pageSize=5"));

        assert_eq!(
            key.as_str(),
            "http://localhost/api/authors/1/courses?pageNumber=2&pageSize=5"
        );
    }

    #[test]
    fn test_parameter_order_does_not_matter() {
        assert_eq!(
            key("/c", Some("pageSize=5&pageNumber=2")),
            key("/c", Some("pageNumber=2&pageSize=5"))
        );
    }

    #[test]
    fn test_different_values_produce_different_keys() {
        assert_ne!(key("/c", Some("pageNumber=1")), key("/c", Some("pageNumber=2")));
    }

    #[test]
    fn test_separators_inside_values_do_not_collide() {
        let pipe_in_name = key("/c", Some("pageNumber-3|pageSize=5"));
        let two_params = key("/c", Some("pageNumber=3&pageSize=5"));

        assert_ne!(pipe_in_name, two_params);
        assert_eq!(pipe_in_name.as_str(), "http://localhost/c?pageNumber-3%7CpageSize=5");
    }

    #[test]
    fn test_encoded_ampersand_stays_inside_value() {
        let encoded = key("/c", Some("searchQuery=a%26b%3D1"));
        let split = key("/c", Some("searchQuery=a&b=1"));

        assert_ne!(encoded, split);
    }

    #[test]
    fn test_percent_encoded_and_plain_forms_share_a_key() {
        assert_eq!(key("/c", Some("pageNumber=%33")), key("/c", Some("pageNumber=3")));
        assert_eq!(
            key("/c", Some("mainCategory=Rum+Ships")),
            key("/c", Some("mainCategory=Rum%20Ships"))
        );
    }

    #[test]
    fn test_repeated_parameters_are_kept() {
        assert_eq!(key("/c", Some("tag=b&tag=a")).as_str(), "http://localhost/c?tag=a&tag=b");
    }

    #[test]
    fn test_flag_without_value() {
        assert_eq!(key("/c", Some("verbose&&x=1")).as_str(), "http://localhost/c?verbose=&x=1");
    }

    #[test]
    fn test_origin_distinguishes_keys() {
        let real = ResponseCacheKey::new("http://api.real", "/c", Some("x=1"));
        let forged = ResponseCacheKey::new("http://evil.example", "/c", Some("x=1"));

        assert_ne!(real, forged);
    }

    #[test]
    fn test_path_distinguishes_keys() {
        assert_ne!(key("/a", Some("x=1")).to_string(), key("/b", Some("x=1")).to_string());
    }
}
