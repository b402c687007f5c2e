//! Shareable proposal links.
//!
//! A proposal travels entirely inside the query string of a link:
//!
//! ```text
//! https://heartseal.local/?q=Will+you+be+mine+forever%3F&r=Alex&s=Jamie&p=secret&a=true
//!                          └ question                   └ recipient └ sender └ pw  └ accepted
//! ```
//!
//! Encoding uses standard `application/x-www-form-urlencoded` escaping.
//! Values are opaque text: nothing is trimmed or normalised.

use std::collections::HashMap;

use url::{form_urlencoded, Url};

use crate::error::{ProposalError, ProposalResult};
use crate::types::ProposalDetails;

/// Query parameter holding the question
pub const PARAM_QUESTION: &str = "q";
/// Query parameter holding the recipient name
pub const PARAM_RECIPIENT: &str = "r";
/// Query parameter holding the sender name
pub const PARAM_SENDER: &str = "s";
/// Optional query parameter holding the password
pub const PARAM_PASSWORD: &str = "p";
/// Optional query parameter marking the link as already accepted
pub const PARAM_ACCEPTED: &str = "a";

/// The only value of [`PARAM_ACCEPTED`] that counts as accepted.
const ACCEPTED_TRUE: &str = "true";

/// Result of decoding a link that carries a complete proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLink {
    pub details: ProposalDetails,
    pub accepted: bool,
}

/// Encode details (and optionally the accepted flag) as a query string.
///
/// Parameters are emitted in the order `q, r, s, [p], [a]`. A missing
/// password omits `p` entirely; it is never written as an empty value.
pub fn encode_query(details: &ProposalDetails, accepted: bool) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer
        .append_pair(PARAM_QUESTION, &details.question)
        .append_pair(PARAM_RECIPIENT, &details.recipient)
        .append_pair(PARAM_SENDER, &details.sender);

    if let Some(password) = details.password.as_deref().filter(|p| !p.is_empty()) {
        serializer.append_pair(PARAM_PASSWORD, password);
    }
    if accepted {
        serializer.append_pair(PARAM_ACCEPTED, ACCEPTED_TRUE);
    }

    serializer.finish()
}

/// Decode a query string (a leading `?` is allowed).
///
/// Returns `None` unless `q`, `r` and `s` are all present and non-empty.
/// When a key repeats, its first occurrence wins.
pub fn decode_query(query: &str) -> Option<DecodedLink> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut params: HashMap<String, String> = HashMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }

    let required = |key: &str| params.get(key).filter(|v| !v.is_empty()).cloned();

    let question = required(PARAM_QUESTION)?;
    let recipient = required(PARAM_RECIPIENT)?;
    let sender = required(PARAM_SENDER)?;

    let mut details = ProposalDetails::new(question, recipient, sender);
    if let Some(password) = params.get(PARAM_PASSWORD) {
        details = details.with_password(password.clone());
    }

    let accepted = params
        .get(PARAM_ACCEPTED)
        .is_some_and(|v| v == ACCEPTED_TRUE);

    Some(DecodedLink { details, accepted })
}

/// Extract the query part of either an absolute URL or a bare query string.
pub fn query_of(link: &str) -> String {
    match Url::parse(link) {
        Ok(url) => url.query().unwrap_or_default().to_string(),
        Err(_) => link
            .split_once('?')
            .map(|(_, query)| query)
            .unwrap_or(link)
            .to_string(),
    }
}

/// Decode a full link or a bare query string.
pub fn parse_link(link: &str) -> Option<DecodedLink> {
    decode_query(&query_of(link))
}

/// Build the shareable URL for `details` on top of `base` (origin + path).
///
/// Any query or fragment already on `base` is replaced.
pub fn share_url(base: &str, details: &ProposalDetails) -> ProposalResult<String> {
    details.validate()?;
    let mut url = Url::parse(base)?;
    url.set_query(Some(&encode_query(details, false)));
    url.set_fragment(None);
    Ok(url.into())
}

/// Rewrite a proposal link so that it carries the accepted flag.
pub fn accepted_url(link: &str) -> ProposalResult<String> {
    let decoded = parse_link(link)
        .ok_or_else(|| ProposalError::InvalidLink("link does not carry a proposal".into()))?;
    let query = encode_query(&decoded.details, true);

    match Url::parse(link) {
        Ok(mut url) => {
            url.set_query(Some(&query));
            Ok(url.into())
        }
        Err(_) => {
            // Relative link: keep whatever path came before the query.
            let prefix = link.split_once('?').map(|(path, _)| path).unwrap_or_default();
            Ok(format!("{}?{}", prefix, query))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alex_and_jamie() -> ProposalDetails {
        ProposalDetails::new("Will you be mine forever?", "Alex", "Jamie")
    }

    #[test]
    fn test_encode_without_password_omits_p() {
        let query = encode_query(&alex_and_jamie(), false);
        assert_eq!(query, "q=Will+you+be+mine+forever%3F&r=Alex&s=Jamie");
        assert!(!query.contains("p="));
        assert!(!query.contains("a="));
    }

    #[test]
    fn test_encode_with_password_and_accepted() {
        let details = alex_and_jamie().with_password("secret");
        let query = encode_query(&details, true);
        assert!(query.ends_with("&p=secret&a=true"));
    }

    #[test]
    fn test_decode_roundtrip() {
        let details = alex_and_jamie().with_password("s3cr3t & more");
        let decoded = decode_query(&encode_query(&details, false)).unwrap();
        assert_eq!(decoded.details, details);
        assert!(!decoded.accepted);
    }

    #[test]
    fn test_decode_without_password_is_none_not_empty() {
        let decoded = decode_query("q=Q&r=R&s=S").unwrap();
        assert_eq!(decoded.details.password, None);

        let decoded = decode_query("q=Q&r=R&s=S&p=").unwrap();
        assert_eq!(decoded.details.password, None);
    }

    #[test]
    fn test_decode_requires_all_three_fields() {
        assert!(decode_query("").is_none());
        assert!(decode_query("r=R&s=S").is_none());
        assert!(decode_query("q=Q&s=S").is_none());
        assert!(decode_query("q=Q&r=R").is_none());
        assert!(decode_query("q=&r=R&s=S").is_none());
    }

    #[test]
    fn test_decode_leading_question_mark() {
        assert!(decode_query("?q=Q&r=R&s=S").is_some());
    }

    #[test]
    fn test_accepted_flag_is_literal_true() {
        assert!(decode_query("q=Q&r=R&s=S&a=true").unwrap().accepted);
        assert!(!decode_query("q=Q&r=R&s=S&a=TRUE").unwrap().accepted);
        assert!(!decode_query("q=Q&r=R&s=S&a=1").unwrap().accepted);
        assert!(!decode_query("q=Q&r=R&s=S&a=").unwrap().accepted);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let decoded = decode_query("q=first&q=second&r=R&s=S").unwrap();
        assert_eq!(decoded.details.question, "first");
    }

    #[test]
    fn test_share_url_replaces_existing_query() {
        let url = share_url("https://example.com/love?old=1#top", &alex_and_jamie()).unwrap();
        assert_eq!(
            url,
            "https://example.com/love?q=Will+you+be+mine+forever%3F&r=Alex&s=Jamie"
        );
    }

    #[test]
    fn test_share_url_rejects_bad_base() {
        let err = share_url("not a url", &alex_and_jamie()).unwrap_err();
        assert!(matches!(err, ProposalError::InvalidLink(_)));
    }

    #[test]
    fn test_share_url_rejects_incomplete_details() {
        let err = share_url("https://example.com/", &ProposalDetails::new("Q", "", "S"))
            .unwrap_err();
        assert!(matches!(err, ProposalError::MissingField("recipient")));
    }

    #[test]
    fn test_accepted_url_appends_flag_once() {
        let link = share_url("https://example.com/", &alex_and_jamie()).unwrap();
        let accepted = accepted_url(&link).unwrap();
        assert!(accepted.ends_with("&a=true"));
        assert_eq!(accepted_url(&accepted).unwrap(), accepted);
        assert!(parse_link(&accepted).unwrap().accepted);
    }

    #[test]
    fn test_accepted_url_on_bare_query() {
        assert_eq!(accepted_url("?q=Q&r=R&s=S").unwrap(), "?q=Q&r=R&s=S&a=true");
    }

    #[test]
    fn test_accepted_url_keeps_relative_path() {
        assert_eq!(
            accepted_url("/love?q=Q&r=R&s=S").unwrap(),
            "/love?q=Q&r=R&s=S&a=true"
        );
        assert_eq!(accepted_url("q=Q&r=R&s=S").unwrap(), "?q=Q&r=R&s=S&a=true");
    }

    #[test]
    fn test_accepted_url_without_proposal() {
        assert!(accepted_url("https://example.com/").is_err());
    }

    #[test]
    fn test_query_of_variants() {
        assert_eq!(query_of("https://example.com/?q=1"), "q=1");
        assert_eq!(query_of("https://example.com/"), "");
        assert_eq!(query_of("/path?q=1"), "q=1");
        assert_eq!(query_of("q=1"), "q=1");
    }
}
