use crate::urls;
use serde::{Deserialize, Serialize};

/// A free-text lookup against the registry's name-autocomplete service.
///
/// The two searches are mutually exclusive by construction: a query is
/// either an issuer lookup or a PDMR lookup, never both and never neither.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FreeTextQuery {
    /// Search issuer (company) names.
    Issuer(String),
    /// Search names of persons discharging managerial responsibilities.
    Pdmr(String),
}

impl FreeTextQuery {
    pub fn issuer(name: impl Into<String>) -> Self {
        FreeTextQuery::Issuer(name.into())
    }

    pub fn pdmr(name: impl Into<String>) -> Self {
        FreeTextQuery::Pdmr(name.into())
    }

    /// Build from a pair of nullable fields, for callers that collect both
    /// inputs before deciding. Issuer takes priority when both are set and
    /// the PDMR name is ignored; blank strings count as absent; both absent
    /// yields `None` rather than a query with nothing to search for.
    pub fn from_parts(issuer: Option<&str>, pdmr: Option<&str>) -> Option<Self> {
        let present = |s: &&str| !s.trim().is_empty();
        match (issuer.filter(present), pdmr.filter(present)) {
            (Some(name), _) => Some(FreeTextQuery::issuer(name)),
            (None, Some(name)) => Some(FreeTextQuery::pdmr(name)),
            (None, None) => None,
        }
    }

    /// The raw search term, as given.
    pub fn term(&self) -> &str {
        match self {
            FreeTextQuery::Issuer(name) | FreeTextQuery::Pdmr(name) => name,
        }
    }

    /// The ready-to-fetch autocomplete URL for this query.
    pub fn url(&self) -> String {
        match self {
            FreeTextQuery::Issuer(name) => urls::issuer_autocomplete_url(name),
            FreeTextQuery::Pdmr(name) => urls::pdmr_autocomplete_url(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FreeTextQuery;
    use crate::urls::{ISSUER_AUTOCOMPLETE, PDMR_AUTOCOMPLETE};

    #[test]
    fn issuer_query_uses_issuer_template() {
        let url = FreeTextQuery::issuer("Volvo").url();
        assert!(url.starts_with(ISSUER_AUTOCOMPLETE));
        assert!(url.ends_with("Volvo"));
    }

    #[test]
    fn pdmr_query_encodes_space_and_diacritics() {
        let url = FreeTextQuery::pdmr("Anna Öberg").url();
        assert!(url.starts_with(PDMR_AUTOCOMPLETE));
        assert!(url.ends_with("Anna+%C3%96berg"));
    }

    #[test]
    fn issuer_wins_when_both_are_given() {
        let query = FreeTextQuery::from_parts(Some("Volvo"), Some("Anna Öberg"))
            .expect("issuer present");
        assert_eq!(query, FreeTextQuery::issuer("Volvo"));
        assert!(query.url().starts_with(ISSUER_AUTOCOMPLETE));
    }

    #[test]
    fn absent_inputs_build_no_query() {
        assert_eq!(FreeTextQuery::from_parts(None, None), None);
        assert_eq!(FreeTextQuery::from_parts(Some(""), Some("   ")), None);
    }

    #[test]
    fn blank_issuer_falls_through_to_pdmr() {
        let query = FreeTextQuery::from_parts(Some("  "), Some("Anna Öberg"))
            .expect("pdmr present");
        assert_eq!(query, FreeTextQuery::pdmr("Anna Öberg"));
    }

    #[test]
    fn urls_contain_no_unescaped_reserved_characters() {
        for term in ["AB Volvo & Söner", "50%/50%", "a?b#c", "Ångström=Å"] {
            let url = FreeTextQuery::issuer(term).url();
            let suffix = url.strip_prefix(ISSUER_AUTOCOMPLETE).expect("template prefix");
            assert!(
                suffix
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || "*-._%+".contains(c)),
                "unescaped character in {suffix:?}"
            );
        }
    }
}
