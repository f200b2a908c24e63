//! Fixed endpoint templates for the Insynsregistret search services on
//! `marknadssok.fi.se`. The two autocomplete templates differ only in the
//! `falt` parameter selecting which column the free text matches against.

use url::form_urlencoded;

pub const ISSUER_AUTOCOMPLETE: &str = "https://marknadssok.fi.se/Publiceringsklient/sv-SE/AutoComplete/H%C3%A4mtaAutoCompleteListaFull?sokfunktion=Insyn&falt=Utgivare&sokterm=";
pub const PDMR_AUTOCOMPLETE: &str = "https://marknadssok.fi.se/Publiceringsklient/sv-SE/AutoComplete/H%C3%A4mtaAutoCompleteListaFull?sokfunktion=Insyn&falt=PersonILedandeSt%C3%A4llningNamn&sokterm=";
pub const SEARCH_BASE: &str = "https://marknadssok.fi.se/Publiceringsklient";

/// Encode a free-text term the way the registry's form-urlencoded endpoints
/// expect it: space as `+`, alphanumerics and `*-._` kept verbatim, every
/// other byte of the UTF-8 encoding as a percent escape.
pub fn encode_term(term: &str) -> String {
    form_urlencoded::byte_serialize(term.as_bytes()).collect()
}

pub fn issuer_autocomplete_url(issuer: &str) -> String {
    format!("{ISSUER_AUTOCOMPLETE}{}", encode_term(issuer))
}

pub fn pdmr_autocomplete_url(pdmr: &str) -> String {
    format!("{PDMR_AUTOCOMPLETE}{}", encode_term(pdmr))
}

#[cfg(test)]
mod tests {
    use super::{encode_term, issuer_autocomplete_url, pdmr_autocomplete_url};

    #[test]
    fn url_builder_encodes_terms() {
        let issuer = issuer_autocomplete_url("AB Volvo");
        let pdmr = pdmr_autocomplete_url("Anna Öberg");

        assert!(issuer.ends_with("sokterm=AB+Volvo"));
        assert!(pdmr.contains("falt=PersonILedandeSt%C3%A4llningNamn"));
        assert!(pdmr.ends_with("sokterm=Anna+%C3%96berg"));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let encoded = encode_term("a&b=c?d/e#f");
        assert_eq!(encoded, "a%26b%3Dc%3Fd%2Fe%23f");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(encode_term("Investor_B.2024-ser*"), "Investor_B.2024-ser*");
    }
}
