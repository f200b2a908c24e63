//! Transaction search/export URLs. The same free-text names the
//! autocomplete endpoints complete are used here as filters on the
//! registry's search page, whose `button=export` rendering serves the
//! result as CSV. Fetching and parsing that CSV is out of scope; this
//! module only constructs the URL.

use crate::model::Language;
use crate::urls::{encode_term, SEARCH_BASE};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchQueryError {
    #[error("a transaction or publication date range is required")]
    MissingDateRange,
    #[error("invalid {which} date range: {from} is after {to}")]
    InvalidRange {
        which: &'static str,
        from: NaiveDate,
        to: NaiveDate,
    },
}

/// A validated transaction search. Immutable once built; derive the
/// request URL with [`TransactionSearchQuery::url`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionSearchQuery {
    pub transaction_dates: Option<(NaiveDate, NaiveDate)>,
    pub publication_dates: Option<(NaiveDate, NaiveDate)>,
    pub issuer: Option<String>,
    pub pdmr: Option<String>,
    pub language: Language,
    pub page: u32,
}

#[derive(Debug, Clone)]
pub struct TransactionSearchBuilder {
    transaction_dates: Option<(NaiveDate, NaiveDate)>,
    publication_dates: Option<(NaiveDate, NaiveDate)>,
    issuer: Option<String>,
    pdmr: Option<String>,
    language: Language,
    page: u32,
}

impl Default for TransactionSearchBuilder {
    fn default() -> Self {
        Self {
            transaction_dates: None,
            publication_dates: None,
            issuer: None,
            pdmr: None,
            language: Language::default(),
            page: 1,
        }
    }
}

impl TransactionSearchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to transactions executed within `from..=to`.
    pub fn transaction_dates(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.transaction_dates = Some((from, to));
        self
    }

    /// Restrict to disclosures published within `from..=to`.
    pub fn publication_dates(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.publication_dates = Some((from, to));
        self
    }

    pub fn issuer(mut self, name: impl Into<String>) -> Self {
        self.issuer = Some(name.into());
        self
    }

    pub fn pdmr(mut self, name: impl Into<String>) -> Self {
        self.pdmr = Some(name.into());
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// 1-based result page. Zero is clamped to the first page.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn build(self) -> Result<TransactionSearchQuery, SearchQueryError> {
        if self.transaction_dates.is_none() && self.publication_dates.is_none() {
            return Err(SearchQueryError::MissingDateRange);
        }
        validate_range("transaction", self.transaction_dates)?;
        validate_range("publication", self.publication_dates)?;

        Ok(TransactionSearchQuery {
            transaction_dates: self.transaction_dates,
            publication_dates: self.publication_dates,
            issuer: self.issuer,
            pdmr: self.pdmr,
            language: self.language,
            page: self.page,
        })
    }
}

fn validate_range(
    which: &'static str,
    range: Option<(NaiveDate, NaiveDate)>,
) -> Result<(), SearchQueryError> {
    match range {
        Some((from, to)) if from > to => Err(SearchQueryError::InvalidRange { which, from, to }),
        _ => Ok(()),
    }
}

impl TransactionSearchQuery {
    /// The ready-to-fetch search/export URL. Unset filters render as empty
    /// parameter values, matching the query strings the registry's own
    /// search form produces.
    pub fn url(&self) -> String {
        let (tx_from, tx_to) = format_range(self.transaction_dates);
        let (pub_from, pub_to) = format_range(self.publication_dates);
        format!(
            "{SEARCH_BASE}/{}/Search/Search?SearchFunctionType=Insyn\
             &Utgivare={}\
             &PersonILedandeSt%C3%A4llningNamn={}\
             &Transaktionsdatum.From={tx_from}\
             &Transaktionsdatum.To={tx_to}\
             &Publiceringsdatum.From={pub_from}\
             &Publiceringsdatum.To={pub_to}\
             &button=export\
             &Page={}",
            self.language.locale(),
            self.issuer.as_deref().map(encode_term).unwrap_or_default(),
            self.pdmr.as_deref().map(encode_term).unwrap_or_default(),
            self.page,
        )
    }
}

fn format_range(range: Option<(NaiveDate, NaiveDate)>) -> (String, String) {
    match range {
        Some((from, to)) => (
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string(),
        ),
        None => (String::new(), String::new()),
    }
}
