//! Domain types for parsed `app-ads.txt` files and crawl outcomes.
//!
//! Serialized field names follow the JSON shape consumers of this data already
//! expect (`publisherAccountID`, `appAdsUrl`, ...), so the structs carry
//! explicit serde renames rather than a blanket `rename_all`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

/// Relationship between the seller account and the publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    Direct,
    Reseller,
}

impl AccountType {
    /// Case-insensitive parse of the third record field.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("DIRECT") {
            Some(Self::Direct)
        } else if raw.eq_ignore_ascii_case("RESELLER") {
            Some(Self::Reseller)
        } else {
            None
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Direct => write!(f, "DIRECT"),
            AccountType::Reseller => write!(f, "RESELLER"),
        }
    }
}

/// One authorized-seller line of an `app-ads.txt` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerRecord {
    /// Canonical domain of the advertising system (e.g. `"google.com"`).
    pub domain: String,

    /// Seller account ID within that advertising system.
    #[serde(rename = "publisherAccountID")]
    pub publisher_account_id: String,

    #[serde(rename = "accountType")]
    pub account_type: AccountType,

    /// TAG certification authority ID, when the line carries one.
    #[serde(
        rename = "certificateAuthorityID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub certificate_authority_id: Option<String>,
}

/// Structured contents of an `app-ads.txt` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdsTxt {
    pub fields: Vec<SellerRecord>,
    pub variables: BTreeMap<String, String>,
}

impl AdsTxt {
    /// A file with no seller records counts as absent.
    #[must_use]
    pub fn has_records(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// Outcome of resolving the `app-ads.txt` for one input URL.
///
/// Either `found` (the URL that served the winning file plus its contents) or
/// `not_found`, which serializes as `{"appAdsUrl": "", "data": ""}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlResult {
    #[serde(rename = "appAdsUrl")]
    app_ads_url: String,

    #[serde(serialize_with = "serialize_data")]
    data: Option<AdsTxt>,
}

impl CrawlResult {
    #[must_use]
    pub fn found(app_ads_url: impl Into<String>, data: AdsTxt) -> Self {
        Self {
            app_ads_url: app_ads_url.into(),
            data: Some(data),
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.data.is_some()
    }

    /// The exact URL (scheme included) that produced the data; empty when not found.
    #[must_use]
    pub fn app_ads_url(&self) -> &str {
        &self.app_ads_url
    }

    #[must_use]
    pub fn data(&self) -> Option<&AdsTxt> {
        self.data.as_ref()
    }
}

fn serialize_data<S>(data: &Option<AdsTxt>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match data {
        Some(ads) => ads.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rami_record() -> SellerRecord {
        SellerRecord {
            domain: "rami.com".to_string(),
            publisher_account_id: "104023".to_string(),
            account_type: AccountType::Direct,
            certificate_authority_id: Some("79929e88b2ba73bc".to_string()),
        }
    }

    #[test]
    fn account_type_parse_is_case_insensitive() {
        assert_eq!(AccountType::parse("direct"), Some(AccountType::Direct));
        assert_eq!(AccountType::parse("Reseller"), Some(AccountType::Reseller));
        assert_eq!(AccountType::parse("partner"), None);
    }

    #[test]
    fn not_found_serializes_as_empty_strings() {
        let json = serde_json::to_value(CrawlResult::not_found()).unwrap();
        assert_eq!(json, serde_json::json!({ "appAdsUrl": "", "data": "" }));
    }

    #[test]
    fn found_serializes_with_camel_case_field_names() {
        let result = CrawlResult::found(
            "https://example.com/app-ads.txt",
            AdsTxt {
                fields: vec![rami_record()],
                variables: BTreeMap::new(),
            },
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "appAdsUrl": "https://example.com/app-ads.txt",
                "data": {
                    "fields": [{
                        "domain": "rami.com",
                        "publisherAccountID": "104023",
                        "accountType": "DIRECT",
                        "certificateAuthorityID": "79929e88b2ba73bc"
                    }],
                    "variables": {}
                }
            })
        );
    }

    #[test]
    fn record_without_certificate_authority_omits_the_key() {
        let record = SellerRecord {
            certificate_authority_id: None,
            ..rami_record()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("certificateAuthorityID").is_none());
    }

    #[test]
    fn accessors_reflect_variant() {
        let empty = CrawlResult::not_found();
        assert!(!empty.is_found());
        assert_eq!(empty.app_ads_url(), "");
        assert!(empty.data().is_none());

        let ads = AdsTxt {
            fields: vec![rami_record()],
            variables: BTreeMap::new(),
        };
        let hit = CrawlResult::found("http://example.com/app-ads.txt", ads.clone());
        assert!(hit.is_found());
        assert_eq!(hit.data(), Some(&ads));
    }
}
