// src/services/catalog.rs

//! Periodical catalog fetcher.
//!
//! Fetches a periodical's metadata and year/month index and resolves the
//! server's stand-alone Russian month names into numeric months.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::locale::stand_alone_month_number;
use crate::models::{MonthEntry, PeriodicalCatalog, YearEntry, YearMonth};
use crate::services::ArchiveClient;

/// Wire shape of `GET /editions/{periodicalId}`.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    response: RawCatalog,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    description: Option<String>,
    url: String,
    #[serde(deserialize_with = "ordered_years")]
    years: Vec<RawYear>,
}

#[derive(Debug, Deserialize)]
struct RawYear {
    value: i32,
    url: String,
    count: u32,
    months: Vec<RawMonth>,
}

#[derive(Debug, Deserialize)]
struct RawMonth {
    value: String,
    url: Option<String>,
    count: u32,
}

/// Deserialize the `years` object into a `Vec`, preserving the order the
/// server emitted the keys in.
///
/// The server keys this object by year string, but downstream display
/// depends on its chronological ordering, so it must be treated as an
/// ordered sequence rather than an unordered map. The keys themselves are
/// redundant with each entry's `value` field and are dropped.
fn ordered_years<'de, D>(deserializer: D) -> std::result::Result<Vec<RawYear>, D::Error>
where
    D: Deserializer<'de>,
{
    struct YearsVisitor;

    impl<'de> Visitor<'de> for YearsVisitor {
        type Value = Vec<RawYear>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of year keys to year objects")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut years = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((_key, year)) = map.next_entry::<String, RawYear>()? {
                years.push(year);
            }
            Ok(years)
        }
    }

    deserializer.deserialize_map(YearsVisitor)
}

/// Transform a validated payload into the typed catalog.
fn build_catalog(raw: RawCatalog) -> Result<PeriodicalCatalog> {
    let mut years = Vec::with_capacity(raw.years.len());
    for raw_year in raw.years {
        let mut months = Vec::with_capacity(raw_year.months.len());
        for raw_month in raw_year.months {
            let month = stand_alone_month_number(&raw_month.value)
                .ok_or_else(|| AppError::MonthName(raw_month.value.clone()))?;
            months.push(MonthEntry {
                year_month: YearMonth::new(raw_year.value, month),
                url: raw_month.url,
                count: raw_month.count,
            });
        }
        years.push(YearEntry {
            year: raw_year.value,
            url: raw_year.url,
            count: raw_year.count,
            months,
        });
    }
    Ok(PeriodicalCatalog {
        kind: raw.kind,
        name: raw.name,
        description: raw.description,
        url: raw.url,
        years,
    })
}

impl ArchiveClient {
    /// Fetch a periodical's catalog: metadata plus its year/month index.
    ///
    /// Years and months come back in the server-supplied order. Any shape
    /// mismatch, non-2xx status, or unknown month name fails the whole
    /// call; no partial catalog is returned.
    pub async fn fetch_catalog(&self, periodical_id: &str) -> Result<PeriodicalCatalog> {
        let url = self.endpoint(&format!("editions/{periodical_id}"));
        let payload: CatalogResponse = self.get_json(&url).await?;
        let catalog = build_catalog(payload.response)?;
        log::debug!("catalog {:?}: {} years", catalog.name, catalog.years.len());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_month(value: &str, count: u32) -> RawMonth {
        RawMonth {
            value: value.to_string(),
            url: Some(format!("/editions/39/1905/{value}")),
            count,
        }
    }

    #[test]
    fn test_build_catalog_resolves_month_names() {
        let raw = RawCatalog {
            kind: "Газета".to_string(),
            name: "Русское слово".to_string(),
            description: None,
            url: "/editions/39".to_string(),
            years: vec![RawYear {
                value: 1905,
                url: "/editions/39/1905".to_string(),
                count: 3,
                months: vec![raw_month("Март", 2), raw_month("Декабрь", 1)],
            }],
        };

        let catalog = build_catalog(raw).unwrap();
        assert_eq!(catalog.years.len(), 1);
        let year = &catalog.years[0];
        assert_eq!(year.year, 1905);
        assert_eq!(year.months[0].year_month, YearMonth::new(1905, 3));
        assert_eq!(year.months[1].year_month, YearMonth::new(1905, 12));
        // Month entries inherit the containing year.
        assert!(year.months.iter().all(|m| m.year_month.year == year.year));
    }

    #[test]
    fn test_build_catalog_unknown_month_is_fatal() {
        let raw = RawCatalog {
            kind: "Газета".to_string(),
            name: "Русское слово".to_string(),
            description: None,
            url: "/editions/39".to_string(),
            years: vec![RawYear {
                value: 1905,
                url: "/editions/39/1905".to_string(),
                count: 1,
                // Genitive form in a stand-alone slot must not resolve.
                months: vec![raw_month("марта", 1)],
            }],
        };

        let err = build_catalog(raw).unwrap_err();
        assert!(matches!(err, AppError::MonthName(name) if name == "марта"));
    }

    #[test]
    fn test_years_preserve_server_order() {
        // Keys deliberately out of chronological order.
        let json = r#"{
            "1906": {"value": 1906, "url": "/editions/39/1906", "count": 1, "months": []},
            "1905": {"value": 1905, "url": "/editions/39/1905", "count": 2, "months": []}
        }"#;

        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "ordered_years")]
            years: Vec<RawYear>,
        }

        let wrapper: Wrapper =
            serde_json::from_str(&format!("{{\"years\": {json}}}")).unwrap();
        let order: Vec<i32> = wrapper.years.iter().map(|y| y.value).collect();
        assert_eq!(order, vec![1906, 1905]);
    }
}
