use chrono::{NaiveDate, NaiveTime, TimeDelta};
use serde::Deserialize;
use serde_with::serde_as;

use super::{ParseError, response::Response};
use crate::{
    production::{ProductionRecord, ProductionTable},
    quantity::energy::KilowattHours,
};

#[serde_as]
#[derive(Deserialize)]
struct Entry {
    /// `YYYYMMDD`.
    date: Option<String>,

    #[serde_as(as = "serde_with::DefaultOnNull")]
    #[serde(rename = "dailyProduction", default)]
    daily_production: KilowattHours,
}

/// Convert the `dailyProduction` payload into mean power rows.
///
/// The daily energy is assumed to be spread evenly over 24 hours. An entry without
/// a usable date fails the whole payload.
pub fn transform(payload: serde_json::Value) -> Result<ProductionTable, ParseError> {
    let response: Response<Option<Vec<Entry>>> = serde_json::from_value(payload)?;
    response
        .result
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, entry)| -> Result<_, ParseError> {
            let date = entry.date.ok_or(ParseError::MissingDate { index })?;
            let date = NaiveDate::parse_from_str(&date, "%Y%m%d")
                .map_err(|source| ParseError::MalformedDate { index, date, source })?;
            Ok(ProductionRecord {
                timestamp: date.and_time(NaiveTime::MIN).and_utc(),
                power: entry.daily_production / TimeDelta::days(1),
            })
        })
        .collect::<Result<_, _>>()
        .map(ProductionTable)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_transform_ok() -> Result {
        let table = transform(json!({"result": [{"date": "20240101", "dailyProduction": 240}]}))?;
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].timestamp, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_abs_diff_eq!(table[0].power.0, 10.0);
        Ok(())
    }

    #[test]
    fn test_missing_production_defaults_to_zero() -> Result {
        let table = transform(json!({
            "result": [
                {"date": "20240102"},
                {"date": "20240103", "dailyProduction": null},
            ],
        }))?;
        assert_eq!(table.len(), 2);
        assert_abs_diff_eq!(table[0].power.0, 0.0);
        assert_abs_diff_eq!(table[1].power.0, 0.0);
        Ok(())
    }

    #[test]
    fn test_order_preserved() -> Result {
        // language=json
        const PAYLOAD: &str = r#"{
            "result": [
                {"date": "20240305", "dailyProduction": 12.0},
                {"date": "20240301", "dailyProduction": 48.0},
                {"date": "20240303", "dailyProduction": 24.0}
            ]
        }"#;
        let table = transform(serde_json::from_str(PAYLOAD)?)?;
        let days = table.iter().map(|record| record.timestamp.format("%d").to_string());
        assert_eq!(days.collect::<Vec<_>>(), ["05", "01", "03"]);
        let powers = table.iter().map(|record| record.power.0).collect::<Vec<_>>();
        assert_eq!(powers, [0.5, 2.0, 1.0]);
        Ok(())
    }

    #[test]
    fn test_missing_result_is_empty() -> Result {
        assert!(transform(json!({}))?.is_empty());
        assert!(transform(json!({"result": null}))?.is_empty());
        assert!(transform(json!({"result": []}))?.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_date_fails() {
        let error = transform(json!({
            "result": [
                {"date": "20240101", "dailyProduction": 1.0},
                {"dailyProduction": 2.0},
            ],
        }))
        .unwrap_err();
        assert!(matches!(error, ParseError::MissingDate { index: 1 }));
    }

    #[test]
    fn test_malformed_date_fails() {
        let error =
            transform(json!({"result": [{"date": "2024-01-01", "dailyProduction": 1.0}]}))
                .unwrap_err();
        assert!(matches!(
            error,
            ParseError::MalformedDate { index: 0, ref date, .. } if date == "2024-01-01",
        ));
    }

    #[test]
    fn test_unexpected_shape_fails() {
        assert!(matches!(transform(json!({"result": "nope"})), Err(ParseError::Json(_))));
        assert!(matches!(transform(json!([1, 2, 3])), Err(ParseError::Json(_))));
    }
}
