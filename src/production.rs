use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::quantity::power::Kilowatts;

/// Mean power of a plant over one calendar day.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ProductionRecord {
    /// Start of the day, UTC midnight.
    pub timestamp: DateTime<Utc>,

    #[serde(rename = "power_kw")]
    pub power: Kilowatts,
}

/// Production records in the order the vendor returned them.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, derive_more::Deref, derive_more::IntoIterator)]
#[into_iterator(owned, ref)]
pub struct ProductionTable(pub Vec<ProductionRecord>);
