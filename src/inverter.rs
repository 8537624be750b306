use chrono::{DateTime, FixedOffset};

use crate::{prelude::*, production::ProductionTable};

/// Source of live plant production.
pub trait Inverter {
    /// Fetch the production of the day the timestamp falls on, in the timestamp's own offset.
    fn get_data(&self, timestamp: DateTime<FixedOffset>) -> Result<ProductionTable>;
}
