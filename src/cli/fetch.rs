use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use clap::{Parser, ValueEnum};

use crate::{
    cli::auroravision::AuroraVisionApiArgs,
    inverter::Inverter,
    prelude::*,
    tables::build_production_table,
};

#[derive(Parser)]
pub struct FetchArgs {
    #[clap(flatten)]
    aurora_vision: AuroraVisionApiArgs,

    /// Day to fetch. Defaults to today in UTC.
    #[clap(long, conflicts_with = "timestamp")]
    date: Option<NaiveDate>,

    /// Any moment of the day to fetch, for example: `2024-01-01T13:45:00+02:00`.
    ///
    /// Only the date in the timestamp's own offset is used.
    #[clap(long)]
    timestamp: Option<DateTime<FixedOffset>>,

    #[clap(long, value_enum, env = "AURORA_OUTPUT_FORMAT", default_value = "table")]
    format: Format,
}

#[derive(Copy, Clone, ValueEnum)]
pub enum Format {
    /// Human-readable table.
    Table,

    /// JSON array of `timestamp` and `power_kw` rows.
    Json,
}

impl FetchArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let timestamp = self.timestamp();
        let production = self.aurora_vision.new_api().get_data(timestamp)?;
        match self.format {
            Format::Table => println!("{}", build_production_table(&production)),
            Format::Json => println!("{}", serde_json::to_string_pretty(&production)?),
        }
        Ok(())
    }

    fn timestamp(&self) -> DateTime<FixedOffset> {
        match (self.timestamp, self.date) {
            (Some(timestamp), _) => timestamp,
            (None, Some(date)) => date.and_time(NaiveTime::MIN).and_utc().fixed_offset(),
            (None, None) => Utc::now().fixed_offset(),
        }
    }
}
