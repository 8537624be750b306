use std::ops::Div;

use chrono::TimeDelta;

use crate::quantity::power::Kilowatts;

quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 3);

impl Div<TimeDelta> for KilowattHours {
    type Output = Kilowatts;

    /// Mean power over the period, assuming the energy is spread evenly.
    fn div(self, rhs: TimeDelta) -> Self::Output {
        let hours = rhs.as_seconds_f64() / 3600.0;
        Kilowatts(self.0 / hours)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_daily_energy_to_mean_power_ok() {
        let power = KilowattHours(240.0) / TimeDelta::days(1);
        assert_abs_diff_eq!(power.0, 10.0);
    }

    #[test]
    fn test_display_ok() {
        assert_eq!(KilowattHours(1.5).to_string(), "1.500 kWh");
        assert_eq!(Kilowatts(0.25).to_string(), "0.250 kW");
    }
}
