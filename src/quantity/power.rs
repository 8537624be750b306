quantity!(Kilowatts, via: f64, suffix: "kW", precision: 3);

impl Kilowatts {
    pub const ZERO: Self = Self(0.0);
}
