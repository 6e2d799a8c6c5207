//! Greenhouse gases charted daily by the observatory's Picarro analyzer.

use crate::types::product::ProductRecord;
use chrono::NaiveDate;
use std::fmt;

/// A gas with a daily concentration chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GasType {
    /// Carbon dioxide.
    Co2,
    /// Methane.
    Ch4,
}

impl GasType {
    /// Both charted gases, in display order.
    pub const ALL: [GasType; 2] = [GasType::Co2, GasType::Ch4];

    /// Filename the backend publishes the chart under.
    pub fn chart_filename(&self) -> &'static str {
        match self {
            GasType::Co2 => "CO2_webvisualizer_v4.png",
            GasType::Ch4 => "CH4_webvisualizer_v4.png",
        }
    }

    /// Chemical formula.
    pub fn formula(&self) -> &'static str {
        match self {
            GasType::Co2 => "CO₂",
            GasType::Ch4 => "CH₄",
        }
    }

    /// English name, used in logs and `Display`.
    pub fn name(&self) -> &'static str {
        match self {
            GasType::Co2 => "Carbon dioxide",
            GasType::Ch4 => "Methane",
        }
    }
}

impl fmt::Display for GasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.formula())
    }
}

/// The chart of one gas for a date, if the backend has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasChart {
    pub gas: GasType,
    pub record: Option<ProductRecord>,
}

impl GasChart {
    /// The chart image, stored copy first.
    pub fn image_url(&self) -> Option<&str> {
        self.record.as_ref().and_then(ProductRecord::preferred_image)
    }

    /// When the backend last saw the chart.
    pub fn last_updated(&self) -> Option<&str> {
        self.record.as_ref().and_then(|r| r.last_updated.as_deref())
    }

    pub fn is_available(&self) -> bool {
        self.image_url().is_some()
    }
}

/// Finds the chart record of `gas` for `date`.
///
/// A record matches if its filename is the bare chart name, or the chart name
/// prefixed by `date` as `YYYY-MM-DD_`. The first match in listing order wins.
pub fn find_chart<'a>(
    gas: GasType,
    records: &'a [ProductRecord],
    date: NaiveDate,
) -> Option<&'a ProductRecord> {
    let chart = gas.chart_filename();
    let dated = format!("{}_{}", date.format("%Y-%m-%d"), chart);
    records
        .iter()
        .find(|record| record.filename == chart || record.filename == dated)
}
