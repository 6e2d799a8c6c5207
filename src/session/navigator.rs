//! Stepping through the available forecast hours.

use crate::types::forecast_time::HourLabel;

/// Hours offered as quick shortcuts when they are available.
pub const SHORTCUT_HOURS: [u32; 5] = [0, 6, 12, 18, 24];

/// The list shown when a date has no available hours: `00:00` to `24:00`.
pub fn default_hours() -> Vec<HourLabel> {
    (0..=24).filter_map(HourLabel::new).collect()
}

/// Cursor over a list of hours with wrap-around stepping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourNavigator {
    hours: Vec<HourLabel>,
    fallback: bool,
    index: Option<usize>,
}

impl HourNavigator {
    /// Builds a navigator over `available`, or over [`default_hours`] if it is empty.
    /// Nothing is selected yet.
    pub fn new(available: Vec<HourLabel>) -> Self {
        let fallback = available.is_empty();
        let hours = if fallback { default_hours() } else { available };
        Self {
            hours,
            fallback,
            index: None,
        }
    }

    pub fn hours(&self) -> &[HourLabel] {
        &self.hours
    }

    /// `true` if the list is the default one because no hours were available.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// The hour under the cursor, `None` until one is selected.
    pub fn selected(&self) -> Option<HourLabel> {
        self.index.map(|i| self.hours[i])
    }

    /// Selects `hour` if it is in the list. Returns whether it was.
    pub fn select(&mut self, hour: HourLabel) -> bool {
        match self.hours.iter().position(|h| *h == hour) {
            Some(index) => {
                self.index = Some(index);
                true
            }
            None => false,
        }
    }

    /// Moves to the next hour, wrapping from the last to the first.
    pub fn next(&mut self) -> Option<HourLabel> {
        let len = self.hours.len();
        self.index = Some(match self.index {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
        self.selected()
    }

    /// Moves to the previous hour, wrapping from the first to the last.
    pub fn previous(&mut self) -> Option<HourLabel> {
        let len = self.hours.len();
        self.index = Some(match self.index {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        });
        self.selected()
    }

    /// One-based position and list length, e.g. `(3, 8)` for "3 of 8".
    pub fn position(&self) -> Option<(usize, usize)> {
        self.index.map(|i| (i + 1, self.hours.len()))
    }

    /// The shortcut hours present in the list.
    pub fn shortcuts(&self) -> Vec<HourLabel> {
        SHORTCUT_HOURS
            .iter()
            .filter_map(|&h| HourLabel::new(h))
            .filter(|h| self.hours.contains(h))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(labels: &[&str]) -> Vec<HourLabel> {
        labels.iter().map(|l| l.parse().unwrap()).collect()
    }

    #[test]
    fn test_wraps_in_both_directions() {
        let mut nav = HourNavigator::new(hours(&["03:00", "12:00", "21:00"]));
        assert_eq!(nav.selected(), None);
        assert_eq!(nav.next().unwrap().to_string(), "03:00");
        assert_eq!(nav.previous().unwrap().to_string(), "21:00");
        assert_eq!(nav.next().unwrap().to_string(), "03:00");
        assert_eq!(nav.next().unwrap().to_string(), "12:00");
        assert_eq!(nav.position(), Some((2, 3)));
    }

    #[test]
    fn test_select_only_listed_hours() {
        let mut nav = HourNavigator::new(hours(&["03:00", "12:00"]));
        assert!(nav.select("12:00".parse().unwrap()));
        assert!(!nav.select("13:00".parse().unwrap()));
        assert_eq!(nav.selected().unwrap().to_string(), "12:00");
    }

    #[test]
    fn test_default_list_when_nothing_available() {
        let nav = HourNavigator::new(Vec::new());
        assert!(nav.is_fallback());
        assert_eq!(nav.hours().len(), 25);
        assert_eq!(nav.hours()[24].to_string(), "24:00");
        assert_eq!(nav.shortcuts().len(), 5);
    }

    #[test]
    fn test_shortcuts_only_when_present() {
        let nav = HourNavigator::new(hours(&["00:00", "03:00", "18:00", "21:00"]));
        let shortcuts: Vec<String> = nav.shortcuts().iter().map(|h| h.to_string()).collect();
        assert_eq!(shortcuts, ["00:00", "18:00"]);
    }
}
