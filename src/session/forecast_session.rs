//! State of the WRF forecast view: selected date, variable and hour, and what to show.
//!
//! Loads are split into three steps so the session itself never awaits:
//! a `select_*` call returns a [`PendingLoad`], running it yields a
//! [`LoadOutcome`], and [`ForecastSession::apply`] stores the outcome if it
//! belongs to the newest request.

use crate::error::ObservatoryError;
use crate::resolver::availability::fallback_hour;
use crate::session::navigator::HourNavigator;
use crate::session::sequencer::{RequestSequencer, RequestTicket};
use crate::types::forecast::WrfForecast;
use crate::types::forecast_time::HourLabel;
use crate::types::variable::WrfVariable;
use crate::Observatory;
use chrono::NaiveDate;
use log::{debug, warn};

/// What the image area should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageView {
    Loading,
    Image(String),
    /// Nothing is published for the selected date and hour.
    NoData,
    /// The last load failed; the message is meant for an inline notice.
    Error(String),
}

#[derive(Debug)]
pub struct ForecastSession {
    date: NaiveDate,
    variable: &'static WrfVariable,
    hour: Option<HourLabel>,
    forecast: Option<WrfForecast>,
    error: Option<String>,
    loading: bool,
    sequencer: RequestSequencer,
}

/// A load that has been requested but not run yet.
#[derive(Debug)]
#[must_use = "a pending load does nothing until it is run"]
pub struct PendingLoad {
    ticket: RequestTicket,
    date: NaiveDate,
    variable: &'static WrfVariable,
}

#[derive(Debug)]
pub enum LoadOutcome {
    Loaded {
        ticket: RequestTicket,
        forecast: WrfForecast,
    },
    Failed {
        ticket: RequestTicket,
        error: ObservatoryError,
    },
    /// A newer request superseded this one before it finished.
    Cancelled { ticket: RequestTicket },
}

impl LoadOutcome {
    /// The ticket of the request this outcome belongs to.
    pub fn ticket(&self) -> &RequestTicket {
        match self {
            LoadOutcome::Loaded { ticket, .. }
            | LoadOutcome::Failed { ticket, .. }
            | LoadOutcome::Cancelled { ticket } => ticket,
        }
    }
}

impl PendingLoad {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn variable(&self) -> &'static WrfVariable {
        self.variable
    }

    /// Fetches the forecast, giving up early if the request is superseded.
    pub async fn run(self, observatory: &Observatory) -> LoadOutcome {
        let PendingLoad {
            ticket,
            date,
            variable,
        } = self;
        let client = observatory.wrf();
        let fetch = client.date(date).variable(variable.id).call();
        let result = tokio::select! {
            _ = ticket.cancelled() => None,
            result = fetch => Some(result),
        };
        match result {
            None => LoadOutcome::Cancelled { ticket },
            Some(Ok(forecast)) => LoadOutcome::Loaded { ticket, forecast },
            Some(Err(error)) => LoadOutcome::Failed { ticket, error },
        }
    }
}

impl ForecastSession {
    /// The hour selected before anything is loaded.
    pub const DEFAULT_HOUR: u32 = 12;

    /// Starts a session on `date` with the default variable and hour.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            variable: WrfVariable::default_variable(),
            hour: HourLabel::new(Self::DEFAULT_HOUR),
            forecast: None,
            error: None,
            loading: false,
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn variable(&self) -> &'static WrfVariable {
        self.variable
    }

    pub fn hour(&self) -> Option<HourLabel> {
        self.hour
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The forecast of the latest completed request, if it succeeded.
    pub fn forecast(&self) -> Option<&WrfForecast> {
        self.forecast.as_ref()
    }

    /// Changes the date and requests its forecast.
    pub fn select_date(&mut self, date: NaiveDate) -> PendingLoad {
        self.date = date;
        self.begin_load()
    }

    /// Changes the variable and requests its forecast.
    ///
    /// # Errors
    ///
    /// [`ObservatoryError::UnknownVariable`] if `id` is not in the catalogue; the
    /// session is left unchanged.
    pub fn select_variable(&mut self, id: &str) -> Result<PendingLoad, ObservatoryError> {
        self.variable =
            WrfVariable::find(id).ok_or_else(|| ObservatoryError::UnknownVariable(id.to_string()))?;
        Ok(self.begin_load())
    }

    /// Requests the forecast for the current date and variable again.
    pub fn reload(&mut self) -> PendingLoad {
        self.begin_load()
    }

    fn begin_load(&mut self) -> PendingLoad {
        self.loading = true;
        PendingLoad {
            ticket: self.sequencer.begin(),
            date: self.date,
            variable: self.variable,
        }
    }

    /// Stores the result of a load if it answers the newest request.
    ///
    /// Returns `false`, leaving the session untouched, for stale outcomes.
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        if !self.sequencer.is_current(outcome.ticket()) {
            debug!(
                "Discarding stale response #{} (latest #{})",
                outcome.ticket().id(),
                self.sequencer.latest()
            );
            return false;
        }
        self.loading = false;
        match outcome {
            LoadOutcome::Loaded { forecast, .. } => {
                self.hour = fallback_hour(&forecast.available_hours(), self.hour);
                self.forecast = Some(forecast);
                self.error = None;
            }
            LoadOutcome::Failed { error, .. } => {
                warn!("Loading WRF {} for {} failed: {}", self.variable, self.date, error);
                self.forecast = None;
                self.error = Some(error.to_string());
            }
            LoadOutcome::Cancelled { .. } => {}
        }
        true
    }

    /// Selects an hour. Any hour can be selected; unavailable ones show [`ImageView::NoData`].
    pub fn select_hour(&mut self, hour: HourLabel) {
        self.hour = Some(hour);
    }

    /// Hours with a product on the selected date.
    pub fn available_hours(&self) -> Vec<HourLabel> {
        self.forecast
            .as_ref()
            .map(WrfForecast::available_hours)
            .unwrap_or_default()
    }

    /// A navigator over the available hours, positioned on the selected hour.
    pub fn navigator(&self) -> HourNavigator {
        let mut navigator = HourNavigator::new(self.available_hours());
        if let Some(hour) = self.hour {
            navigator.select(hour);
        }
        navigator
    }

    /// Selects the next available hour, wrapping to the first after the last.
    ///
    /// # Returns
    ///
    /// The newly selected hour, or `None` if no hour is available.
    pub fn next_hour(&mut self) -> Option<HourLabel> {
        let mut navigator = self.navigator();
        self.hour = navigator.next();
        self.hour
    }

    /// Selects the previous available hour, wrapping to the last before the first.
    pub fn previous_hour(&mut self) -> Option<HourLabel> {
        let mut navigator = self.navigator();
        self.hour = navigator.previous();
        self.hour
    }

    /// What the image area shows right now.
    ///
    /// Loading takes precedence over an error, and an error over stale data.
    pub fn view(&self) -> ImageView {
        if self.loading {
            return ImageView::Loading;
        }
        if let Some(message) = &self.error {
            return ImageView::Error(message.clone());
        }
        self.forecast
            .as_ref()
            .zip(self.hour)
            .and_then(|(forecast, hour)| forecast.image_at(hour))
            .map(|url| ImageView::Image(url.to_string()))
            .unwrap_or(ImageView::NoData)
    }

    /// One-line summary of the last load, e.g. `"3 products | variable t2"`.
    pub fn status(&self) -> String {
        match (&self.error, &self.forecast) {
            _ if self.loading => format!("Loading {} for {}", self.variable, self.date),
            (Some(message), _) => format!("Error: {}", message),
            (None, Some(forecast)) => format!(
                "{} products | variable {}",
                forecast.records().len(),
                self.variable
            ),
            (None, None) => "No data loaded".to_string(),
        }
    }
}
