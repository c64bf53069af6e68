use contracts::shared::filter::{FilterError, ValidateFilter};

use super::sequencer::{RequestSequencer, RequestTicket};

/// What a report view does after its filters changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchDecision {
    /// The permission is missing: render the "not allowed" state, fetch nothing.
    Denied,
    /// The filters are inconsistent: notify, keep the current data, fetch nothing.
    Invalid(FilterError),
    /// Go ahead; hand the ticket back to [`ReportController::complete`].
    Proceed(RequestTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// Displayed dataset of a report view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> ReportState<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn stop_loading(&mut self) {
        self.loading = false;
    }
}

/// Filter-to-fetch reconciliation shared by every report page.
#[derive(Debug, Clone, Default)]
pub struct ReportController {
    sequencer: RequestSequencer,
}

impl ReportController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decides on a new filter state. Every call supersedes in-flight requests,
    /// including calls that end up denied or invalid.
    pub fn begin<F: ValidateFilter>(&self, allowed: bool, filter: &F) -> FetchDecision {
        let ticket = self.sequencer.next();
        if !allowed {
            return FetchDecision::Denied;
        }
        if let Err(err) = filter.validate() {
            return FetchDecision::Invalid(err);
        }
        FetchDecision::Proceed(ticket)
    }

    /// Drops in-flight requests without starting a new one.
    pub fn supersede(&self) {
        self.sequencer.next();
    }

    /// Applies a finished request to `state` unless a newer one was started.
    /// Success replaces the dataset as a whole; failure keeps it and records the error.
    pub fn complete<T>(
        &self,
        ticket: RequestTicket,
        result: Result<T, String>,
        state: &mut ReportState<T>,
    ) -> Completion {
        if !self.sequencer.is_current(ticket) {
            return Completion::Stale;
        }
        match result {
            Ok(data) => {
                state.data = data;
                state.error = None;
            }
            Err(err) => {
                log::error!("Report request failed: {}", err);
                state.error = Some(err);
            }
        }
        state.loading = false;
        Completion::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::shared::filter::{DateRange, FilterState};

    fn filter(start: (i32, u32, u32), end: (i32, u32, u32)) -> FilterState {
        FilterState {
            date_range: DateRange::new(
                NaiveDate::from_ymd_opt(start.0, start.1, start.2),
                NaiveDate::from_ymd_opt(end.0, end.1, end.2),
            ),
            ..Default::default()
        }
    }

    fn proceed(decision: FetchDecision) -> RequestTicket {
        match decision {
            FetchDecision::Proceed(ticket) => ticket,
            other => panic!("expected Proceed, got {:?}", other),
        }
    }

    #[test]
    fn test_denied_view_never_fetches() {
        let controller = ReportController::new();
        let decision = controller.begin(false, &filter((2024, 1, 1), (2024, 1, 31)));
        assert_eq!(decision, FetchDecision::Denied);
    }

    #[test]
    fn test_inverted_range_keeps_previous_data() {
        let controller = ReportController::new();
        let mut state = ReportState::new(vec![1, 2, 3]);

        let decision = controller.begin(true, &filter((2024, 2, 1), (2024, 1, 1)));

        assert!(matches!(decision, FetchDecision::Invalid(FilterError::InvalidDateRange { .. })));
        assert_eq!(state.data, vec![1, 2, 3]);
        state.stop_loading();
        assert!(!state.loading);
    }

    #[test]
    fn test_late_response_of_older_request_is_discarded() {
        let controller = ReportController::new();
        let mut state = ReportState::new(Vec::<&str>::new());

        let a = proceed(controller.begin(true, &filter((2024, 1, 1), (2024, 1, 31))));
        state.start_loading();
        let b = proceed(controller.begin(true, &filter((2024, 2, 1), (2024, 2, 29))));

        assert_eq!(controller.complete(b, Ok(vec!["fevereiro"]), &mut state), Completion::Applied);
        assert_eq!(controller.complete(a, Ok(vec!["janeiro"]), &mut state), Completion::Stale);

        assert_eq!(state.data, vec!["fevereiro"]);
        assert!(!state.loading);
    }

    #[test]
    fn test_invalid_filter_supersedes_in_flight_request() {
        let controller = ReportController::new();
        let mut state = ReportState::new(0);

        let a = proceed(controller.begin(true, &filter((2024, 1, 1), (2024, 1, 31))));
        let _ = controller.begin(true, &filter((2024, 3, 1), (2024, 1, 1)));

        assert_eq!(controller.complete(a, Ok(42), &mut state), Completion::Stale);
        assert_eq!(state.data, 0);
    }

    #[test]
    fn test_supersede_discards_pending_response() {
        let controller = ReportController::new();
        let mut state = ReportState::new(0);

        let a = proceed(controller.begin(true, &FilterState::default()));
        controller.supersede();

        assert_eq!(controller.complete(a, Ok(1), &mut state), Completion::Stale);
        assert_eq!(state.data, 0);
    }

    #[test]
    fn test_failure_keeps_data_and_records_error() {
        let controller = ReportController::new();
        let mut state = ReportState::new(vec![7]);

        let ticket = proceed(controller.begin(true, &FilterState::default()));
        state.start_loading();
        controller.complete(ticket, Err("HTTP error: 502".to_string()), &mut state);

        assert_eq!(state.data, vec![7]);
        assert_eq!(state.error.as_deref(), Some("HTTP error: 502"));
        assert!(!state.loading);

        let retry = proceed(controller.begin(true, &FilterState::default()));
        state.start_loading();
        assert!(state.error.is_none());
        controller.complete(retry, Ok(vec![8, 9]), &mut state);
        assert_eq!(state.data, vec![8, 9]);
    }
}
