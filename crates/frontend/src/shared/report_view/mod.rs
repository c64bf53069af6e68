//! Permission-gated, filter-driven data loading shared by every report page.

pub mod controller;
pub mod drilldown;
pub mod pager;
pub mod sequencer;

pub use controller::{Completion, FetchDecision, ReportController, ReportState};
pub use pager::ChartPager;

use std::future::Future;

use contracts::shared::filter::ValidateFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::toast_service::ToastService;

/// Receives the message of a rejected filter.
pub trait ReportNotifier {
    fn invalid_filter(&self, message: String);
}

impl ReportNotifier for ToastService {
    fn invalid_filter(&self, message: String) {
        self.danger(message);
    }
}

/// Runs one filter change through `controller`.
///
/// Invalid filters are reported to `notifier` and keep the displayed data; a permitted and
/// valid filter starts `fetch`, whose result lands in `state` only if no newer request
/// was issued meanwhile.
pub fn dispatch_report<T, Q, N, Fut>(
    controller: &ReportController,
    state: RwSignal<ReportState<T>>,
    notifier: &N,
    allowed: bool,
    query: &Q,
    fetch: impl FnOnce() -> Fut + 'static,
) where
    T: Send + Sync + 'static,
    Q: ValidateFilter,
    N: ReportNotifier + ?Sized,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    match controller.begin(allowed, query) {
        FetchDecision::Denied => {
            state.try_update(|s| s.stop_loading());
        }
        FetchDecision::Invalid(err) => {
            log::warn!("Report filter rejected: {}", err);
            notifier.invalid_filter(err.to_string());
            state.try_update(|s| s.stop_loading());
        }
        FetchDecision::Proceed(ticket) => {
            state.try_update(|s| s.start_loading());
            let controller = controller.clone();
            spawn_local(async move {
                let result = fetch().await;
                let applied = state.try_update(|s| controller.complete(ticket, result, s));
                if applied == Some(Completion::Stale) {
                    log::debug!("Discarded superseded report response");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::toast_service::{ToastKind, ToastQueue};
    use chrono::NaiveDate;
    use contracts::shared::filter::DateRange;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    impl ReportNotifier for RefCell<ToastQueue> {
        fn invalid_filter(&self, message: String) {
            self.borrow_mut().push(ToastKind::Danger, message);
        }
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn tracked_fetch(
        called: &Rc<Cell<bool>>,
    ) -> impl FnOnce() -> std::future::Ready<Result<Vec<i32>, String>> + 'static {
        let called = Rc::clone(called);
        move || {
            called.set(true);
            std::future::ready(Ok(vec![9]))
        }
    }

    #[test]
    fn test_invalid_range_toasts_once_and_keeps_data() {
        let owner = Owner::new();
        owner.with(|| {
            let controller = ReportController::new();
            let state = RwSignal::new(ReportState::new(vec![1, 2, 3]));
            let toasts = RefCell::new(ToastQueue::default());
            let called = Rc::new(Cell::new(false));
            let range = DateRange::new(date(2024, 5, 10), date(2024, 5, 1));
            let expected = range.validate().unwrap_err().to_string();

            dispatch_report(&controller, state, &toasts, true, &range, tracked_fetch(&called));

            let queue = toasts.borrow();
            assert_eq!(queue.items().len(), 1);
            assert_eq!(queue.items()[0].kind, ToastKind::Danger);
            assert_eq!(queue.items()[0].text, expected);
            assert!(!called.get());
            state.with_untracked(|s| {
                assert_eq!(s.data, vec![1, 2, 3]);
                assert!(!s.loading);
            });
        });
    }

    #[test]
    fn test_denied_never_fetches() {
        let owner = Owner::new();
        owner.with(|| {
            let controller = ReportController::new();
            let state = RwSignal::new(ReportState::new(vec![1, 2, 3]));
            let toasts = RefCell::new(ToastQueue::default());
            let called = Rc::new(Cell::new(false));
            let range = DateRange::new(date(2024, 5, 1), date(2024, 5, 10));

            dispatch_report(&controller, state, &toasts, false, &range, tracked_fetch(&called));

            assert!(!called.get());
            assert!(toasts.borrow().is_empty());
            state.with_untracked(|s| {
                assert_eq!(s.data, vec![1, 2, 3]);
                assert!(!s.loading);
            });
        });
    }
}
