use chrono::NaiveDate;
use contracts::dashboards::d404_production_discounts::{DiscountQuery, DiscountUnit, ProductionDiscount};
use contracts::shared::filter::DateRange;
use contracts::shared::options::{OptionList, SelectOption};
use contracts::system::permissions::PRODUCTION_DISCOUNTS;
use leptos::prelude::*;

use super::discount_chart::DiscountChart;
use crate::dashboards::d404_production_discounts::api;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::loader::Loader;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Select;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::report_view::{dispatch_report, ReportController, ReportState};
use crate::system::permissions::{use_permissions, RequirePermission};

fn unit_options() -> OptionList {
    OptionList::new(vec![
        SelectOption::new(DiscountUnit::Kg.code(), "Peso (Kg)"),
        SelectOption::new(DiscountUnit::Percent.code(), "Percentual"),
    ])
}

/// Production page: classification discounts over the selected period.
#[component]
pub fn ProductionDashboard() -> impl IntoView {
    let permissions = use_permissions();
    let toasts = use_toasts();
    let controller = ReportController::new();
    let query = RwSignal::new(DiscountQuery::default());
    let unit = RwSignal::new(DiscountUnit::default());
    let state = RwSignal::new(ReportState::new(Vec::<ProductionDiscount>::new()));
    let reload = RwSignal::new(0_u32);

    let allowed = Memo::new(move |_| permissions.has_permission(PRODUCTION_DISCOUNTS));

    Effect::new(move |_| {
        reload.track();
        let current = query.get();
        let request = current.clone();
        dispatch_report(&controller, state, &toasts, allowed.get(), &current, move || {
            api::fetch_discounts(request)
        });
    });

    view! {
        <PageFrame page_id="d404_production_discounts--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Produção">
                <Select
                    label="Exibir"
                    value=Signal::derive(move || unit.get().code().to_string())
                    options=Signal::derive(unit_options)
                    on_change=Callback::new(move |code: String| unit.set(DiscountUnit::from_code(&code)))
                />
            </PageHeader>

            <div class="page__filters">
                <DateInput
                    label="Data inicial"
                    value=Signal::derive(move || query.with(|q| q.date_range.start))
                    on_change=Callback::new(move |start: Option<NaiveDate>| {
                        query.update(|q| q.date_range = DateRange::new(start, q.date_range.end))
                    })
                />
                <DateInput
                    label="Data final"
                    value=Signal::derive(move || query.with(|q| q.date_range.end))
                    on_change=Callback::new(move |end: Option<NaiveDate>| {
                        query.update(|q| q.date_range = DateRange::new(q.date_range.start, end))
                    })
                />
            </div>

            <div class="page__content">
                <div class="report-card">
                    <header class="report-card__header">
                        <h3>"DESCONTOS DE CLASSIFICAÇÃO"</h3>
                    </header>
                    <RequirePermission permission=PRODUCTION_DISCOUNTS>
                        <ErrorBanner
                            error=Signal::derive(move || state.with(|s| s.error.clone()))
                            on_retry=Callback::new(move |_| reload.update(|n| *n += 1))
                        />
                        <Show when=move || state.with(|s| s.loading)>
                            <Loader />
                        </Show>
                        <DiscountChart
                            discounts=Memo::new(move |_| state.with(|s| s.data.clone()))
                            unit=unit
                        />
                    </RequirePermission>
                </div>
            </div>
        </PageFrame>
    }
}
