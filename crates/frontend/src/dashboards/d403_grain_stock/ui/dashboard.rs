use chrono::NaiveDate;
use contracts::dashboards::d403_grain_stock::{GrainStockQuery, ProducerGrainStock};
use contracts::shared::filter::DateRange;
use contracts::system::permissions::PRODUCER_GRAIN_STOCK;
use leptos::prelude::*;
use thaw::*;

use super::producer_details::ProducerDetails;
use crate::dashboards::d403_grain_stock::api;
use crate::dashboards::d403_grain_stock::export::grain_stock_export_filename;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::loader::Loader;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::paged_bar_chart::{ChartBar, PagedBarChart};
use crate::shared::export::export_to_excel;
use crate::shared::icons::icon;
use crate::shared::number_format::format_kg;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::report_view::{dispatch_report, ReportController, ReportState};
use crate::system::permissions::{use_permissions, RequirePermission};

/// Closing balance per producer.
pub fn balance_bars(producers: &[ProducerGrainStock]) -> Vec<ChartBar> {
    producers
        .iter()
        .map(|p| ChartBar::new(p.produtor.clone(), p.saldo_final))
        .collect()
}

/// Grain stock page: producer balances plus the detailed ledger of one producer.
#[component]
pub fn GrainStockDashboard() -> impl IntoView {
    let permissions = use_permissions();
    let toasts = use_toasts();
    let controller = ReportController::new();
    let query = RwSignal::new(GrainStockQuery::default());
    let state = RwSignal::new(ReportState::new(Vec::<ProducerGrainStock>::new()));
    let reload = RwSignal::new(0_u32);

    let allowed = Memo::new(move |_| permissions.has_permission(PRODUCER_GRAIN_STOCK));

    Effect::new(move |_| {
        reload.track();
        let current = query.get();
        let request = current.clone();
        dispatch_report(&controller, state, &toasts, allowed.get(), &current, move || {
            api::fetch_producer_stock(request)
        });
    });

    let producers = Memo::new(move |_| state.with(|s| s.data.clone()));

    let on_export = move |_| {
        let filename = grain_stock_export_filename(&query.get_untracked());
        let result = state.with_untracked(|s| export_to_excel(&s.data, &filename));
        match result {
            Ok(()) => toasts.success("Planilha exportada."),
            Err(e) => {
                log::warn!("Grain stock export failed: {}", e);
                toasts.danger(e);
            }
        }
    };

    view! {
        <PageFrame page_id="d403_grain_stock--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Estoque de Grãos">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !allowed.get())
                    on_click=on_export
                >
                    {icon("download")}
                    " Exportar planilha"
                </Button>
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
                <RequirePermission permission=PRODUCER_GRAIN_STOCK>
                    <ErrorBanner
                        error=Signal::derive(move || state.with(|s| s.error.clone()))
                        on_retry=Callback::new(move |_| reload.update(|n| *n += 1))
                    />
                    <Show when=move || state.with(|s| s.loading)>
                        <Loader />
                    </Show>
                    <div class="report-card">
                        <header class="report-card__header">
                            <h3>"SALDO POR PRODUTOR"</h3>
                        </header>
                        <PagedBarChart
                            bars=Memo::new(move |_| state.with(|s| balance_bars(&s.data)))
                            format_value=format_kg
                        />
                    </div>
                    <ProducerDetails producers=producers />
                </RequirePermission>
            </div>
        </PageFrame>
    }
}
