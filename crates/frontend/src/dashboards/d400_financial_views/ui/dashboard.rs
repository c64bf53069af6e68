use contracts::dashboards::d400_financial_views::{views_found_caption, FinancialView};
use contracts::system::permissions::FINANCIAL_INDICATORS;
use leptos::prelude::*;

use crate::dashboards::d400_financial_views::api;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::loader::Loader;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::report_view::{dispatch_report, ReportController, ReportState};
use crate::system::permissions::{use_permissions, RequirePermission};

#[component]
fn FinancialViewCard(item: FinancialView) -> impl IntoView {
    let active = item.is_active();
    let status = if active { "Ativo" } else { "Inativo" };
    let period = match item.periodo_padrao_meses {
        1 => "1 mês".to_string(),
        n => format!("{} meses", n),
    };

    view! {
        <div class="indicator-card" class:indicator-card--inactive=!active>
            <div class="indicator-card__icon">{icon("dollar-sign")}</div>
            <div class="indicator-card__body">
                <strong class="indicator-card__name">{item.nome}</strong>
                <span class="indicator-card__status">{status}</span>
                <span class="indicator-card__period">"Período padrão: " {period}</span>
            </div>
        </div>
    }
}

#[component]
pub fn FinancialViewsDashboard() -> impl IntoView {
    let permissions = use_permissions();
    let toasts = use_toasts();
    let controller = ReportController::new();
    let state = RwSignal::new(ReportState::new(Vec::<FinancialView>::new()));
    let reload = RwSignal::new(0_u32);

    let allowed = Memo::new(move |_| permissions.has_permission(FINANCIAL_INDICATORS));

    Effect::new(move |_| {
        reload.track();
        dispatch_report(
            &controller,
            state,
            &toasts,
            allowed.get(),
            &(),
            api::fetch_financial_views,
        );
    });

    let on_retry = Callback::new(move |_| reload.update(|n| *n += 1));

    view! {
        <PageFrame page_id="d400_financial_views--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Indicadores Financeiros">
                {move || allowed.get().then(|| view! {
                    <span class="page__caption">
                        {move || views_found_caption(state.with(|s| s.data.len()))}
                    </span>
                })}
            </PageHeader>

            <div class="page__content">
                <RequirePermission
                    permission=FINANCIAL_INDICATORS
                    fallback=|| view! {
                        <div class="indicator-grid">
                            <FinancialViewCard item=FinancialView::placeholder() />
                        </div>
                    }
                >
                    <ErrorBanner
                        error=Signal::derive(move || state.with(|s| s.error.clone()))
                        on_retry=on_retry
                    />
                    <Show when=move || state.with(|s| s.loading)>
                        <Loader />
                    </Show>
                    <div class="indicator-grid">
                        <For
                            each=move || state.with(|s| s.data.clone())
                            key=|item| item.id
                            children=|item| view! { <FinancialViewCard item=item /> }
                        />
                    </div>
                </RequirePermission>
            </div>
        </PageFrame>
    }
}
