use contracts::dashboards::d402_field_cost::{CostUnit, FieldCost, FieldCostQuery};
use contracts::shared::filter::{DateRange, EntitySelection};
use contracts::shared::options::OptionList;
use contracts::system::permissions::FIELD_COST;
use leptos::prelude::*;

use crate::dashboards::d402_field_cost::api;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::loader::Loader;
use crate::shared::components::paged_bar_chart::{ChartBar, PagedBarChart};
use crate::shared::components::ui::Select;
use crate::shared::number_format::{format_currency, format_percent};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use crate::shared::report_view::{dispatch_report, ReportController, ReportState};
use crate::system::permissions::{use_permissions, RequirePermission};

pub const ALL_SEASONS_LABEL: &str = "Todas as Safras Selecionadas";

/// The season select appears only when there is a choice to make.
pub fn shows_season_select(season_options: &OptionList) -> bool {
    season_options.len() >= 2
}

/// Season select options: the aggregate entry followed by the selected seasons.
pub fn season_select_options(season_options: &OptionList) -> OptionList {
    let mut options = season_options.clone();
    options.prepend_all(ALL_SEASONS_LABEL);
    options
}

/// A season picked in the card only counts while it is still selected on the page.
pub fn effective_season(selected: &EntitySelection, season_ids: &[String]) -> EntitySelection {
    match selected.as_filter() {
        Some(id) if season_ids.iter().any(|s| s == id) => selected.clone(),
        _ => EntitySelection::all(),
    }
}

pub fn cost_bars(cost: &FieldCost, unit: CostUnit) -> Vec<ChartBar> {
    cost.labels()
        .into_iter()
        .zip(cost.seasons())
        .zip(cost.values(unit))
        .map(|((label, season), value)| ChartBar::new(label, value).with_detail(format!("Safra: {}", season)))
        .collect()
}

fn value_formatter(unit: CostUnit) -> fn(f64) -> String {
    match unit {
        CostUnit::Percent => format_percent,
        CostUnit::Cost | CostUnit::HectareCost => format_currency,
    }
}

/// Cost per talhão (field and variety) for the seasons chosen on the host page.
#[component]
pub fn TalhaoCost(
    #[prop(into)] season_ids: Signal<Vec<String>>,
    /// Options of the selected seasons only
    #[prop(into)]
    season_options: Signal<OptionList>,
    #[prop(into)] date_range: Signal<DateRange>,
    #[prop(into)] unit: Signal<CostUnit>,
) -> impl IntoView {
    let permissions = use_permissions();
    let toasts = use_toasts();
    let controller = ReportController::new();
    let state = RwSignal::new(ReportState::new(FieldCost::default()));
    let selected = RwSignal::new(EntitySelection::all());
    let reload = RwSignal::new(0_u32);

    let allowed = Memo::new(move |_| permissions.has_permission(FIELD_COST));

    Effect::new(move |_| {
        season_ids.track();
        if !selected.with_untracked(|s| s.is_all()) {
            selected.set(EntitySelection::all());
        }
    });

    let query = Memo::new(move |_| {
        let season_ids = season_ids.get();
        let selected_season = selected.with(|s| effective_season(s, &season_ids));
        FieldCostQuery {
            season_ids,
            selected_season,
            date_range: date_range.get(),
        }
    });

    Effect::new(move |_| {
        reload.track();
        let current = query.get();
        let allowed = allowed.get();

        if allowed && !current.has_seasons() {
            controller.supersede();
            state.update(|s| s.stop_loading());
            return;
        }

        let request = current.clone();
        dispatch_report(&controller, state, &toasts, allowed, &current, move || {
            api::fetch_field_cost(request)
        });
    });

    view! {
        <PageFrame page_id="d402_field_cost--report" category=PAGE_CAT_REPORT>
            <header class="report-card__header">
                <h3>"CUSTOS POR TALHÃO (VARIEDADE)"</h3>
                <Show when=move || season_options.with(shows_season_select)>
                    <Select
                        value=Signal::derive(move || selected.with(|s| s.as_str().to_string()))
                        options=Signal::derive(move || season_options.with(season_select_options))
                        on_change=Callback::new(move |id: String| selected.set(EntitySelection::new(id)))
                    />
                </Show>
            </header>

            <RequirePermission permission=FIELD_COST>
                <ErrorBanner
                    error=Signal::derive(move || state.with(|s| s.error.clone()))
                    on_retry=Callback::new(move |_| reload.update(|n| *n += 1))
                />
                <Show when=move || state.with(|s| s.loading)>
                    <Loader />
                </Show>
                <div class="report-card__total">
                    <strong>{move || unit.get().total_caption()}</strong>
                    {move || {
                        let unit = unit.get();
                        state.with(|s| format_currency(s.data.headline_total(unit)))
                    }}
                </div>
                {move || {
                    let unit = unit.get();
                    let bars = Memo::new(move |_| state.with(|s| cost_bars(&s.data, unit)));
                    view! { <PagedBarChart bars=bars format_value=value_formatter(unit) /> }
                }}
            </RequirePermission>
        </PageFrame>
    }
}
