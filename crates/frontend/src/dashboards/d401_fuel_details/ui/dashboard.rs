use std::collections::HashSet;

use chrono::NaiveDate;

use contracts::dashboards::d401_fuel_details::{group_by_fuel, FuelDetailLine, FuelGroup};
use contracts::shared::filter::{CostBasis, DateRange, EntitySelection};
use contracts::shared::options::{OptionList, SelectOption};
use contracts::system::permissions::FUEL_DETAILS;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::state::FuelDetailsParams;
use crate::dashboards::d401_fuel_details::api::{self, FuelFilterOptions};
use crate::dashboards::d401_fuel_details::export::fuel_export_filename;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::loader::Loader;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Select;
use crate::shared::date_utils::format_date;
use crate::shared::export::export_to_excel;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_currency, format_liters};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::query_params::{current_search, parse_query, replace_query, EntryParams};
use crate::shared::report_view::{dispatch_report, ReportController, ReportState};
use crate::system::permissions::{use_permissions, RequirePermission};

fn cost_basis_options() -> OptionList {
    CostBasis::all()
        .into_iter()
        .map(|basis| SelectOption::new(basis.code(), basis.label()))
        .collect()
}

/// Analytic fuel summary grouped by fuel type.
#[component]
pub fn FuelDetailsDashboard() -> impl IntoView {
    let permissions = use_permissions();
    let toasts = use_toasts();
    let controller = ReportController::new();

    let params: FuelDetailsParams = parse_query(&current_search());
    let entry = EntryParams {
        id_usuario: params.id_usuario.clone(),
        db_nome: params.db_nome.clone(),
    };
    let query = RwSignal::new(params.to_query());
    let options = RwSignal::new(FuelFilterOptions::placeholder());
    let state = RwSignal::new(ReportState::new(Vec::<FuelDetailLine>::new()));
    let collapsed = RwSignal::new(HashSet::<String>::new());
    let reload = RwSignal::new(0_u32);

    let allowed = Memo::new(move |_| permissions.has_permission(FUEL_DETAILS));
    let groups = Memo::new(move |_| state.with(|s| group_by_fuel(&s.data)));

    spawn_local(async move {
        match api::fetch_filter_options().await {
            Ok(loaded) => options.set(loaded),
            Err(e) => {
                log::error!("Failed to load fuel filter options: {}", e);
                toasts.danger("Não foi possível carregar os filtros.");
            }
        }
    });

    Effect::new(move |_| {
        reload.track();
        let current = query.get();
        if let Err(e) = replace_query(&FuelDetailsParams::from_query(&current, &entry)) {
            log::warn!("{}", e);
        }
        let request = current.clone();
        dispatch_report(&controller, state, &toasts, allowed.get(), &current, move || {
            api::fetch_fuel_details(request)
        });
    });

    let on_export = move |_| {
        let lines = state.with_untracked(|s| s.data.clone());
        let current = query.get_untracked();
        let asset_label = options.with_untracked(|o| {
            o.assets.label_of(current.asset.as_str()).map(str::to_string)
        });
        let filename = fuel_export_filename(&current, asset_label.as_deref());
        match export_to_excel(&lines, &filename) {
            Ok(()) => toasts.success("Planilha exportada."),
            Err(e) => {
                log::warn!("Fuel export failed: {}", e);
                toasts.danger(e);
            }
        }
    };

    let toggle_group = move |fuel: String| {
        collapsed.update(|set| {
            if !set.remove(&fuel) {
                set.insert(fuel);
            }
        });
    };

    view! {
        <PageFrame page_id="d401_fuel_details--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Resumo por Combustível">
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
                <Select
                    label="Custo"
                    value=Signal::derive(move || query.with(|q| q.cost_basis.code().to_string()))
                    options=Signal::derive(cost_basis_options)
                    on_change=Callback::new(move |code: String| {
                        query.update(|q| q.cost_basis = CostBasis::from_code(&code))
                    })
                />
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
                <Select
                    label="Patrimônio"
                    value=Signal::derive(move || query.with(|q| q.asset.as_str().to_string()))
                    options=Signal::derive(move || options.with(|o| o.assets.clone()))
                    on_change=Callback::new(move |id: String| {
                        query.update(|q| q.asset = EntitySelection::new(id))
                    })
                />
                <Select
                    label="Local de saída"
                    value=Signal::derive(move || query.with(|q| q.warehouse.as_str().to_string()))
                    options=Signal::derive(move || options.with(|o| o.warehouses.clone()))
                    on_change=Callback::new(move |id: String| {
                        query.update(|q| q.warehouse = EntitySelection::new(id))
                    })
                />
                <Select
                    label="Tipo de patrimônio"
                    value=Signal::derive(move || query.with(|q| q.asset_type.as_str().to_string()))
                    options=Signal::derive(move || options.with(|o| o.asset_types.clone()))
                    on_change=Callback::new(move |id: String| {
                        query.update(|q| q.asset_type = EntitySelection::new(id))
                    })
                />
            </div>

            <div class="page__content">
                <RequirePermission permission=FUEL_DETAILS>
                    <ErrorBanner
                        error=Signal::derive(move || state.with(|s| s.error.clone()))
                        on_retry=Callback::new(move |_| reload.update(|n| *n += 1))
                    />
                    <Show when=move || state.with(|s| s.loading)>
                        <Loader />
                    </Show>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Data"</TableHeaderCell>
                                <TableHeaderCell>"Requisição"</TableHeaderCell>
                                <TableHeaderCell>"Patrimônio"</TableHeaderCell>
                                <TableHeaderCell>"Local de saída"</TableHeaderCell>
                                <TableHeaderCell>"Litros"</TableHeaderCell>
                                <TableHeaderCell>"Custo/litro"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let groups = groups.get();
                                if groups.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                <TableCellLayout>"Nenhum abastecimento encontrado"</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                groups.into_iter().map(|group| {
                                    view! { <FuelGroupRows group=group collapsed=collapsed on_toggle=toggle_group /> }
                                }).collect_view().into_any()
                            }}
                        </TableBody>
                    </Table>
                </RequirePermission>
            </div>
        </PageFrame>
    }
}

#[component]
fn FuelGroupRows(
    group: FuelGroup,
    collapsed: RwSignal<HashSet<String>>,
    on_toggle: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let fuel = StoredValue::new(group.combustivel.clone());
    let is_open = move || fuel.with_value(|f| !collapsed.with(|set| set.contains(f)));
    let lines = StoredValue::new(group.lines);

    view! {
        <TableRow class="fuel-group">
            <TableCell attr:colspan="4">
                <TableCellLayout>
                    <span
                        class="fuel-group__toggle"
                        on:click=move |_| on_toggle(fuel.get_value())
                    >
                        {move || if is_open() { icon("chevron-down") } else { icon("chevron-right") }}
                        <strong>{group.combustivel}</strong>
                    </span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout><strong>{format_liters(group.total_liters)}</strong></TableCellLayout>
            </TableCell>
            <TableCell><TableCellLayout>""</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout><strong>{format_currency(group.total_cost)}</strong></TableCellLayout>
            </TableCell>
        </TableRow>
        <Show when=is_open>
            {move || lines.get_value().into_iter().map(|line| view! {
                <TableRow>
                    <TableCell><TableCellLayout>{format_date(&line.data)}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{line.numero_requisicao}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{line.patrimonio}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{line.local_saida}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{format_liters(line.quantidade)}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{format_currency(line.custo_individual)}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{format_currency(line.total)}</TableCellLayout></TableCell>
                </TableRow>
            }).collect_view()}
        </Show>
    }
}
