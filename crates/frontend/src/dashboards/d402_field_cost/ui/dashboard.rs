use std::collections::HashSet;

use chrono::NaiveDate;
use contracts::dashboards::d402_field_cost::CostUnit;
use contracts::domain::a004_crop_season::aggregate::CropSeason;
use contracts::shared::filter::DateRange;
use contracts::shared::options::{NamedEntity, OptionList, SelectOption};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::talhao_cost::TalhaoCost;
use crate::domain::a004_crop_season::api::fetch_crop_seasons;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Select;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Selected season ids in the order the seasons were listed by the service.
pub fn ordered_season_ids(seasons: &[CropSeason], selected: &HashSet<String>) -> Vec<String> {
    seasons
        .iter()
        .map(|season| season.option_value())
        .filter(|id| selected.contains(id))
        .collect()
}

pub fn selected_season_options(seasons: &[CropSeason], selected: &HashSet<String>) -> OptionList {
    seasons
        .iter()
        .filter(|season| selected.contains(&season.option_value()))
        .map(|season| SelectOption::new(season.option_value(), season.option_label()))
        .collect()
}

fn cost_unit_options() -> OptionList {
    CostUnit::all()
        .into_iter()
        .map(|unit| SelectOption::new(unit.code(), unit.label()))
        .collect()
}

/// Production cost page: owns the season and date filters of its cost cards.
#[component]
pub fn FieldCostDashboard() -> impl IntoView {
    let toasts = use_toasts();
    let seasons = RwSignal::new(Vec::<CropSeason>::new());
    let selected = RwSignal::new(HashSet::<String>::new());
    let date_range = RwSignal::new(DateRange::default());
    let unit = RwSignal::new(CostUnit::default());

    spawn_local(async move {
        match fetch_crop_seasons().await {
            Ok(loaded) => {
                if let Some(first) = loaded.first() {
                    selected.set(HashSet::from([first.option_value()]));
                }
                seasons.set(loaded);
            }
            Err(e) => {
                log::error!("Failed to load crop seasons: {}", e);
                toasts.danger("Não foi possível carregar as safras.");
            }
        }
    });

    let season_ids = Memo::new(move |_| seasons.with(|all| selected.with(|sel| ordered_season_ids(all, sel))));
    let season_options = Memo::new(move |_| {
        seasons.with(|all| selected.with(|sel| selected_season_options(all, sel)))
    });

    view! {
        <PageFrame page_id="d402_field_cost--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Custo de Produção">
                <Select
                    label="Exibir"
                    value=Signal::derive(move || unit.get().code().to_string())
                    options=Signal::derive(cost_unit_options)
                    on_change=Callback::new(move |code: String| unit.set(CostUnit::from_code(&code)))
                />
            </PageHeader>

            <div class="page__filters">
                <DateInput
                    label="Data inicial"
                    value=Signal::derive(move || date_range.get().start)
                    on_change=Callback::new(move |start: Option<NaiveDate>| {
                        date_range.update(|r| r.start = start)
                    })
                />
                <DateInput
                    label="Data final"
                    value=Signal::derive(move || date_range.get().end)
                    on_change=Callback::new(move |end: Option<NaiveDate>| {
                        date_range.update(|r| r.end = end)
                    })
                />
                <div class="page__filter-group">
                    <div class="form__label">"Safras"</div>
                    <CheckboxGroup value=selected>
                        <div class="checkbox-row">
                            {move || seasons.get().into_iter().map(|season| {
                                view! { <Checkbox value=season.option_value() label=season.nome /> }
                            }).collect_view()}
                        </div>
                    </CheckboxGroup>
                </div>
            </div>

            <div class="page__content">
                <TalhaoCost
                    season_ids=season_ids
                    season_options=season_options
                    date_range=date_range
                    unit=unit
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seasons() -> Vec<CropSeason> {
        vec![
            CropSeason { id: 4, nome: "Soja 23/24".to_string() },
            CropSeason { id: 5, nome: "Milho 2024".to_string() },
            CropSeason { id: 6, nome: "Trigo 2024".to_string() },
        ]
    }

    #[test]
    fn test_selection_keeps_service_order() {
        let selected = HashSet::from(["6".to_string(), "4".to_string()]);
        assert_eq!(ordered_season_ids(&seasons(), &selected), vec!["4", "6"]);

        let options = selected_season_options(&seasons(), &selected);
        assert_eq!(options.to_pairs(), vec![
            ("4".to_string(), "Soja 23/24".to_string()),
            ("6".to_string(), "Trigo 2024".to_string()),
        ]);
    }

    #[test]
    fn test_no_selection_means_no_seasons() {
        assert!(ordered_season_ids(&seasons(), &HashSet::new()).is_empty());
    }
}
