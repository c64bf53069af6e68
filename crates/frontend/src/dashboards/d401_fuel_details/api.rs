use contracts::dashboards::d401_fuel_details::{FuelDetailLine, FuelDetailsQuery};
use contracts::shared::options::{OptionList, ALL_LABEL};

use crate::domain::a001_asset::api::fetch_assets;
use crate::domain::a002_warehouse::api::fetch_warehouses;
use crate::domain::a003_asset_type::api::fetch_asset_types;
use crate::shared::api_utils::get_json;

/// Select options of the fuel summary filters, each starting with "Todos".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuelFilterOptions {
    pub assets: OptionList,
    pub warehouses: OptionList,
    pub asset_types: OptionList,
}

impl FuelFilterOptions {
    /// Only the "Todos" entry, shown until the reference lists arrive.
    pub fn placeholder() -> Self {
        let all = || {
            let mut list = OptionList::default();
            list.prepend_all(ALL_LABEL);
            list
        };
        Self {
            assets: all(),
            warehouses: all(),
            asset_types: all(),
        }
    }
}

/// Loads the three reference lists concurrently; any failure fails the whole load.
pub async fn fetch_filter_options() -> Result<FuelFilterOptions, String> {
    let (assets, warehouses, asset_types) =
        futures::try_join!(fetch_assets(), fetch_warehouses(), fetch_asset_types())?;

    log::debug!(
        "Fuel filter options: {} assets, {} warehouses, {} asset types",
        assets.len(),
        warehouses.len(),
        asset_types.len()
    );

    Ok(FuelFilterOptions {
        assets: OptionList::with_all(ALL_LABEL, &assets),
        warehouses: OptionList::with_all(ALL_LABEL, &warehouses),
        asset_types: OptionList::with_all(ALL_LABEL, &asset_types),
    })
}

pub async fn fetch_fuel_details(query: FuelDetailsQuery) -> Result<Vec<FuelDetailLine>, String> {
    get_json("/api/abastecimentos/detalhes", &query.to_query_pairs()).await
}
