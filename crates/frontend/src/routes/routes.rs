use crate::dashboards::{
    FieldCostDashboard, FinancialViewsDashboard, FuelDetailsDashboard, GrainStockDashboard,
    ProductionDashboard,
};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::routes::PageKey;
use leptos::prelude::*;

/// Page component for a route key.
pub fn render_page(key: PageKey) -> AnyView {
    match key {
        PageKey::FinancialIndicators => view! { <FinancialViewsDashboard /> }.into_any(),
        PageKey::FuelDetails => view! { <FuelDetailsDashboard /> }.into_any(),
        PageKey::FieldCost => view! { <FieldCostDashboard /> }.into_any(),
        PageKey::GrainStock => view! { <GrainStockDashboard /> }.into_any(),
        PageKey::Production => view! { <ProductionDashboard /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Follows browser back/forward. Runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                // Each page owns its state, so switching pages rebuilds it.
                let active = Memo::new(move |_| ctx.active.get());
                view! { {move || render_page(active.get())} }.into_any()
            }
        />
    }
}
