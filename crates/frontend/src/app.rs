use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::ToastService;
use crate::routes::routes::AppRoutes;
use crate::system::permissions::PermissionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    view! {
        <PermissionProvider>
            <AppRoutes />
        </PermissionProvider>
    }
}
