//! Sidebar with the report pages grouped by area.

use crate::layout::global_context::AppGlobalContext;
use crate::routes::PageKey;
use crate::shared::icons::icon;
use crate::system::permissions::use_permissions;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<PageKey>,
}

/// Pages grouped by section, in first-appearance order.
fn menu_groups() -> Vec<MenuGroup> {
    let mut groups: Vec<MenuGroup> = Vec::new();
    for key in PageKey::ALL {
        match groups.iter_mut().find(|g| g.label == key.section()) {
            Some(group) => group.items.push(key),
            None => groups.push(MenuGroup {
                label: key.section(),
                items: vec![key],
            }),
        }
    }
    groups
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let permissions = use_permissions();

    let collapsed_groups = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <div class="app-sidebar__content">
            <strong class="app-sidebar__brand">{icon("bar-chart")} " Safra BI"</strong>
            <nav>
                {menu_groups().into_iter().map(|group| {
                    let label = group.label;
                    let items = StoredValue::new(group.items);
                    view! {
                        <div class="app-sidebar__group">
                            <div
                                class="app-sidebar__group-title"
                                on:click=move |_| {
                                    collapsed_groups.update(|items| {
                                        if let Some(pos) = items.iter().position(|x| *x == label) {
                                            items.remove(pos);
                                        } else {
                                            items.push(label);
                                        }
                                    });
                                }
                            >
                                <p>{label}</p>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || !collapsed_groups.get().contains(&label)
                                >
                                    {icon("chevron-down")}
                                </div>
                            </div>
                            <Show when=move || !collapsed_groups.get().contains(&label)>
                                {items.get_value().into_iter().map(|key| {
                                    view! {
                                        <a
                                            href=key.path()
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.is_active(key)
                                            class:app-sidebar__item--locked=move || {
                                                !permissions.is_pending() && !permissions.has_permission(key.permission())
                                            }
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                ctx.navigate(key);
                                            }
                                        >
                                            {icon(key.icon())}
                                            <span>{key.title()}</span>
                                        </a>
                                    }
                                }).collect_view()}
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_groups_keep_page_order() {
        let groups = menu_groups();
        let labels: Vec<_> = groups.iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Financeiro", "Abastecimento", "Produção", "Armazenagem"]);
        assert_eq!(groups[2].items, vec![PageKey::FieldCost, PageKey::Production]);
        let total: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(total, PageKey::ALL.len());
    }
}
