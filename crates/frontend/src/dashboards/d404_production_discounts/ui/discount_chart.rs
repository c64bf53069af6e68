use contracts::dashboards::d404_production_discounts::{discount_labels, discount_values, DiscountUnit, ProductionDiscount};
use leptos::prelude::*;

use crate::shared::components::paged_bar_chart::{bars_from_series, ChartBar, PagedBarChart};
use crate::shared::number_format::{format_kg, format_percent};

pub fn discount_bars(discounts: &[ProductionDiscount], unit: DiscountUnit) -> Vec<ChartBar> {
    bars_from_series(discount_labels(discounts), discount_values(discounts, unit))
}

fn value_formatter(unit: DiscountUnit) -> fn(f64) -> String {
    match unit {
        DiscountUnit::Kg => format_kg,
        DiscountUnit::Percent => format_percent,
    }
}

/// Classification discounts, seven per page.
#[component]
pub fn DiscountChart(
    #[prop(into)] discounts: Signal<Vec<ProductionDiscount>>,
    #[prop(into)] unit: Signal<DiscountUnit>,
) -> impl IntoView {
    move || {
        let unit = unit.get();
        let bars = Memo::new(move |_| discounts.with(|d| discount_bars(d, unit)));
        view! { <PagedBarChart bars=bars format_value=value_formatter(unit) /> }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::report_view::ChartPager;

    fn discounts(n: usize) -> Vec<ProductionDiscount> {
        (0..n)
            .map(|i| ProductionDiscount {
                descricao: format!("DESCONTO {}", i + 1),
                peso: 100.0 * (i + 1) as f64,
                percentual: (i + 1) as f64,
            })
            .collect()
    }

    #[test]
    fn test_bars_follow_unit() {
        let data = discounts(2);
        assert_eq!(discount_bars(&data, DiscountUnit::Kg)[1].value, 200.0);
        assert_eq!(discount_bars(&data, DiscountUnit::Percent)[1].value, 2.0);
        assert_eq!(value_formatter(DiscountUnit::Kg)(1234.5), "1.234,5 Kg");
        assert_eq!(value_formatter(DiscountUnit::Percent)(2.0), "2%");
    }

    #[test]
    fn test_fifteen_discounts_page_in_sevens() {
        let bars = discount_bars(&discounts(15), DiscountUnit::Kg);
        let mut pager = ChartPager::new(bars.len());

        assert_eq!(pager.page_count(), 3);
        assert!(pager.shows_controls());
        assert!(!pager.has_previous());
        assert_eq!(pager.window(&bars).len(), 7);

        pager.next();
        pager.next();
        assert!(!pager.has_next());
        assert_eq!(pager.window(&bars).len(), 1);
        assert_eq!(pager.window(&bars)[0].label, "DESCONTO 15");
    }
}
