//! Horizontal bar chart showing a long series seven bars at a time.

use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::report_view::ChartPager;

/// Longer labels are cut and suffixed with `...`.
pub const LABEL_MAX_CHARS: usize = 40;

/// Headroom above the largest bar.
const SCALE_HEADROOM: f64 = 1.2;

pub const EMPTY_CHART_MESSAGE: &str = "Nenhum dado encontrado";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    /// Hover text; defaults to the full label.
    pub detail: Option<String>,
    pub value: f64,
}

impl ChartBar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            detail: None,
            value,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Builds bars from parallel label/value series; extra items on either side are ignored.
pub fn bars_from_series(labels: Vec<String>, values: Vec<f64>) -> Vec<ChartBar> {
    labels
        .into_iter()
        .zip(values)
        .map(|(label, value)| ChartBar::new(label, value))
        .collect()
}

pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let cut: String = label.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

/// Scale maximum of the whole series, not only the visible page.
pub fn scale_max(bars: &[ChartBar]) -> f64 {
    let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * SCALE_HEADROOM
    } else {
        1.0
    }
}

pub fn bar_width_percent(value: f64, scale_max: f64) -> f64 {
    if scale_max <= 0.0 {
        return 0.0;
    }
    (value / scale_max * 100.0).clamp(0.0, 100.0)
}

/// The pager returns to the first page only when the series itself changed.
fn needs_reset(previous: Option<&[ChartBar]>, current: &[ChartBar]) -> bool {
    previous.map_or(true, |prev| prev != current)
}

#[component]
pub fn PagedBarChart(
    #[prop(into)] bars: Signal<Vec<ChartBar>>,
    /// Renders the value next to each bar.
    format_value: fn(f64) -> String,
) -> impl IntoView {
    let pager = RwSignal::new(ChartPager::new(0));

    Effect::new(move |previous: Option<Vec<ChartBar>>| {
        let current = bars.get();
        if needs_reset(previous.as_deref(), &current) {
            pager.update(|p| p.reset(current.len()));
        }
        current
    });

    let scale = Memo::new(move |_| bars.with(|b| scale_max(b)));
    let visible = move || {
        let p = pager.get();
        bars.with(|b| p.window(b).to_vec())
    };

    view! {
        <div class="bar-chart">
            {move || {
                if bars.with(|b| b.is_empty()) {
                    view! { <div class="bar-chart__empty">{EMPTY_CHART_MESSAGE}</div> }.into_any()
                } else {
                    view! {
                        <div class="bar-chart__bars">
                            {visible().into_iter().map(|bar| {
                                let width = bar_width_percent(bar.value, scale.get_untracked());
                                let hover = bar.detail.clone().unwrap_or_else(|| bar.label.clone());
                                view! {
                                    <div class="bar-chart__row" title=hover>
                                        <span class="bar-chart__label">
                                            {truncate_label(&bar.label, LABEL_MAX_CHARS)}
                                        </span>
                                        <div class="bar-chart__track">
                                            <div
                                                class="bar-chart__bar"
                                                style:width=format!("{:.2}%", width)
                                            ></div>
                                        </div>
                                        <span class="bar-chart__value">{format_value(bar.value)}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}

            <Show when=move || pager.with(|p| p.shows_controls())>
                <div class="bar-chart__pager">
                    <Show when=move || pager.with(|p| p.has_previous())>
                        <button
                            class="pagination-btn"
                            title="Anterior"
                            on:click=move |_| pager.update(|p| p.previous())
                        >
                            {icon("chevron-left")}
                        </button>
                    </Show>
                    <span class="pagination-info">
                        {move || pager.with(|p| format!("{} / {}", p.page() + 1, p.page_count().max(1)))}
                    </span>
                    <Show when=move || pager.with(|p| p.has_next())>
                        <button
                            class="pagination-btn"
                            title="Próximo"
                            on:click=move |_| pager.update(|p| p.next())
                        >
                            {icon("chevron-right")}
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_labels_are_truncated() {
        let long = "TALHÃO 12 - SOJA INTACTA RR2 PRO - SAFRA 2023/2024 PLANTIO CEDO";
        let cut = truncate_label(long, LABEL_MAX_CHARS);
        assert_eq!(cut.chars().count(), LABEL_MAX_CHARS + 3);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_label("TALHÃO 3", LABEL_MAX_CHARS), "TALHÃO 3");
    }

    #[test]
    fn test_scale_leaves_headroom() {
        let bars = vec![ChartBar::new("a", 50.0), ChartBar::new("b", 100.0)];
        assert!((scale_max(&bars) - 120.0).abs() < 1e-9);
        assert!((bar_width_percent(60.0, 120.0) - 50.0).abs() < 1e-9);
        assert_eq!(scale_max(&[]), 1.0);
        assert_eq!(bar_width_percent(-5.0, 120.0), 0.0);
    }

    #[test]
    fn test_reset_only_when_series_changes() {
        let bars = vec![ChartBar::new("MARIA", 1200.0), ChartBar::new("JOSÉ", 80.0)];
        assert!(needs_reset(None, &bars));
        assert!(!needs_reset(Some(bars.as_slice()), &bars.clone()));

        let mut changed = bars.clone();
        changed[1].value = 90.0;
        assert!(needs_reset(Some(bars.as_slice()), &changed));
        assert!(needs_reset(Some(bars.as_slice()), &bars[..1]));
    }

    #[test]
    fn test_series_zip() {
        let bars = bars_from_series(
            vec!["UMIDADE".to_string(), "IMPUREZA".to_string()],
            vec![120.5, 33.0, 9.0],
        );
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1], ChartBar::new("IMPUREZA", 33.0));
    }
}
