use contracts::dashboards::d403_grain_stock::ProducerGrainStock;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d403_grain_stock::snapshot::{detail_snapshot, detail_snapshot_filename};
use crate::layout::toast_service::use_toasts;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::number_format::format_kg;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use crate::shared::report_view::drilldown::{default_key, drilldown_options, select_or};
use crate::shared::snapshot::download_card_png;

/// Detailed ledger of one producer picked from the loaded collection.
#[component]
pub fn ProducerDetails(#[prop(into)] producers: Signal<Vec<ProducerGrainStock>>) -> impl IntoView {
    let toasts = use_toasts();
    let selected = RwSignal::new(String::new());

    Effect::new(move |_| {
        let key = producers.with(|items| default_key(items));
        selected.set(key);
    });

    let options = Memo::new(move |_| producers.with(|items| drilldown_options(items)));
    let current = Memo::new(move |_| {
        let key = selected.get();
        producers.with(|items| select_or(items, &key, ProducerGrainStock::none))
    });

    let kg = move |f: fn(&ProducerGrainStock) -> f64| move || current.with(|p| format_kg(f(p)));

    let on_save = move |_| {
        let producer = current.get_untracked();
        spawn_local(async move {
            let filename = detail_snapshot_filename(&producer);
            match download_card_png(&detail_snapshot(&producer), &filename).await {
                Ok(()) => toasts.success("Imagem salva."),
                Err(e) => {
                    log::warn!("Detail snapshot failed: {}", e);
                    toasts.danger("Não foi possível salvar a imagem.");
                }
            }
        });
    };

    view! {
        <PageFrame page_id="d403_grain_stock--report" category=PAGE_CAT_REPORT>
            <header class="report-card__header">
                <h3>"VISÃO DETALHADA"</h3>
                <Select
                    value=selected
                    options=options
                    on_change=Callback::new(move |id: String| selected.set(id))
                />
                <Button appearance=ButtonAppearance::Subtle on_click=on_save attr:title="Salvar imagem">
                    {icon("download")}
                </Button>
            </header>

            <div class="report-card__total">
                <span>
                    <strong>"Saldo Anterior: "</strong>
                    {kg(|p| p.saldo_anterior)}
                </span>
                <span>
                    <strong>"Saldo Final: "</strong>
                    {kg(|p| p.saldo_final)}
                </span>
            </div>

            <section>
                <h4>"Entradas"</h4>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Peso (Bruto - Tara)"</TableHeaderCell>
                            <TableHeaderCell>"Desc. Classific."</TableHeaderCell>
                            <TableHeaderCell>"Taxa Recepção"</TableHeaderCell>
                            <TableHeaderCell>"Cota Capital"</TableHeaderCell>
                            <TableHeaderCell>"Taxa Armazenamento"</TableHeaderCell>
                            <TableHeaderCell>"Quebra Técnica"</TableHeaderCell>
                            <TableHeaderCell>"Peso Líquido"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <TableRow>
                            <TableCell><TableCellLayout>{kg(|p| p.entradas.peso)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{kg(|p| p.entradas.desconto_classificacao)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{kg(|p| p.entradas.taxa_recepcao)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{kg(|p| p.entradas.cota_capital)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{kg(|p| p.entradas.taxa_armazenamento)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{kg(|p| p.entradas.quebra_tecnica)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout><strong>{kg(|p| p.entradas.peso_liquido)}</strong></TableCellLayout></TableCell>
                        </TableRow>
                    </TableBody>
                </Table>
            </section>

            <section>
                <h4>"Saídas"</h4>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Peso (Bruto - Tara)"</TableHeaderCell>
                            <TableHeaderCell>"Desc. Classific."</TableHeaderCell>
                            <TableHeaderCell>"Peso Líquido"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <TableRow>
                            <TableCell><TableCellLayout>{kg(|p| p.saidas.peso)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{kg(|p| p.saidas.desconto_classificacao)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout><strong>{kg(|p| p.saidas.peso_liquido)}</strong></TableCellLayout></TableCell>
                        </TableRow>
                    </TableBody>
                </Table>
            </section>
        </PageFrame>
    }
}
