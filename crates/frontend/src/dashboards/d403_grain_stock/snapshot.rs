use contracts::dashboards::d403_grain_stock::ProducerGrainStock;

use crate::shared::number_format::format_kg;
use crate::shared::snapshot::SvgCard;

pub const SNAPSHOT_TITLE: &str = "VISÃO DETALHADA";

const WIDTH: u32 = 960;
const HEIGHT: u32 = 300;
const MARGIN: f64 = 24.0;
const COLUMN_WIDTH: f64 = 130.0;

pub fn detail_snapshot_filename(producer: &ProducerGrainStock) -> String {
    format!("SALDO {} - {}.png", producer.produtor, SNAPSHOT_TITLE)
}

/// Detail card of one producer as drawn on screen: balances, inflows and outflows.
pub fn detail_snapshot(producer: &ProducerGrainStock) -> SvgCard {
    let mut card = SvgCard::new(WIDTH, HEIGHT);

    card.text(MARGIN, 40.0, 18, true, &format!("{} - {}", SNAPSHOT_TITLE, producer.produtor));
    card.text(
        MARGIN,
        72.0,
        13,
        false,
        &format!(
            "Saldo Anterior: {}    Saldo Final: {}",
            format_kg(producer.saldo_anterior),
            format_kg(producer.saldo_final)
        ),
    );

    let inflows = &producer.entradas;
    table_row(&mut card, 100.0, "ENTRADAS", &[
        ("Peso (Bruto - Tara)", inflows.peso),
        ("Desc. Classific.", inflows.desconto_classificacao),
        ("Taxa Recepção", inflows.taxa_recepcao),
        ("Cota Capital", inflows.cota_capital),
        ("Taxa Armazenamento", inflows.taxa_armazenamento),
        ("Quebra Técnica", inflows.quebra_tecnica),
        ("Peso Líquido", inflows.peso_liquido),
    ]);

    let outflows = &producer.saidas;
    table_row(&mut card, 190.0, "SAÍDAS", &[
        ("Peso (Bruto - Tara)", outflows.peso),
        ("Desc. Classific.", outflows.desconto_classificacao),
        ("Peso Líquido", outflows.peso_liquido),
    ]);

    card
}

fn table_row(card: &mut SvgCard, top: f64, heading: &str, cells: &[(&str, f64)]) {
    card.text(MARGIN, top + 16.0, 14, true, heading);
    card.rule(top + 26.0);
    for (i, (label, value)) in cells.iter().enumerate() {
        let x = MARGIN + i as f64 * COLUMN_WIDTH;
        card.caption(x, top + 46.0, label);
        card.text(x, top + 68.0, 13, false, &format_kg(*value));
    }
}
