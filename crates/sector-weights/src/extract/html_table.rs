//! Extract sector weights from the fund page's treemap data table.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, SectorError};
use crate::types::SectorWeights;

/// Location of the sector table inside the fund page.
pub const TABLE_SELECTOR: &str = ".chart-treemap .ssmp-table > .data-table";

/// Parse the page and read every two-cell row of the sector table.
///
/// Rows with any other cell count (headers, footnotes) are skipped. The
/// weight cell has its `%` stripped.
pub fn extract_html_table(body: &str) -> Result<SectorWeights> {
    let document = Html::parse_document(body);
    let table_sel = Selector::parse(TABLE_SELECTOR).expect("valid selector");
    let row_sel = Selector::parse("tr").expect("valid selector");
    let cell_sel = Selector::parse("td").expect("valid selector");

    let table = document.select(&table_sel).next().ok_or_else(|| {
        SectorError::StructuralElementMissing {
            selector: TABLE_SELECTOR.to_string(),
        }
    })?;

    let mut weights = SectorWeights::new();
    for row in table.select(&row_sel) {
        let cells: Vec<ElementRef> = row.select(&cell_sel).collect();
        if cells.len() != 2 {
            continue;
        }
        let sector = cell_text(&cells[0]);
        let weight = cell_text(&cells[1]);
        weights.insert(sector, weight.trim_matches('%'));
    }

    tracing::debug!(sectors = weights.len(), "parsed sector table");
    Ok(weights)
}

/// Text of an element with each text node trimmed and the pieces joined.
fn cell_text(el: &ElementRef) -> String {
    el.text().map(str::trim).collect()
}
