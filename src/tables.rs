use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{production::ProductionTable, quantity::power::Kilowatts};

pub fn build_production_table(production: &ProductionTable) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Timestamp", "Power"]);
    for record in production {
        table.add_row(vec![
            Cell::new(record.timestamp.to_rfc3339()).add_attribute(Attribute::Dim),
            Cell::new(record.power)
                .set_alignment(CellAlignment::Right)
                .fg(if record.power > Kilowatts::ZERO { Color::Green } else { Color::DarkYellow }),
        ]);
    }
    table
}
