use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::rate::Rate;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_catalog_table(current: Rate) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Name", "Off-peak", "Holidays"]);
    for rate in Rate::ALL {
        let is_current = rate == current;
        let mut name = Cell::new(rate.name());
        if is_current {
            name = name.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            Cell::new(if is_current { "●" } else { "" }).fg(Color::Green),
            name,
            Cell::new(format!("{:02}:00–{:02}:00", rate.start_hour(), rate.end_hour())),
            Cell::new(rate.holidays().iter().join(", ")).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

/// One column per hour of a regular day, off-peak hours highlighted.
pub fn build_hours_table(rate: Rate) -> Table {
    let mut table = new_table();
    table.set_header((0..24).map(|hour| {
        Cell::new(format!("{hour:02}")).set_alignment(CellAlignment::Center)
    }));
    table.add_row((0..24).map(|hour| {
        if rate.is_off_peak_hour(hour) {
            Cell::new("▼").fg(Color::Green).set_alignment(CellAlignment::Center)
        } else {
            Cell::new("·").add_attribute(Attribute::Dim).set_alignment(CellAlignment::Center)
        }
    }));
    table
}
