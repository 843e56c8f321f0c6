use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use horsedebug::scan::GroupScan;
use horsedebug::scoring::StatKind;
use horsedebug::stats::{significant_numbers, DisplayStrategy};
use strum::IntoEnumIterator;

fn stat_cell(value: f64, best: bool) -> Cell {
    let cell = Cell::new(significant_numbers(value)).set_alignment(CellAlignment::Right);
    if best {
        cell.fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

pub fn print_group_report(scan: &GroupScan<'_>) {
    println!("\n🐴 === BEST IN GROUP === 🐴");
    if scan.is_empty() {
        println!("No horse-like entities within range.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Id", "Type", "Name", "Dist²", "Jump", "Health", "Speed", "Score",
        ]);

    for (entry, flags) in scan.flagged() {
        let e = entry.entity;
        let mut row = vec![
            Cell::new(e.id),
            Cell::new(&e.type_id),
            Cell::new(&e.display_name),
            Cell::new(format!("{:.1}", entry.squared_distance)).set_alignment(CellAlignment::Right),
        ];
        // Header columns follow StatKind order.
        row.extend(StatKind::iter().map(|kind| stat_cell(entry.stats.get(kind), flags.get(kind))));
        row.push(stat_cell(entry.stats.score, flags.score));
        table.add_row(row);
    }
    println!("{table}");

    let best = scan.best();
    let parts: Vec<String> = StatKind::iter()
        .map(|kind| format!("{} {}", kind, significant_numbers(best.get(kind))))
        .collect();
    println!(
        "Best: {} | score {}",
        parts.join(" | "),
        significant_numbers(best.score)
    );
}

pub fn print_stat_table() {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Stat", "Attribute", "Bad", "Excellent", "Scale", "Display"]);

    for kind in StatKind::iter() {
        let stat = kind.stat();
        let display = match stat.display() {
            DisplayStrategy::Linear(k) => format!("linear ×{}", k),
            DisplayStrategy::Curve(_) => "curve".to_string(),
        };
        table.add_row(vec![
            Cell::new(kind.to_string()),
            Cell::new(kind.attribute().to_string()),
            Cell::new(significant_numbers(stat.bad_value())).set_alignment(CellAlignment::Right),
            Cell::new(significant_numbers(stat.excellent_value())).set_alignment(CellAlignment::Right),
            Cell::new(stat.scale()).set_alignment(CellAlignment::Right),
            Cell::new(display),
        ]);
    }
    println!("{table}");
}
