use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use typestrike::config::SessionPlan;
use typestrike::segmenter::{canonical_spelling, Group};
use typestrike::session::{FinishReason, SessionSummary};

pub fn print_group_table(phrase: &str, groups: &[Group]) {
    println!("\nPhrase: {}", phrase);
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Source").add_attribute(Attribute::Bold),
        Cell::new("Spellings"),
        Cell::new("Kind"),
    ]);

    for (i, g) in groups.iter().enumerate() {
        let kind = if g.is_passthrough() {
            Cell::new("literal").fg(Color::Yellow)
        } else {
            Cell::new("dict").fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(i).set_alignment(CellAlignment::Right),
            Cell::new(&g.source_units).set_alignment(CellAlignment::Center),
            Cell::new(g.romanizations.join(" / ")),
            kind,
        ]);
    }
    println!("{}", table);
    println!("Guide: {}", canonical_spelling(groups));
}

pub fn print_summary(plan: &SessionPlan, summary: &SessionSummary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let reason_color = match summary.reason {
        FinishReason::Cleared => Color::Green,
        FinishReason::TimedOut => Color::Yellow,
        FinishReason::Aborted => Color::Red,
    };

    table.add_row(vec![
        Cell::new("Result").add_attribute(Attribute::Bold),
        Cell::new(summary.reason).fg(reason_color),
    ]);
    table.add_row(vec![
        Cell::new("Mode"),
        Cell::new(format!("{} / {}", plan.mode, plan.difficulty)),
    ]);
    table.add_row(vec![
        Cell::new("Time"),
        Cell::new(format!("{:.2}s", summary.elapsed_time)),
    ]);
    table.add_row(vec![
        Cell::new("Damage").fg(Color::Cyan),
        Cell::new(format!("{} / {}", summary.total_damage, plan.max_hp)),
    ]);
    table.add_row(vec![Cell::new("Correct"), Cell::new(summary.correct_count)]);
    table.add_row(vec![
        Cell::new("Miss").fg(Color::Red),
        Cell::new(summary.miss_count),
    ]);
    table.add_row(vec![Cell::new("Max Combo"), Cell::new(summary.max_combo)]);
    table.add_row(vec![
        Cell::new("Questions"),
        Cell::new(summary.questions_cleared),
    ]);
    table.add_row(vec![
        Cell::new("Speed"),
        Cell::new(format!("{:.2} /s", summary.keys_per_second)),
    ]);
    table.add_row(vec![
        Cell::new("Rankable"),
        Cell::new(if summary.ranking_eligible { "yes" } else { "no" }),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}
