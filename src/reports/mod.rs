use bike_tricks::api::{BatchEntry, RideLogView};
use bike_tricks::tricks::TrickSequence;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn print_sequence(signature: &str, seq: &TrickSequence, precision: usize) {
    println!("\nSignature: {}", signature);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Trick").add_attribute(Attribute::Bold),
        Cell::new("Reps"),
        Cell::new("Mod"),
        Cell::new("Bonus").fg(Color::Green),
        Cell::new("Score").fg(Color::Cyan),
    ]);

    for i in [0, 2, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, trick) in seq.tricks().iter().enumerate() {
        let bonus = trick
            .bonus()
            .map(|b| format!("{} (x{:.1})", b, b.multiplier()))
            .unwrap_or_default();

        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{} ({})", trick.action(), trick.action_letter())),
            Cell::new(trick.repetition_count()),
            Cell::new(trick.difficulty_modifier()),
            Cell::new(bonus).fg(Color::Green),
            Cell::new(format!("{:.*}", precision, trick.score())).fg(Color::Cyan),
        ]);
    }

    println!("{}", table);
    println!(
        "Difficulty: {:.2}  ({} tricks, {} bonuses)",
        seq.difficulty(),
        seq.len(),
        seq.bonus_count()
    );
}

pub fn print_batch_summary(entries: &[BatchEntry]) {
    println!("\n=== BATCH SUMMARY ===");

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Signature").add_attribute(Attribute::Bold),
        Cell::new("Tricks"),
        Cell::new("Bonuses").fg(Color::Green),
        Cell::new("Difficulty").fg(Color::Cyan),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for entry in entries {
        match (&entry.sequence, &entry.error) {
            (Some(seq), _) => table.add_row(vec![
                Cell::new(&entry.signature).add_attribute(Attribute::Bold),
                Cell::new(seq.len()),
                Cell::new(seq.bonus_count()).fg(Color::Green),
                Cell::new(format!("{:.2}", seq.difficulty())).fg(Color::Cyan),
            ]),
            (None, err) => table.add_row(vec![
                Cell::new(&entry.signature).add_attribute(Attribute::Bold),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new(err.as_deref().unwrap_or("error")).fg(Color::Red),
            ]),
        };
    }

    println!("{}", table);
}

pub fn print_ride_log(view: &RideLogView) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![Cell::new("Date"), Cell::new(view.date.format("%Y-%m-%d"))]);
    table.add_row(vec![Cell::new("Start"), Cell::new(&view.start_location)]);
    table.add_row(vec![Cell::new("End"), Cell::new(&view.end_location)]);
    table.add_row(vec![Cell::new("Route"), Cell::new(&view.route_name)]);
    table.add_row(vec![Cell::new("Signature"), Cell::new(&view.signature)]);

    println!("{}", table);
    println!("{}", view.summary);
}
