//! Output formatting utilities.

use colored::Colorize;
use iterion_math::solvers::IterationRecord;
use nalgebra::DVector;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// One row of the bisection trace table.
#[derive(Debug, Tabled)]
pub struct TraceRow {
    #[tabled(rename = "Iteration")]
    pub iteration: u32,
    #[tabled(rename = "a")]
    pub a: String,
    #[tabled(rename = "b")]
    pub b: String,
    #[tabled(rename = "f(a)")]
    pub fa: String,
    #[tabled(rename = "f(b)")]
    pub fb: String,
    #[tabled(rename = "c")]
    pub c: String,
    #[tabled(rename = "f(c)")]
    pub fc: String,
}

impl From<&IterationRecord> for TraceRow {
    fn from(record: &IterationRecord) -> Self {
        Self {
            iteration: record.index,
            a: format!("{:.6}", record.a),
            b: format!("{:.6}", record.b),
            fa: format!("{:.6}", record.fa),
            fb: format!("{:.6}", record.fb),
            c: format!("{:.6}", record.c),
            fc: format!("{:.6}", record.fc),
        }
    }
}

/// Prints the bisection iteration trace as a table.
pub fn print_trace(trace: &[IterationRecord]) {
    if trace.is_empty() {
        println!("(converged without recorded iterations)");
        return;
    }

    let rows: Vec<TraceRow> = trace.iter().map(TraceRow::from).collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Prints the Gauss-Seidel sweep history as a table, one column per
/// unknown.
pub fn print_sweep_history(history: &[DVector<f64>]) {
    let Some(first) = history.first() else {
        println!("(no sweeps recorded)");
        return;
    };

    let mut builder = Builder::default();
    let mut header = vec!["Iteration".to_string()];
    header.extend((1..=first.len()).map(|i| format!("x{i}")));
    builder.push_record(header);

    for (sweep, x) in history.iter().enumerate() {
        let mut row = vec![(sweep + 1).to_string()];
        row.extend(x.iter().map(|value| format!("{value:.6}")));
        builder.push_record(row);
    }

    let table = builder.build().with(Style::rounded()).to_string();
    println!("{}", table);
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message.green());
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}
