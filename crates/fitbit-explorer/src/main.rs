mod bootstrap;

use anyhow::Result;
use explorer_core::formatting::render_table;
use explorer_core::settings::{Command, Settings};
use explorer_core::table::Table;
use explorer_data::csv_combiner::read_files_matching;
use explorer_data::report::{count_missing_data, print_columns};
use explorer_data::sleep::read_sleep;
use explorer_data::summary::read_and_combine_summaries;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Fitbit Explorer v{} starting", env!("CARGO_PKG_VERSION"));
    let layout = settings.layout();
    tracing::info!("Data directory: {}", layout.base_dir().display());

    let (table, name) = match &settings.command {
        Command::Csv { dir, pattern, name } => {
            tracing::info!("Combining {} files in {}", pattern, dir.display());
            (read_files_matching(dir, pattern)?, name.clone())
        }
        Command::Sleep { name } => {
            tracing::info!("Reading sleep logs from {}", layout.sleep_dir().display());
            (read_sleep(&layout)?, name.clone())
        }
        Command::Summaries { metrics } => {
            tracing::info!("Combining summaries: {}", metrics.join(", "));
            (read_and_combine_summaries(&layout, metrics.as_slice())?, "summaries".to_string())
        }
    };

    show(&table, &name, settings.rows)
}

/// Print the column listing, the missing-data report and a preview of `table`.
fn show(table: &Table, name: &str, rows: usize) -> Result<()> {
    print_columns(table, name)?;

    let missing = count_missing_data(table);
    if missing.is_empty() {
        println!("No missing values.");
    } else {
        println!("Missing values:");
        print!("{}", missing);
    }
    println!();

    print!("{}", render_table(table, rows));
    Ok(())
}
