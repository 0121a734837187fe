//! Batch index helpers over caller-owned tables.
//!
//! Both helpers take exclusive borrows of every table they touch and change
//! them in place; nothing is returned except the error of a failed promotion.

use explorer_core::error::Result;
use explorer_core::table::Table;
use tracing::debug;

/// Give each table a fresh `0..n` positional index.
///
/// Stacked tables repeat their per-file row labels; after this call every
/// label is unique. Unnamed indexes are discarded rather than kept as a
/// stray column.
pub fn reset_indexes<'a, I>(tables: I)
where
    I: IntoIterator<Item = &'a mut Table>,
{
    let mut count = 0;
    for table in tables {
        table.reset_index();
        count += 1;
    }
    debug!("Reset the index of {} tables", count);
}

/// Promote `field` to the row index of each table, in order.
///
/// Stops at the first table lacking the column; tables before it have
/// already been changed.
pub fn set_indexes<'a, I>(tables: I, field: &str) -> Result<()>
where
    I: IntoIterator<Item = &'a mut Table>,
{
    for table in tables {
        table.set_index(field)?;
    }
    Ok(())
}
