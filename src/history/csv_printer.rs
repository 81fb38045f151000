use std::io::Write;

use anyhow::Context;
use csv::Writer;

use crate::account::Movement;

/// Writes `movements` with a `date,kind,amount` header, readable again by
/// [`read_movements`](super::read_movements).
pub fn write_movements<'a, W>(
    output: &mut W,
    movements: impl IntoIterator<Item = &'a Movement>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for movement in movements {
        writer.serialize(movement).with_context(|| {
            format!(
                "Failed to write {:?} of {} dated {}",
                movement.kind(),
                movement.amount(),
                movement.date()
            )
        })?;
    }
    writer.flush().context("Failed to flush movement history")
}
