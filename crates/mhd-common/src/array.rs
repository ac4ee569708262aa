//! The three list conventions of the MHD format.
//!
//! Each convention has its own combinator so call sites cannot silently swap
//! them:
//!
//! - [`read_counted_array`]: int32 count `N`, then `N` elements.
//! - [`read_off_by_one_array`]: int32 count `N`, then `N + 1` elements. The
//!   trailing element is consumed and dropped.
//! - [`read_sentinel_array`]: int32 elements until `-1`, which is consumed
//!   but not kept.
//!
//! A negative count describes zero elements.

use crate::{BinaryReader, BinaryWriter, Result, ResultExt};

/// Terminator of sentinel arrays.
pub const ARRAY_SENTINEL: i32 = -1;

/// Capacity to reserve for `count` elements of `T` with `remaining` input bytes.
///
/// Every element occupies at least one input byte, so a larger count is
/// truncated data. The reservation is also bounded so its size in memory never
/// exceeds the remaining input; the `Vec` grows past that as elements decode.
pub fn preallocation<T>(count: usize, remaining: usize) -> usize {
    let per_element = std::mem::size_of::<T>().max(1);
    count.min(remaining / per_element)
}

/// Read `count` elements, annotating failures with the element index.
fn read_elements<'a, T, F>(
    reader: &mut BinaryReader<'a>,
    count: usize,
    element: &mut F,
) -> Result<Vec<T>>
where
    F: FnMut(&mut BinaryReader<'a>) -> Result<T>,
{
    let mut items = Vec::with_capacity(preallocation::<T>(count, reader.remaining()));
    for index in 0..count {
        items.push(element(reader).with_context(|| format!("[{index}]"))?);
    }
    Ok(items)
}

fn read_count(reader: &mut BinaryReader<'_>) -> Result<usize> {
    let count = reader.read_i32().context(".count")?;
    Ok(usize::try_from(count).unwrap_or(0))
}

/// Read an int32 count followed by that many elements.
pub fn read_counted_array<'a, T, F>(reader: &mut BinaryReader<'a>, mut element: F) -> Result<Vec<T>>
where
    F: FnMut(&mut BinaryReader<'a>) -> Result<T>,
{
    let count = read_count(reader)?;
    read_elements(reader, count, &mut element)
}

/// Read an int32 count `N` followed by `N + 1` elements, keeping the first `N`.
pub fn read_off_by_one_array<'a, T, F>(
    reader: &mut BinaryReader<'a>,
    mut element: F,
) -> Result<Vec<T>>
where
    F: FnMut(&mut BinaryReader<'a>) -> Result<T>,
{
    let declared = reader.read_i32().context(".count")?;
    let stored = usize::try_from(declared.saturating_add(1)).unwrap_or(0);

    let mut items = read_elements(reader, stored, &mut element)?;
    if stored > 0 {
        items.truncate(stored - 1);
    }
    Ok(items)
}

/// Read int32 values until [`ARRAY_SENTINEL`].
pub fn read_sentinel_array(reader: &mut BinaryReader<'_>) -> Result<Vec<i32>> {
    let mut items = Vec::new();
    loop {
        let index = items.len();
        let value = reader.read_i32().with_context(|| format!("[{index}]"))?;
        if value == ARRAY_SENTINEL {
            return Ok(items);
        }
        items.push(value);
    }
}

/// Write an int32 count followed by the elements.
pub fn write_counted_array<T, F>(writer: &mut BinaryWriter, items: &[T], mut element: F)
where
    F: FnMut(&mut BinaryWriter, &T),
{
    writer.write_i32(items.len() as i32);
    for item in items {
        element(writer, item);
    }
}

/// Write the declared count, the elements, then one `trailer` element.
pub fn write_off_by_one_array<T, F>(
    writer: &mut BinaryWriter,
    items: &[T],
    trailer: &T,
    mut element: F,
) where
    F: FnMut(&mut BinaryWriter, &T),
{
    writer.write_i32(items.len() as i32);
    for item in items {
        element(writer, item);
    }
    element(writer, trailer);
}

/// Write the values followed by [`ARRAY_SENTINEL`].
pub fn write_sentinel_array(writer: &mut BinaryWriter, items: &[i32]) {
    debug_assert!(!items.contains(&ARRAY_SENTINEL));
    for &item in items {
        writer.write_i32(item);
    }
    writer.write_i32(ARRAY_SENTINEL);
}
