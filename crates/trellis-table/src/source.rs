//! Lazy row population.

use crate::row::Row;

/// Supplies row content on demand for a table created with
/// `virtual_rows = true`.
///
/// `populate` is called at most once per row: the row is marked populated
/// before the call, so touching it again from inside the callback does not
/// recurse. Rows reset by `clear` are requested again on next access.
pub trait RowSource {
    /// Fill in the content of the row at `index`.
    fn populate(&mut self, index: usize, row: &mut Row);
}

impl<F> RowSource for F
where
    F: FnMut(usize, &mut Row),
{
    fn populate(&mut self, index: usize, row: &mut Row) {
        self(index, row);
    }
}
