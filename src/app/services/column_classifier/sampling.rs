//! Column sampling for value-based classification

use crate::app::models::RawRow;

/// Collect up to `sample_size` non-empty values per column
///
/// Rows are visited in order, so samples come from the top of the source.
pub fn sample_columns<'a, I>(rows: I, column_count: usize, sample_size: usize) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut samples = vec![Vec::new(); column_count];
    if sample_size == 0 {
        return samples;
    }

    for row in rows {
        for (index, column) in samples.iter_mut().enumerate() {
            if column.len() < sample_size {
                if let Some(value) = row.value(index) {
                    column.push(value.to_string());
                }
            }
        }
        if samples.iter().all(|column| column.len() >= sample_size) {
            break;
        }
    }

    samples
}
