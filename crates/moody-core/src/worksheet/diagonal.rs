use super::{Worksheet, middle_value};

/// Cumulative correction for the two diagonals (columns 5 and 6): a linear
/// de-trend that zeroes the line at its middle and leaves both endpoints
/// at the same corrected height, so the diagonal's corners can seed the
/// perimeter lines.
pub(super) fn reconcile(worksheet: &mut Worksheet) {
    let stations = worksheet.stations;
    let end_sum = worksheet.cumulative[stations];

    let slope = -end_sum / stations as f64;
    let intercept = 0.5 * end_sum - middle_value(&worksheet.cumulative);

    for j in 0..=stations {
        worksheet.correction[j] = slope * j as f64 + intercept;
        worksheet.datum[j] = worksheet.cumulative[j] + worksheet.correction[j];
    }
}
