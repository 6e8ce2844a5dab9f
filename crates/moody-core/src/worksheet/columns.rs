use super::Worksheet;

/// Worksheet columns 3 and 4: angular displacement relative to the first
/// reading, and its running sum.
///
/// Station 0 has no reading, so the first measured station (index 1) is
/// the displacement reference; the sum starts accumulating at station 2.
pub(super) fn build_first_four(worksheet: &mut Worksheet) {
    let stations = worksheet.stations;

    for j in 1..=stations {
        worksheet.displacement[j] = worksheet.reading[j] - worksheet.reading[1];
    }

    worksheet.cumulative[0] = 0.0;
    worksheet.cumulative[1] = 0.0;
    for j in 2..=stations {
        worksheet.cumulative[j] = worksheet.cumulative[j - 1] + worksheet.displacement[j];
    }
}
