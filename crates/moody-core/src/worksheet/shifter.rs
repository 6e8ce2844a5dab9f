use super::{Worksheet, middle_value};
use crate::survey::LineClass;

/// Correction-factor pass for perimeter and center lines (columns 5, 6
/// and, for center lines, 6a).
///
/// Precondition: the Corner Propagator has seeded `correction[0]`,
/// `datum[0]` and `datum[N]` from already-solved adjacent lines. The
/// discrepancy between the seeded far endpoint and the raw cumulative sum
/// is spread uniformly over the interior stations, walking from the far
/// end back toward the start.
pub(super) fn shift(worksheet: &mut Worksheet) {
    let stations = worksheet.stations;

    worksheet.correction[stations] = worksheet.datum[stations] - worksheet.cumulative[stations];
    let factor =
        (worksheet.correction[0] - worksheet.correction[stations]) / stations as f64;

    for j in (1..stations).rev() {
        worksheet.correction[j] = worksheet.correction[j + 1] + factor;
        worksheet.datum[j] = worksheet.correction[j] + worksheet.cumulative[j];
    }

    if worksheet.line.class() == LineClass::Center {
        let zero_reference = middle_value(&worksheet.datum);
        for j in 0..=stations {
            worksheet.error_shift[j] = worksheet.datum[j] - zero_reference;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Worksheet, columns, middle_value};
    use super::shift;
    use crate::survey::LineId;

    fn seeded(line: LineId, readings: &[f64], start: f64, end: f64) -> Worksheet {
        let mut worksheet = Worksheet::new(line, readings);
        columns::build_first_four(&mut worksheet);
        worksheet.correction[0] = start;
        worksheet.datum[0] = start;
        let stations = worksheet.stations;
        worksheet.datum[stations] = end;
        worksheet
    }

    #[test]
    fn seeded_endpoints_survive_the_shift_exactly() {
        let mut worksheet = seeded(LineId::NeNw, &[2.0, -1.0, 3.0, 0.5], 4.25, -1.75);
        shift(&mut worksheet);

        assert_eq!(worksheet.datum[0], 4.25);
        assert_eq!(worksheet.datum[worksheet.stations], -1.75);
    }

    #[test]
    fn interior_stations_differ_by_a_uniform_correction_factor() {
        let mut worksheet = seeded(LineId::SeSw, &[1.0, 2.0, 4.0, 8.0, 16.0], 3.0, -2.0);
        shift(&mut worksheet);

        let stations = worksheet.stations;
        let factor = (worksheet.correction[0] - worksheet.correction[stations]) / stations as f64;
        for j in 1..stations {
            assert!((worksheet.correction[j] - worksheet.correction[j + 1] - factor).abs() < 1e-9);
            assert!(
                (worksheet.datum[j] - worksheet.correction[j] - worksheet.cumulative[j]).abs()
                    < 1e-9
            );
        }
    }

    #[test]
    fn center_lines_zero_their_error_shift_at_the_middle() {
        let mut worksheet = seeded(LineId::EastWest, &[0.5, 1.0, -0.5, 2.0], 1.0, 0.25);
        shift(&mut worksheet);

        let error_shift = worksheet.error_shift().expect("center line has column 6a");
        assert!(middle_value(error_shift).abs() < 1e-12);
    }

    #[test]
    fn perimeter_lines_do_not_carry_column_6a() {
        let mut worksheet = seeded(LineId::NwSw, &[0.0, 1.0, 2.0], 0.0, 0.0);
        shift(&mut worksheet);
        assert!(worksheet.error_shift().is_none());
    }
}
