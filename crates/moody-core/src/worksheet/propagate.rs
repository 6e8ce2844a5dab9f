use super::{Worksheet, diagonal, middle_value, shifter};
use crate::survey::{Endpoint, LineId};

/// Where a dependent line's endpoint value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seed {
    /// The solved corner value of another line; both lines meet at the
    /// same physical plate corner.
    Corner { line: LineId, endpoint: Endpoint },
    /// The middle value of another line's datum column; center lines end
    /// where a perimeter line crosses their midpoint.
    Middle { line: LineId },
}

#[derive(Debug, Clone, Copy)]
struct SeedRow {
    line: LineId,
    start: Seed,
    end: Seed,
}

/// Moody's fixed propagation graph. Rows are solved top to bottom; every
/// seed names a line solved on an earlier row (or a diagonal). The four
/// corners NE, NW, SE, SW each appear as one diagonal endpoint feeding
/// two perimeter lines.
const SOLVE_ORDER: [SeedRow; 6] = [
    SeedRow {
        line: LineId::NeNw,
        start: Seed::Corner {
            line: LineId::NeSw,
            endpoint: Endpoint::Start,
        },
        end: Seed::Corner {
            line: LineId::NwSe,
            endpoint: Endpoint::Start,
        },
    },
    SeedRow {
        line: LineId::NeSe,
        start: Seed::Corner {
            line: LineId::NeSw,
            endpoint: Endpoint::Start,
        },
        end: Seed::Corner {
            line: LineId::NwSe,
            endpoint: Endpoint::End,
        },
    },
    SeedRow {
        line: LineId::SeSw,
        start: Seed::Corner {
            line: LineId::NwSe,
            endpoint: Endpoint::End,
        },
        end: Seed::Corner {
            line: LineId::NeSw,
            endpoint: Endpoint::End,
        },
    },
    SeedRow {
        line: LineId::NwSw,
        start: Seed::Corner {
            line: LineId::NwSe,
            endpoint: Endpoint::Start,
        },
        end: Seed::Corner {
            line: LineId::NeSw,
            endpoint: Endpoint::End,
        },
    },
    SeedRow {
        line: LineId::EastWest,
        start: Seed::Middle { line: LineId::NeSe },
        end: Seed::Middle { line: LineId::NwSw },
    },
    SeedRow {
        line: LineId::NorthSouth,
        start: Seed::Middle { line: LineId::NeNw },
        end: Seed::Middle { line: LineId::SeSw },
    },
];

fn seed_value(worksheets: &[Worksheet; 8], seed: Seed) -> f64 {
    match seed {
        Seed::Corner { line, endpoint } => {
            let source = &worksheets[line.index()];
            match endpoint {
                Endpoint::Start => source.datum[0],
                Endpoint::End => source.datum[source.stations],
            }
        }
        Seed::Middle { line } => middle_value(&worksheets[line.index()].datum),
    }
}

/// Solve columns 5/6 (and 6a) for every line: diagonals first, then the
/// perimeter and center lines in propagation order.
pub(super) fn solve_lines(worksheets: &mut [Worksheet; 8]) {
    for line in LineId::DIAGONALS {
        diagonal::reconcile(&mut worksheets[line.index()]);
    }

    for row in SOLVE_ORDER {
        let start = seed_value(worksheets, row.start);
        let end = seed_value(worksheets, row.end);

        let worksheet = &mut worksheets[row.line.index()];
        worksheet.correction[0] = start;
        worksheet.datum[0] = start;
        let stations = worksheet.stations;
        worksheet.datum[stations] = end;

        shifter::shift(worksheet);
    }
}

#[cfg(test)]
mod tests {
    use super::{SOLVE_ORDER, Seed};
    use crate::survey::{LineClass, LineId};

    fn seed_source(seed: Seed) -> LineId {
        match seed {
            Seed::Corner { line, .. } => line,
            Seed::Middle { line } => line,
        }
    }

    #[test]
    fn every_seed_references_an_already_solved_line() {
        let mut solved: Vec<LineId> = LineId::DIAGONALS.to_vec();
        for row in SOLVE_ORDER {
            assert!(
                solved.contains(&seed_source(row.start)),
                "{} start seed must be solved first",
                row.line
            );
            assert!(
                solved.contains(&seed_source(row.end)),
                "{} end seed must be solved first",
                row.line
            );
            solved.push(row.line);
        }
    }

    #[test]
    fn perimeter_lines_seed_from_corners_and_center_lines_from_middles() {
        for row in SOLVE_ORDER {
            match row.line.class() {
                LineClass::Perimeter => {
                    assert!(matches!(row.start, Seed::Corner { line, .. } if line.class() == LineClass::Diagonal));
                    assert!(matches!(row.end, Seed::Corner { line, .. } if line.class() == LineClass::Diagonal));
                }
                LineClass::Center => {
                    assert!(matches!(row.start, Seed::Middle { line } if line.class() == LineClass::Perimeter));
                    assert!(matches!(row.end, Seed::Middle { line } if line.class() == LineClass::Perimeter));
                }
                LineClass::Diagonal => panic!("diagonals are solved before the propagation walk"),
            }
        }
    }

    #[test]
    fn each_plate_corner_feeds_exactly_two_perimeter_lines() {
        let mut corner_uses = std::collections::BTreeMap::new();
        for row in SOLVE_ORDER.iter().take(4) {
            for seed in [row.start, row.end] {
                if let Seed::Corner { line, endpoint } = seed {
                    *corner_uses.entry((line.index(), endpoint as usize)).or_insert(0) += 1;
                }
            }
        }
        assert_eq!(corner_uses.len(), 4, "four physical corners");
        assert!(corner_uses.values().all(|count| *count == 2));
    }
}
