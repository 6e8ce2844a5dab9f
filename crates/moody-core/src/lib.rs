//! Computation engine for calibrating a precision surface plate from
//! autocollimator readings taken along Moody's eight measurement lines.
//!
//! The worksheet pipeline follows the method published by J.C. Moody in
//! "How to calibrate a surface plate in the plant", The Tool Engineer,
//! October 1955: per-line cumulative displacement, diagonal de-trend,
//! correction-factor redistribution seeded by shared plate corners, and a
//! final re-base to the lowest point on the plate.

pub mod domain;
pub mod input;
pub mod render;
pub mod report;
pub mod survey;
pub mod worksheet;
