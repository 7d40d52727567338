//! Plane geometry of the note grid.
//!
//! The grid is seen from the player: `x` grows to the right by columns (`lineIndex`) and `y` grows upward by rows (`lineLayer`). Angles are in degrees and positive counter-clockwise.

use cgmath::{Deg, InnerSpace, Vector2, Zero};

use crate::beatmap::kind::CutDirection;

/// Number of columns on the grid.
pub const NOTE_LINES_COUNT: i32 = 4;
/// Distance between two neighboring columns or rows.
pub const NOTE_LINES_DISTANCE: f64 = 0.6;
/// Height of the bottom row.
pub const BASE_LINE_Y: f64 = 0.25;

/// Center of the grid cell at the column and row, relative to the middle of the grid horizontally.
#[must_use]
pub fn grid_offset(line_index: i32, line_layer: i32) -> Vector2<f64> {
    let leftmost = -f64::from(NOTE_LINES_COUNT - 1) * 0.5;
    Vector2::new(
        (leftmost + f64::from(line_index)) * NOTE_LINES_DISTANCE,
        BASE_LINE_Y + f64::from(line_layer) * NOTE_LINES_DISTANCE,
    )
}

/// Unit vector of the swing direction. Non-directional ones and unknown codes are a zero vector.
#[must_use]
pub fn direction_vector(direction: CutDirection) -> Vector2<f64> {
    use std::f64::consts::FRAC_1_SQRT_2;
    match direction {
        CutDirection::Up => Vector2::unit_y(),
        CutDirection::Down => -Vector2::unit_y(),
        CutDirection::Left => -Vector2::unit_x(),
        CutDirection::Right => Vector2::unit_x(),
        CutDirection::UpLeft => Vector2::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        CutDirection::UpRight => Vector2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        CutDirection::DownLeft => Vector2::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        CutDirection::DownRight => Vector2::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        CutDirection::Any | CutDirection::None | CutDirection::Other(_) => Vector2::zero(),
    }
}

/// Signed angle from `from` to `to` in degrees, in `-180..=180`. It is `0` if either is a zero vector.
#[must_use]
pub fn signed_angle(from: Vector2<f64>, to: Vector2<f64>) -> f64 {
    Deg::from(from.angle(to)).0
}

/// Signed angle from `swing` to the line along `line`, in `-90..=90`.
///
/// A line has no heading, so this is the smaller one of the signed angles to `line` and to `-line`. On a tie the one to `-line` is taken.
#[must_use]
pub fn signed_angle_to_line(swing: Vector2<f64>, line: Vector2<f64>) -> f64 {
    let forward = signed_angle(swing, line);
    let backward = signed_angle(swing, -line);
    if forward.abs() >= backward.abs() {
        backward
    } else {
        forward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn grid_is_centered() {
        assert_close(grid_offset(0, 0).x, -0.9);
        assert_close(grid_offset(3, 0).x, 0.9);
        assert_close(grid_offset(1, 2).y - grid_offset(1, 0).y, 1.2);
    }

    #[test]
    fn signed_angle_is_counter_clockwise_positive() {
        let up = Vector2::unit_y();
        assert_close(signed_angle(up, Vector2::new(-1.0, 0.0)), 90.0);
        assert_close(signed_angle(up, Vector2::new(1.0, 0.0)), -90.0);
        assert_close(signed_angle(up, up), 0.0);
        assert_close(signed_angle(up, Vector2::zero()), 0.0);
    }

    #[test]
    fn angle_to_line_ignores_heading() {
        let up = Vector2::unit_y();
        let diagonal = Vector2::new(0.6, 0.6);
        assert_close(signed_angle_to_line(up, diagonal), -45.0);
        assert_close(signed_angle_to_line(up, -diagonal), -45.0);
        assert_close(
            signed_angle_to_line(direction_vector(CutDirection::Down), up),
            0.0,
        );
        // Perpendicular is a tie, resolved toward the reversed line.
        assert_close(signed_angle_to_line(up, Vector2::new(0.6, 0.0)), 90.0);
        assert_close(signed_angle_to_line(up, Vector2::new(-0.6, 0.0)), -90.0);
    }

    #[test]
    fn directions_are_unit() {
        for dir in CutDirection::ALL {
            let len = direction_vector(dir).magnitude2();
            if matches!(dir, CutDirection::Any | CutDirection::None) {
                assert_close(len, 0.0);
            } else {
                assert_close(len, 1.0);
            }
        }
        assert_close(direction_vector(CutDirection::Other(1045)).magnitude2(), 0.0);
    }
}
