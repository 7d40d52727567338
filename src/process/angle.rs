//! Cut angle resolution of simultaneous notes.
//!
//! Playable notes are grouped by time. A group starts at its first note and takes following notes while they are within [`PostprocessConfig::simultaneity_epsilon`] of that first note, not of the previous one. Bombs are skipped and never split a group.
//!
//! In each group, the notes of each hand are resolved independently. Only a hand with exactly two notes is resolved: the swing of the primary note (the one with a concrete direction) is compared with the line through both notes, and the signed angle between them becomes the `cut_direction_angle_offset` of both, so that a wildcard partner is rotated to face along the swing.

use cgmath::Vector2;

use crate::{
    beatmap::{Beatmap, Note, kind::HandType},
    geometry::{direction_vector, grid_offset, signed_angle_to_line},
};

use super::{PostprocessConfig, PostprocessWarning};

/// Assigns `cut_direction_angle_offset` to the notes paired in simultaneous groups.
///
/// A step of [`super::postprocess_beatmap`].
pub fn resolve_cut_angles(
    beatmap: &mut Beatmap,
    config: &PostprocessConfig,
) -> Vec<PostprocessWarning> {
    let groups = simultaneous_groups(&beatmap.notes, config.simultaneity_epsilon);
    let mut warnings = Vec::new();
    for group in &groups {
        let (left, right): (Vec<usize>, Vec<usize>) = group
            .iter()
            .partition(|&&idx| beatmap.notes[idx].hand == HandType::Left);
        for same_hand in [left, right] {
            if let Some(warning) = resolve_pair(&mut beatmap.notes, &same_hand, config) {
                log::trace!("{warning}");
                warnings.push(warning);
            }
        }
    }
    log::debug!(
        "resolved cut angles: {} groups, {} pairs rejected",
        groups.len(),
        warnings.len()
    );
    warnings
}

/// Splits the playable notes into groups of simultaneous ones, as positions in `notes`.
///
/// Notes are expected to be in time order. Each group is compared against its first note, so a slow drift of times may still end up in one group while each step is under `epsilon`.
#[must_use]
pub fn simultaneous_groups(notes: &[Note], epsilon: f64) -> Vec<Vec<usize>> {
    let mut groups = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    for (idx, note) in notes
        .iter()
        .enumerate()
        .filter(|(_, note)| note.hand.is_playable())
    {
        let continues = current
            .first()
            .is_none_or(|&anchor| notes[anchor].time.distance(note.time) < epsilon);
        if !continues {
            groups.push(std::mem::take(&mut current));
        }
        current.push(idx);
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

fn resolve_pair(
    notes: &mut [Note],
    same_hand: &[usize],
    config: &PostprocessConfig,
) -> Option<PostprocessWarning> {
    let &[first, second] = same_hand else {
        return None;
    };
    let (first_dir, second_dir) = (notes[first].cut_direction, notes[second].cut_direction);
    if first_dir != second_dir && !first_dir.is_any() && !second_dir.is_any() {
        return Some(PostprocessWarning::ConflictingDirections {
            time: notes[first].time,
            hand: notes[first].hand,
            first: first_dir,
            second: second_dir,
        });
    }

    let (primary, secondary) = if first_dir.is_any() && !second_dir.is_any() {
        (second, first)
    } else {
        (first, second)
    };
    let primary_dir = notes[primary].cut_direction;
    let secondary_dir = notes[secondary].cut_direction;

    let line = grid_offset(notes[secondary].line_index, notes[secondary].line_layer)
        - grid_offset(notes[primary].line_index, notes[primary].line_layer);
    let swing = if primary_dir.is_any() {
        Vector2::unit_y()
    } else {
        direction_vector(primary_dir)
    };
    let angle = signed_angle_to_line(swing, line);

    if primary_dir.is_any() && secondary_dir.is_any() {
        notes[primary].cut_direction_angle_offset = Some(angle);
        notes[secondary].cut_direction_angle_offset = Some(angle);
        return None;
    }
    if angle.abs() > config.max_pair_angle {
        return Some(PostprocessWarning::AngleOverThreshold {
            time: notes[primary].time,
            hand: notes[primary].hand,
            angle,
        });
    }
    notes[primary].cut_direction_angle_offset = Some(angle);
    notes[secondary].cut_direction_angle_offset =
        Some(if secondary_dir.is_any() && primary_dir.is_past_right() {
            angle + config.diagonal_any_offset
        } else {
            angle
        });
    None
}
