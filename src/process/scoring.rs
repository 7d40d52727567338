//! Scoring roles of slider heads and tails, and chain synthesis from burst sliders.

use std::collections::HashMap;

use crate::beatmap::{Beatmap, GridCoordinate, Note, kind::ScoringType};

use super::PostprocessWarning;

/// Lookup from an exact position to the first note placed there.
#[derive(Debug, Clone, Default)]
pub struct NoteLookup(HashMap<GridCoordinate, usize>);

impl NoteLookup {
    /// Indexes `notes`. Of the notes sharing a position, the earliest one in `notes` is kept.
    #[must_use]
    pub fn new(notes: &[Note]) -> Self {
        let mut map = HashMap::with_capacity(notes.len());
        for (idx, note) in notes.iter().enumerate() {
            map.entry(note.coordinate()).or_insert(idx);
        }
        Self(map)
    }

    /// Position in the notes of the first note at `coordinate`.
    #[must_use]
    pub fn find(&self, coordinate: GridCoordinate) -> Option<usize> {
        self.0.get(&coordinate).copied()
    }
}

/// Promotes the notes at slider and burst slider ends to their roles, then replaces [`Beatmap::chains`] with the slices of all burst sliders.
///
/// A note is promoted only from [`ScoringType::Normal`], so the first slider reaching a note decides its role. Chains are ordered by burst slider, then by slice, and are synthesized even if the head of a burst slider matches no note.
///
/// A step of [`super::postprocess_beatmap`].
pub fn expand_chains(beatmap: &mut Beatmap) -> Vec<PostprocessWarning> {
    let lookup = NoteLookup::new(&beatmap.notes);
    let mut warnings = Vec::new();

    for (slider_idx, slider) in beatmap.sliders.iter().enumerate() {
        match lookup.find(slider.head()) {
            Some(idx) => promote(&mut beatmap.notes[idx], ScoringType::SliderHead),
            None => warnings.push(PostprocessWarning::UnmatchedSliderHead {
                slider: slider_idx,
                coordinate: slider.head(),
            }),
        }
        match lookup.find(slider.tail()) {
            Some(idx) => promote(&mut beatmap.notes[idx], ScoringType::SliderTail),
            None => warnings.push(PostprocessWarning::UnmatchedSliderTail {
                slider: slider_idx,
                coordinate: slider.tail(),
            }),
        }
    }

    let mut chains = Vec::new();
    for (burst_idx, burst) in beatmap.burst_sliders.iter().enumerate() {
        match lookup.find(burst.head()) {
            Some(idx) => {
                let head = &mut beatmap.notes[idx];
                promote(head, ScoringType::BurstSliderHead);
                head.burst_slider = Some(burst_idx);
            }
            None => warnings.push(PostprocessWarning::UnmatchedBurstSliderHead {
                burst_slider: burst_idx,
                coordinate: burst.head(),
            }),
        }
        chains.extend(burst.chains());
    }
    beatmap.chains = chains;

    log::debug!(
        "expanded {} chains from {} burst sliders, {} unmatched ends",
        beatmap.chains.len(),
        beatmap.burst_sliders.len(),
        warnings.len()
    );
    warnings
}

fn promote(note: &mut Note, role: ScoringType) {
    if note.scoring_type.is_normal() {
        note.scoring_type = role;
    } else {
        log::trace!(
            "note at beat {} keeps {:?} over {role:?}",
            note.time,
            note.scoring_type
        );
    }
}
