//! Chronological indexing of scorable objects.

use itertools::Itertools;

use crate::beatmap::Beatmap;

#[derive(Debug, Clone, Copy)]
enum Slot {
    Note(usize),
    Chain(usize),
}

/// Writes `index` onto every playable note and chain, in order of time. Objects at the same time keep the order of notes first, then chains, each in stored order.
///
/// Returns the number of indexed objects. Indexing an indexed beatmap again changes nothing.
///
/// A step of [`super::postprocess_beatmap`].
pub fn index_timeline(beatmap: &mut Beatmap) -> usize {
    let notes = beatmap
        .notes
        .iter()
        .enumerate()
        .filter(|(_, note)| note.hand.is_playable())
        .map(|(idx, note)| (note.time, Slot::Note(idx)));
    let chains = beatmap
        .chains
        .iter()
        .enumerate()
        .filter(|(_, chain)| chain.slider.hand.is_playable())
        .map(|(idx, chain)| (chain.time(), Slot::Chain(idx)));
    // `sorted_by_key` is a stable sort.
    let order = notes
        .chain(chains)
        .sorted_by_key(|&(time, _)| time)
        .collect_vec();

    for (index, &(_, slot)) in order.iter().enumerate() {
        match slot {
            Slot::Note(idx) => beatmap.notes[idx].index = Some(index),
            Slot::Chain(idx) => beatmap.chains[idx].index = Some(index),
        }
    }
    order.len()
}
