use beatmap_rs::{prelude::*, process::scoring::NoteLookup};
use pretty_assertions::assert_eq;

fn beat(time: f64) -> Beat {
    Beat::new(time).expect("finite beat")
}

fn note(time: f64, line_index: i32, line_layer: i32) -> Note {
    Note::new(beat(time), line_index, line_layer, HandType::Left, CutDirection::Down)
}

fn slider(head: (f64, i32, i32), tail: (f64, i32, i32)) -> Slider {
    Slider {
        time: beat(head.0),
        line_index: head.1,
        line_layer: head.2,
        hand: HandType::Left,
        cut_direction: CutDirection::Down,
        tail_time: beat(tail.0),
        tail_line_index: tail.1,
        tail_line_layer: tail.2,
        head_control_point_length_multiplier: 1.0,
        tail_control_point_length_multiplier: 1.0,
        tail_cut_direction: CutDirection::Up,
        arc_mid_anchor_mode: 0,
    }
}

fn burst_slider(head: (f64, i32, i32), slice_count: i32) -> BurstSlider {
    BurstSlider {
        time: beat(head.0),
        line_index: head.1,
        line_layer: head.2,
        hand: HandType::Right,
        cut_direction: CutDirection::DownRight,
        tail_time: beat(head.0 + 0.25),
        tail_line_index: head.1,
        tail_line_layer: 0,
        slice_count,
        squish_amount: 1.0,
    }
}

fn scoring_types(beatmap: &Beatmap) -> Vec<ScoringType> {
    beatmap.notes.iter().map(|note| note.scoring_type).collect()
}

#[test]
fn test_slider_promotes_head_and_tail() {
    let mut beatmap = Beatmap {
        notes: vec![note(1.0, 1, 0), note(2.0, 2, 2), note(3.0, 0, 0)],
        sliders: vec![slider((1.0, 1, 0), (2.0, 2, 2))],
        ..Beatmap::default()
    };
    let warnings = expand_chains(&mut beatmap);
    assert_eq!(warnings, vec![]);
    assert_eq!(
        scoring_types(&beatmap),
        vec![
            ScoringType::SliderHead,
            ScoringType::SliderTail,
            ScoringType::Normal
        ]
    );
}

#[test]
fn test_first_slider_decides_role() {
    let mut beatmap = Beatmap {
        notes: vec![note(1.0, 1, 0), note(2.0, 1, 1), note(0.5, 3, 0)],
        sliders: vec![
            slider((1.0, 1, 0), (2.0, 1, 1)),
            slider((0.5, 3, 0), (1.0, 1, 0)),
        ],
        ..Beatmap::default()
    };
    let warnings = expand_chains(&mut beatmap);
    assert_eq!(warnings, vec![]);
    assert_eq!(
        scoring_types(&beatmap),
        vec![
            ScoringType::SliderHead,
            ScoringType::SliderTail,
            ScoringType::SliderHead
        ]
    );
}

#[test]
fn test_first_note_at_coordinate_is_matched() {
    let mut beatmap = Beatmap {
        notes: vec![note(1.0, 1, 0), note(1.0, 1, 0)],
        sliders: vec![slider((1.0, 1, 0), (2.0, 0, 0))],
        ..Beatmap::default()
    };
    let warnings = expand_chains(&mut beatmap);
    assert_eq!(
        scoring_types(&beatmap),
        vec![ScoringType::SliderHead, ScoringType::Normal]
    );
    assert_eq!(
        warnings,
        vec![PostprocessWarning::UnmatchedSliderTail {
            slider: 0,
            coordinate: GridCoordinate {
                time: beat(2.0),
                line_index: 0,
                line_layer: 0,
            },
        }]
    );
}

#[test]
fn test_matching_is_exact() {
    let mut beatmap = Beatmap {
        notes: vec![note(1.00001, 1, 0)],
        sliders: vec![slider((1.0, 1, 0), (1.00001, 1, 0))],
        ..Beatmap::default()
    };
    let warnings = expand_chains(&mut beatmap);
    assert_eq!(scoring_types(&beatmap), vec![ScoringType::SliderTail]);
    assert!(matches!(
        warnings.as_slice(),
        [PostprocessWarning::UnmatchedSliderHead { slider: 0, .. }]
    ));
}

#[test]
fn test_bomb_at_slider_head_is_never_promoted() {
    let mut beatmap = Beatmap {
        notes: vec![Note::bomb(beat(1.0), 1, 0), note(1.0, 1, 0)],
        sliders: vec![slider((1.0, 1, 0), (1.0, 1, 0))],
        ..Beatmap::default()
    };
    let warnings = expand_chains(&mut beatmap);
    assert_eq!(warnings, vec![]);
    assert_eq!(
        scoring_types(&beatmap),
        vec![ScoringType::NoScore, ScoringType::Normal]
    );
}

#[test]
fn test_burst_slider_expands_slices() {
    let mut beatmap = Beatmap {
        notes: vec![note(4.0, 2, 1)],
        burst_sliders: vec![burst_slider((4.0, 2, 1), 5)],
        ..Beatmap::default()
    };
    let warnings = expand_chains(&mut beatmap);
    assert_eq!(warnings, vec![]);
    assert_eq!(beatmap.notes[0].scoring_type, ScoringType::BurstSliderHead);
    assert_eq!(beatmap.notes[0].burst_slider, Some(0));

    assert_eq!(beatmap.chains.len(), 4);
    let slice_indices: Vec<_> = beatmap.chains.iter().map(|chain| chain.slice_index).collect();
    assert_eq!(slice_indices, vec![1, 2, 3, 4]);
    for chain in &beatmap.chains {
        assert_eq!(chain.scoring_type, ScoringType::BurstSliderElement);
        assert_eq!(chain.slider.cut_direction, CutDirection::Any);
        assert_eq!(chain.head_cut_direction, CutDirection::DownRight);
        assert_eq!(chain.time(), beat(4.0));
        assert_eq!(chain.slider.hand, HandType::Right);
        assert_eq!(chain.slider.slice_count, 5);
        assert_eq!(chain.index, None);
    }
}

#[test]
fn test_single_slice_has_no_chain() {
    let mut beatmap = Beatmap {
        notes: vec![note(1.0, 0, 0), note(2.0, 0, 0), note(3.0, 0, 0)],
        burst_sliders: vec![
            burst_slider((1.0, 0, 0), 1),
            burst_slider((2.0, 0, 0), 0),
            burst_slider((3.0, 0, 0), -2),
        ],
        ..Beatmap::default()
    };
    let warnings = expand_chains(&mut beatmap);
    assert_eq!(warnings, vec![]);
    assert!(beatmap.chains.is_empty());
    assert!(
        beatmap
            .notes
            .iter()
            .all(|note| note.scoring_type == ScoringType::BurstSliderHead)
    );
}

#[test]
fn test_unmatched_burst_slider_still_expands() {
    let mut beatmap = Beatmap {
        notes: vec![note(1.0, 0, 0)],
        burst_sliders: vec![burst_slider((8.0, 3, 2), 3)],
        ..Beatmap::default()
    };
    let warnings = expand_chains(&mut beatmap);
    assert_eq!(
        warnings,
        vec![PostprocessWarning::UnmatchedBurstSliderHead {
            burst_slider: 0,
            coordinate: GridCoordinate {
                time: beat(8.0),
                line_index: 3,
                line_layer: 2,
            },
        }]
    );
    assert_eq!(beatmap.notes[0].scoring_type, ScoringType::Normal);
    assert_eq!(beatmap.chains.len(), 2);
}

#[test]
fn test_burst_head_keeps_earlier_role_but_links() {
    let mut beatmap = Beatmap {
        notes: vec![note(1.0, 1, 0), note(2.0, 1, 2)],
        sliders: vec![slider((1.0, 1, 0), (2.0, 1, 2))],
        burst_sliders: vec![burst_slider((2.0, 1, 2), 2)],
        ..Beatmap::default()
    };
    let warnings = expand_chains(&mut beatmap);
    assert_eq!(warnings, vec![]);
    assert_eq!(beatmap.notes[1].scoring_type, ScoringType::SliderTail);
    assert_eq!(beatmap.notes[1].burst_slider, Some(0));
    assert_eq!(beatmap.chains.len(), 1);
}

#[test]
fn test_chains_keep_insertion_order() {
    let mut beatmap = Beatmap {
        burst_sliders: vec![burst_slider((9.0, 0, 0), 3), burst_slider((1.0, 3, 0), 2)],
        ..Beatmap::default()
    };
    expand_chains(&mut beatmap);
    let order: Vec<_> = beatmap
        .chains
        .iter()
        .map(|chain| (chain.time().as_f64(), chain.slice_index))
        .collect();
    assert_eq!(order, vec![(9.0, 1), (9.0, 2), (1.0, 1)]);
}

#[test]
fn test_chains_are_replaced() {
    let mut beatmap = Beatmap {
        burst_sliders: vec![burst_slider((1.0, 0, 0), 3)],
        ..Beatmap::default()
    };
    expand_chains(&mut beatmap);
    expand_chains(&mut beatmap);
    assert_eq!(beatmap.chains.len(), 2);
}

#[test]
fn test_lookup_finds_first() {
    let notes = vec![note(1.0, 0, 0), note(-0.0, 2, 1), note(1.0, 0, 0)];
    let lookup = NoteLookup::new(&notes);
    assert_eq!(lookup.find(notes[0].coordinate()), Some(0));
    assert_eq!(
        lookup.find(GridCoordinate {
            time: beat(0.0),
            line_index: 2,
            line_layer: 1,
        }),
        Some(1)
    );
    assert_eq!(
        lookup.find(GridCoordinate {
            time: beat(1.0),
            line_index: 0,
            line_layer: 1,
        }),
        None
    );
}
