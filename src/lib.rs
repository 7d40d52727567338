//! The rhythm-game beatmap postprocessor.
//!
//! This crate turns a beatmap authored in an editor into a resolved timeline which a gameplay scorer or renderer can consume as is. It consists of these modules:
//!
//! - `beatmap` defines the internal model, which is the output of postprocessing.
//! - `format` decodes a JSON source in the versioned shape or the legacy shape, and migrates it into the internal model. This requires the `serde` feature.
//! - `geometry` provides the plane geometry of the note grid.
//! - `process` provides the pipeline: cut angle resolution of simultaneous notes, slider roles and chain synthesis, and chronological indexing.
//!
//! In detail, our policies are:
//!
//! - Process a whole beatmap at once in memory, without any incremental update.
//! - Never fail on an odd but readable beatmap. Leave the odd part as it was and report a warning.
//! - Keep the first decision on a note. A note promoted to a slider role is never promoted again.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # {
//! use beatmap_rs::prelude::*;
//!
//! let source = r#"{
//!     "version": "3.3.0",
//!     "colorNotes": [{ "b": 1.0, "x": 1, "y": 0, "c": 0, "d": 1 }],
//!     "burstSliders": [{
//!         "b": 1.0, "x": 1, "y": 0, "c": 0, "d": 1,
//!         "tb": 1.5, "tx": 1, "ty": 2, "sc": 3, "s": 1.0
//!     }]
//! }"#;
//! let BeatmapOutput { beatmap, warnings } = postprocess_json(source).unwrap();
//! assert!(warnings.is_empty());
//! assert_eq!(beatmap.notes[0].scoring_type, ScoringType::BurstSliderHead);
//! let indices: Vec<_> = beatmap.timeline().filter_map(|obj| obj.index()).collect();
//! assert_eq!(indices, vec![0, 1, 2]);
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod beatmap;
#[cfg(feature = "serde")]
pub mod format;
pub mod geometry;
pub mod prelude;
pub mod process;
