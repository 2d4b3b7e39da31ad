//! Strain-based skill difficulty evaluation for osu!standard.
//!
//! Given a time-ordered sequence of hit objects whose geometry and timing
//! attributes were precomputed, this crate evaluates each object for the
//! skills aim, speed, rhythm, and reading and folds the per-object values
//! into one difficulty value per skill.
//!
//! ## Usage
//!
//! ```
//! use rosu_skills::{
//!     model::hit_object::{ObjectAttributes, ObjectKind, Pos},
//!     Difficulty,
//! };
//!
//! // Usually provided by a beatmap parser
//! let objects: Vec<ObjectAttributes> = (0..64)
//!     .map(|i| ObjectAttributes {
//!         start_time: f64::from(i) * 150.0,
//!         kind: ObjectKind::Circle,
//!         pos: Pos::new(if i % 2 == 0 { 128.0 } else { 384.0 }, 192.0),
//!         radius: 32.0,
//!         jump_dist: if i == 0 { 0.0 } else { 400.0 },
//!         min_jump_dist: if i == 0 { 0.0 } else { 400.0 },
//!         strain_time: 150.0,
//!         min_jump_time: 150.0,
//!         angle: (i >= 2).then_some(0.0),
//!         hit_window_great: 50.0,
//!         time_preempt: 600.0,
//!         time_fade_in: 400.0,
//!         ..Default::default()
//!     })
//!     .collect();
//!
//! let attrs = Difficulty::new()
//!     .mods(64) // DT
//!     .calculate(&objects)
//!     .unwrap();
//!
//! assert!(attrs.aim > 0.0);
//! assert!(attrs.speed > 0.0);
//!
//! // Spread the skills over multiple threads
//! let parallel = Difficulty::new().mods(64).calculate_parallel(&objects).unwrap();
//!
//! assert_eq!(attrs, parallel);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Any error or rejected input is logged through `tracing`. | [`tracing`]
//!
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::match_same_arms,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::cast_possible_wrap
)]

#[doc(inline)]
pub use self::{
    difficulty::{Difficulty, DifficultyAttributes, Strains},
    error::AttributesError,
    model::mods::GameMods,
    util::fitts_law,
};

/// Skill evaluation and aggregation.
pub mod difficulty;

/// Types used as input.
pub mod model;

mod error;
mod util;
