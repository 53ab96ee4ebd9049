//! Data-driven combat content and loaders.
//!
//! This crate houses the static content a duel is built from and loaders for
//! its RON/TOML data files:
//! - Move catalog (RON)
//! - Player class presets and default loadouts (RON)
//! - Enemy templates and traits, with difficulty scaling (RON)
//! - Combat tunables (TOML)
//!
//! Content only constructs data; all in-session mutation belongs to the
//! engine's controller.

pub mod classes;
pub mod enemies;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use classes::{ClassRoster, ClassSpec, random_name};
pub use enemies::{EnemyRoster, EnemyTemplate, EnemyTrait, scale};

#[cfg(feature = "loaders")]
pub use loaders::{
    ClassLoader, ConfigLoader, Content, ContentFactory, EnemyLoader, LoadResult, MoveLoader,
};
