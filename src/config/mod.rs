//! Section configuration merge system
//!
//! Implements the 3-layer configuration merge:
//! 1. Built-in section defaults
//! 2. Overrides file (`[hero]` / `[pricing]` tables)
//! 3. CLI `--set key=value` pairs
//!
//! Every layer after the first is a partial override applied with
//! top-level replace semantics.

mod defaults;
mod effective;
mod merge;
mod section;

pub use defaults::{HeroDefaults, Plan, PricingDefaults, Stat};
pub use effective::{
    load_overrides_file, parse_cli_overrides, ConfigError, ConfigOrigin, ConfigSource,
    EffectiveConfig,
};
pub use merge::{merge_layers, shallow_merge};
pub use section::{SectionConfig, SectionKind};
