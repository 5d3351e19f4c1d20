//! # dota_heroes
//!
//! A Rust library for turning OpenDota `heroStats` payloads into typed hero records.
//!
//! This library provides:
//! - **Key normalization**: recursive snake_case → camelCase rewriting of JSON object keys
//! - **Hero mapping**: typed `Hero` records with lossy narrowing of attribute, attack type and roles
//! - **Derived stats**: health, mana, armor and attack range computed from base attributes
//! - **Asset URLs**: portrait, render, video and icon URLs against the image host
//! - **Fetching**: a blocking client for `GET /api/heroStats`
//! - **Roster queries**: attribute filter, name search and name sort
//!
//! ## Quick Start
//!
//! ```no_run
//! use dota_heroes::api::HeroStatsApi;
//! use dota_heroes::config::Config;
//!
//! let config = Config::from_env()?;
//! let api = HeroStatsApi::from_config(&config)?;
//! for hero in api.get_hero_stats()? {
//!     println!("{}: {} hp", hero.display_name(), hero.health());
//! }
//! # Ok::<(), dota_heroes::HeroError>(())
//! ```
//!
//! ## Offline Payloads
//!
//! ```
//! use dota_heroes::json::read_hero_stats;
//! use dota_heroes::model::HeroAttribute;
//!
//! let heroes = read_hero_stats(r#"[{
//!     "primary_attr": "all",
//!     "base_attack_min": 10,
//!     "base_str": 10, "base_agi": 20, "base_int": 30
//! }]"#)?;
//! assert_eq!(heroes[0].primary_attr, Some(HeroAttribute::Universal));
//! assert!((heroes[0].attack_min() - 46.0).abs() < 1e-9);
//! # Ok::<(), dota_heroes::HeroError>(())
//! ```

pub mod error;
pub mod json;
pub mod model;
pub mod stats;
pub mod assets;
pub mod config;
pub mod api;
pub mod roster;

pub use error::HeroError;
pub use model::Hero;
