//! Smart Choice: 三平台合成比价与 smart score 推荐引擎。
//!
//! 引擎是纯函数，随机源由调用方注入：
//!
//! ```
//! use rand::SeedableRng;
//! use smart_choice::model::budget::BudgetRange;
//! use smart_choice::model::engine::compute_offers;
//! use smart_choice::model::interest::Interests;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let interests = Interests::parse(["budget"]).unwrap();
//! let offers = compute_offers("shampoo", &interests, BudgetRange::Under500, &mut rng);
//! assert_eq!(offers.len(), 3);
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod logging;
pub mod model;
pub mod render;

pub use crate::error::{Result, SmartChoiceError};
