//! Scene simulation for the solar scene: animation math, model matrices,
//! and draw ordering.
//!
//! Everything here is a pure function of accumulated delta-time — no GPU,
//! windowing, or clock dependencies — so the animation contract is fully
//! testable in isolation.

pub mod earth;
pub mod moon;
pub mod phase;
pub mod scene;

pub use earth::EarthState;
pub use moon::MoonState;
pub use phase::AppPhase;
pub use scene::{
    Body, SceneState, SpriteDraw, VIEW_FAR, VIEW_HALF_HEIGHT, VIEW_HALF_WIDTH, VIEW_NEAR,
};
