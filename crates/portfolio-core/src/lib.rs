//! Platform-free logic behind the portfolio page effects.
//!
//! Nothing here touches the DOM. The web front-end owns the browser handles
//! and feeds events and frame ticks into these types.

pub mod canvas;
pub mod config;
pub mod constants;
pub mod counter;
pub mod cursor;
pub mod frame_loop;
pub mod navbar;
pub mod particles;
pub mod pointer;
pub mod reveal;
pub mod scene;
pub mod scroll;
pub mod surface;
pub mod theme;
pub mod typewriter;

pub use canvas::*;
pub use config::*;
pub use frame_loop::*;
pub use particles::*;
pub use pointer::*;
pub use scene::*;
pub use surface::*;
