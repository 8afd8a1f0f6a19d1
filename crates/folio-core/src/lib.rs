pub mod camera;
pub mod color;
pub mod constants;
pub mod context;
pub mod error;
pub mod rig;
pub mod scroll;
pub mod selector;
pub mod views;

pub use camera::*;
pub use color::*;
pub use constants::*;
pub use context::*;
pub use error::*;
pub use rig::*;
pub use scroll::*;
pub use selector::*;
pub use views::*;
