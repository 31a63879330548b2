mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod compositor;
pub use compositor::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod export;
pub use export::*;

mod image;
pub use self::image::*;

/// Pure layout functions computing text positions for both writing modes
pub mod layout;

mod surface;
pub use surface::*;
