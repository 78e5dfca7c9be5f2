pub mod color;
pub mod constants;
pub mod error;
pub mod mesh;
pub mod particle;
pub mod scene;
pub mod session;
pub mod spectrum;
pub mod state;

pub use color::*;
pub use constants::*;
pub use error::*;
pub use mesh::*;
pub use particle::*;
pub use scene::*;
pub use session::*;
pub use spectrum::*;
pub use state::*;
