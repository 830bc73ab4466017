pub mod constants;
pub mod flame;
pub mod geometry;
pub mod scene;
pub mod scroll;
pub mod settings;
pub mod smoke;
pub mod stars;

pub use constants::*;
pub use flame::*;
pub use geometry::*;
pub use scene::*;
pub use scroll::*;
pub use settings::*;
pub use smoke::*;
pub use stars::*;

// Shaders bundled as string constants
pub static SKY_WGSL: &str = include_str!("../../shaders/sky.wgsl");
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
pub static FLAME_WGSL: &str = include_str!("../../shaders/flame.wgsl");
pub static SPRITES_WGSL: &str = include_str!("../../shaders/sprites.wgsl");
