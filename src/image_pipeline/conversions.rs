//! Pipeline conversions module
//!
//! Orchestrates reading, splitting or merging, and writing of height maps.

mod pack_heightmap;
mod unpack_heightmap;


pub use pack_heightmap::HeightMapPackPipeline;
pub use unpack_heightmap::HeightMapUnpackPipeline;
