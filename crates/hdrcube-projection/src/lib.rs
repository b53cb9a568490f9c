//! Equirectangular ↔ cubemap resampling.
//!
//! The cubemap side is a single packed image holding six square faces in a
//! [`Layout`]. Conversion in either direction walks every destination pixel,
//! computes its spherical direction, finds the matching source location and
//! reconstructs a value with a bilinear sampler.

mod approx;
mod convert;
mod cube_face;
mod error;
mod face_view;
mod forward;
mod inverse;
mod layout;
mod pixel_buffer;
mod sampler;

pub use approx::{FACE_EPSILON, is_close_to};
pub use convert::{Converter, to_cubemap, to_equirectangular};
pub use cube_face::{CubeFace, FaceBasis};
pub use error::ProjectionError;
pub use face_view::{CubemapFaces, FaceRect, FaceView, FaceViewMut};
pub use forward::{
    FaceCoord, cube_lookup, equirect_direction, project_to_cube, sample_equirect_texel,
};
pub use inverse::{direction_to_angles, direction_to_equirect_uv, sample_cubemap_texel};
pub use layout::Layout;
pub use pixel_buffer::PixelBuffer;
pub use sampler::{AddressMode, sample, sample_into};
