pub mod circle_buffer;
pub mod surface;

// Re-export key types for convenient access
pub use circle_buffer::{CircleBuffer, CircleInstance};
pub use surface::Surface;
