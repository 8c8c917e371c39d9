// The GL/EGL renderer lives outside this crate: its shader program,
// VAO/VBO quad, and texture upload path are an external collaborator.
// This module only defines the narrow interface the core calls through
// and a logging stand-in that satisfies it without touching a real
// GPU, so the main loop can run end to end in this repository.

use crate::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShmFormat {
    Argb8888,
    Xrgb8888,
}

/// Identifies an externally-imported (EGL-image-style) buffer. Opaque
/// to the core; only the real renderer knows how to resolve it.
#[derive(Debug, Clone, Copy)]
pub struct OpaqueBufferToken(pub u64);

pub trait Renderer {
    /// Uploads `data` (tightly packed rows of `format`, `width`x`height`
    /// pixels) as a new texture.
    fn upload_shm(&mut self, data: &[u8], width: u32, height: u32, format: ShmFormat) -> crate::texture::TextureHandle;

    /// Uploads a non-shm buffer (dmabuf/EGL-image) identified by an
    /// opaque token handed in from the backend.
    fn upload_opaque(&mut self, token: OpaqueBufferToken) -> crate::texture::TextureHandle;

    /// Draws `tex` at `pos` with `size`, both in normalized device
    /// coordinates.
    fn draw(&mut self, tex: &crate::texture::TextureHandle, pos: Vec2<f32>, size: Vec2<f32>);

    /// Presents the composited frame.
    fn present(&mut self);
}

pub mod stub {
    use super::*;

    /// Logs every call instead of touching a GPU. Used by the CLI
    /// entry point until a real GL/EGL renderer is wired in.
    #[derive(Default)]
    pub struct LoggingRenderer {
        frames_presented: u64,
    }

    impl LoggingRenderer {
        pub fn new() -> LoggingRenderer {
            LoggingRenderer { frames_presented: 0 }
        }
    }

    impl Renderer for LoggingRenderer {
        fn upload_shm(
            &mut self,
            data: &[u8],
            width: u32,
            height: u32,
            format: ShmFormat,
        ) -> crate::texture::TextureHandle {
            crate::debug!(
                "stub renderer: uploading {}x{} shm buffer ({:?}, {} bytes)",
                width,
                height,
                format,
                data.len()
            );
            crate::texture::TextureHandle::new(width, height)
        }

        fn upload_opaque(&mut self, token: OpaqueBufferToken) -> crate::texture::TextureHandle {
            crate::debug!("stub renderer: uploading opaque buffer {:?}", token);
            crate::texture::TextureHandle::new(0, 0)
        }

        fn draw(&mut self, tex: &crate::texture::TextureHandle, pos: Vec2<f32>, size: Vec2<f32>) {
            crate::profiling!(
                "stub renderer: draw {}x{} at ({}, {}), size ({}, {})",
                tex.width(),
                tex.height(),
                pos.x,
                pos.y,
                size.x,
                size.y
            );
        }

        fn present(&mut self) {
            self.frames_presented += 1;
        }
    }
}
