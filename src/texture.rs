// Opaque handle returned by a `Renderer` upload. The core never looks
// inside it; it only needs the size (to compute the normalized quad
// for `Compositor::draw`) and whether it is valid (a surface with no
// committed buffer yet has no texture at all).

use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct TextureHandle {
    inner: Rc<Inner>,
}

#[derive(Debug)]
struct Inner {
    width: u32,
    height: u32,
}

impl TextureHandle {
    pub fn new(width: u32, height: u32) -> TextureHandle {
        TextureHandle {
            inner: Rc::new(Inner { width, height }),
        }
    }

    pub fn width(&self) -> u32 {
        self.inner.width
    }

    pub fn height(&self) -> u32 {
        self.inner.height
    }

    pub fn is_valid(&self) -> bool {
        self.inner.width > 0 && self.inner.height > 0
    }
}
