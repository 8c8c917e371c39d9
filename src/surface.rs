// wl_surface: the central per-window entity. Holds the pending and
// committed buffer state, the damage flag that gates upload on commit,
// and this surface's own frame-callback list (scoped per-surface, not
// a process-global singleton shared across every client -- see the
// crate's design notes for why that would be a bug).

use std::cell::RefCell;
use std::rc::Rc;

use wayland_server::protocol::wl_surface::Request;
use wayland_server::protocol::{wl_buffer, wl_callback, wl_output, wl_region, wl_surface as wlsi};
use wayland_server::Resource;
use wayland_server::{backend::ClientId, backend::ObjectId, DataInit, Dispatch, DisplayHandle, New};

use crate::region::Region;
use crate::renderer::{OpaqueBufferToken, Renderer, ShmFormat};
use crate::texture::TextureHandle;
use crate::Core;

#[cfg(test)]
mod tests;

pub struct Surface {
    pending_buffer: Option<wl_buffer::WlBuffer>,
    pub texture: Option<TextureHandle>,
    pub committed_size: (u32, u32),
    damaged: bool,
    opaque_region: Option<Rc<RefCell<Region>>>,
    input_region: Option<Rc<RefCell<Region>>>,
    frame_callbacks: Vec<wl_callback::WlCallback>,
    destroyed: bool,
}

impl Surface {
    pub fn new() -> Surface {
        Surface {
            pending_buffer: None,
            texture: None,
            committed_size: (0, 0),
            damaged: false,
            opaque_region: None,
            input_region: None,
            frame_callbacks: Vec::new(),
            destroyed: false,
        }
    }

    fn attach(&mut self, buffer: Option<wl_buffer::WlBuffer>) {
        self.pending_buffer = buffer;
    }

    fn mark_damaged(&mut self) {
        self.damaged = true;
    }

    fn frame(&mut self, callback: wl_callback::WlCallback) {
        self.frame_callbacks.push(callback);
    }

    /// Drains this surface's pending frame callbacks, firing `done` on
    /// each before dropping it. Called once per server event-pump
    /// iteration from `Server::handle_event`, independent of commit.
    pub fn flush_frame_callbacks(&mut self, elapsed_ms: u32) {
        for callback in self.frame_callbacks.drain(..) {
            if callback.version() >= wl_callback::EVT_DONE_SINCE {
                callback.done(elapsed_ms);
            }
        }
    }

    /// Applies the pending attach/damage state. A no-op unless both a
    /// buffer is attached and damage has been reported since the last
    /// commit -- this is what makes two commits with no intervening
    /// attach/damage perform exactly one upload.
    pub fn commit(&mut self, renderer: &mut dyn Renderer) {
        if self.pending_buffer.is_none() || !self.damaged {
            return;
        }
        let buffer = self.pending_buffer.take().unwrap();
        self.damaged = false;

        if let Some(shm) = buffer.data::<Rc<RefCell<crate::shm::ShmBufferData>>>() {
            let shm = shm.borrow();
            match shm.format() {
                Some(format) => {
                    let (w, h) = (shm.width() as u32, shm.height() as u32);
                    let texture = renderer.upload_shm(&shm.pixels(), w, h, format);
                    self.committed_size = (w, h);
                    self.texture = Some(texture);
                }
                None => {
                    crate::debug!(
                        "surface commit: unsupported shm format, buffer {}x{} not uploaded",
                        shm.width(),
                        shm.height()
                    );
                    self.committed_size = (shm.width() as u32, shm.height() as u32);
                }
            }
        } else {
            // Not an shm buffer: treat it as an externally-imported
            // (dmabuf/EGL-image) buffer identified by its object id.
            let token = OpaqueBufferToken(buffer.id().protocol_id() as u64);
            let texture = renderer.upload_opaque(token);
            self.committed_size = (texture.width(), texture.height());
            self.texture = Some(texture);
        }

        buffer.release();
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }
}

impl Default for Surface {
    fn default() -> Self {
        Surface::new()
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        debug_assert!(self.destroyed, "surface dropped without being destroyed");
    }
}

#[allow(unused_variables)]
impl Dispatch<wlsi::WlSurface, Rc<RefCell<Surface>>> for Core {
    fn request(
        state: &mut Self,
        client: &wayland_server::Client,
        resource: &wlsi::WlSurface,
        request: Request,
        data: &Rc<RefCell<Surface>>,
        dhandle: &DisplayHandle,
        data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            Request::Attach { buffer, .. } => data.borrow_mut().attach(buffer),
            Request::Damage { .. } => data.borrow_mut().mark_damaged(),
            Request::DamageBuffer { .. } => data.borrow_mut().mark_damaged(),
            Request::Frame { callback } => {
                let cb = data_init.init(callback, ());
                data.borrow_mut().frame(cb);
            }
            Request::SetOpaqueRegion { region } => {
                data.borrow_mut().opaque_region = region_data(region);
            }
            Request::SetInputRegion { region } => {
                data.borrow_mut().input_region = region_data(region);
            }
            Request::Commit => data.borrow_mut().commit(state.compositor.renderer_mut()),
            Request::Destroy => data.borrow_mut().destroy(),
            Request::SetBufferScale { scale } => {
                if scale != 1 {
                    crate::debug!("ignoring non-1 wl_surface buffer scale {}", scale);
                }
            }
            Request::SetBufferTransform { transform } => {
                if transform.into_result().ok() != Some(wl_output::Transform::Normal) {
                    crate::debug!("ignoring non-normal wl_surface buffer transform");
                }
            }
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, data: &Rc<RefCell<Surface>>) {
        data.borrow_mut().destroy();
    }
}

fn region_data(region: Option<wl_region::WlRegion>) -> Option<Rc<RefCell<Region>>> {
    region.and_then(|r| r.data::<Rc<RefCell<Region>>>().cloned())
}

#[allow(unused_variables)]
impl Dispatch<wl_callback::WlCallback, ()> for Core {
    fn request(
        _state: &mut Self,
        _client: &wayland_server::Client,
        _resource: &wl_callback::WlCallback,
        _request: wl_callback::Request,
        _data: &(),
        _dhandle: &DisplayHandle,
        _data_init: &mut DataInit<'_, Self>,
    ) {
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &()) {}
}

pub fn create_surface(
    state: &mut Core,
    data_init: &mut DataInit<'_, Core>,
    id: New<wlsi::WlSurface>,
) -> Rc<RefCell<Surface>> {
    let surface = Rc::new(RefCell::new(Surface::new()));
    data_init.init(id, surface.clone());
    state.surfaces.push(Rc::downgrade(&surface));
    surface
}
