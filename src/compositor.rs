// The rendering and input-routing half of the server: draws the
// window list every frame and turns raw backend input into Wayland
// events addressed to whichever window is "active". Not to be
// confused with the `wl_compositor` *protocol* interface, which is
// wired in `server.rs` -- the wire object only creates surfaces and
// regions, it has nothing to do with drawing them.
//
// "Active" here means the same thing the original implementation
// means: the first window in the list that still exists. There is no
// window manager, no stacking order beyond insertion order, and no
// explicit focus-follows-click -- see the crate's non-goals.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use wayland_server::backend::ClientId;

use crate::backend::{Backend, BackendEvent};
use crate::renderer::Renderer;
use crate::seat::{keyboard, pointer, Seat};
use crate::shell::Window;
use crate::texture::TextureHandle;
use crate::timing::{Clock, SerialAllocator};
use crate::vec2::Vec2;
use crate::{OUTPUT_HEIGHT, OUTPUT_WIDTH};

struct WindowEntry {
    window: Weak<RefCell<dyn Window>>,
    pos: Vec2<i32>,
}

pub struct Compositor {
    renderer: Box<dyn Renderer>,
    backend: Box<dyn Backend>,
    windows: Vec<WindowEntry>,
    background: Option<TextureHandle>,
}

impl Compositor {
    pub fn new(renderer: Box<dyn Renderer>, backend: Box<dyn Backend>) -> Compositor {
        Compositor {
            renderer,
            backend,
            windows: Vec::new(),
            background: None,
        }
    }

    pub fn renderer_mut(&mut self) -> &mut dyn Renderer {
        self.renderer.as_mut()
    }

    pub fn set_background(&mut self, texture: TextureHandle) {
        self.background = Some(texture);
    }

    /// Registers a newly mapped toplevel, placed at the origin. There
    /// is no move/resize implementation in this design, so a window's
    /// position never changes after this call.
    pub fn add_window(&mut self, window: Weak<RefCell<dyn Window>>) {
        self.windows.push(WindowEntry {
            window,
            pos: Vec2::new(0, 0),
        });
    }

    fn active_window_entry(&mut self) -> Option<(Rc<RefCell<dyn Window>>, Vec2<i32>)> {
        self.windows.retain(|entry| entry.window.strong_count() > 0);
        self.windows
            .first()
            .and_then(|entry| entry.window.upgrade().map(|w| (w, entry.pos)))
    }

    /// Draws the background (if any) followed by every live window,
    /// each scaled to its committed buffer size relative to the fixed
    /// output resolution, then presents the frame.
    pub fn draw(&mut self) {
        self.windows.retain(|entry| entry.window.strong_count() > 0);

        if let Some(bg) = self.background.clone() {
            self.renderer.draw(&bg, Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        }

        for entry in &self.windows {
            let window = match entry.window.upgrade() {
                Some(w) => w,
                None => continue,
            };
            let window = window.borrow();
            let texture = match window.texture() {
                Some(t) if t.is_valid() => t,
                _ => continue,
            };
            let (w, h) = window.committed_size();
            let size = Vec2::new(w as f32 / OUTPUT_WIDTH as f32, h as f32 / OUTPUT_HEIGHT as f32);
            let pos = Vec2::new(entry.pos.x as f32, entry.pos.y as f32);
            self.renderer.draw(&texture, pos, size);
        }

        self.renderer.present();
    }

    /// Polls the backend for whatever OS input arrived since the last
    /// call and routes it to the active window's seat. Returns `false`
    /// once the backend itself has gone away, the main loop's signal
    /// to stop.
    pub fn handle_event(
        &mut self,
        seats: &HashMap<ClientId, Rc<RefCell<Seat>>>,
        serials: &mut SerialAllocator,
        clock: &Clock,
    ) -> bool {
        if !self.backend.is_valid() {
            return false;
        }

        for event in self.backend.poll_events() {
            self.route_backend_event(event, seats, serials, clock);
        }

        true
    }

    fn route_backend_event(
        &mut self,
        event: BackendEvent,
        seats: &HashMap<ClientId, Rc<RefCell<Seat>>>,
        serials: &mut SerialAllocator,
        clock: &Clock,
    ) {
        let (window, pos) = match self.active_window_entry() {
            Some(w) => w,
            None => return,
        };
        let (wl_surface, client) = {
            let window = window.borrow();
            (window.wl_surface(), window.client_id())
        };
        let seat = match seats.get(&client) {
            Some(s) => s.clone(),
            None => return,
        };

        match event {
            BackendEvent::PointerMotion { x, y } => {
                let (_, committed_height) = window.borrow().committed_size();
                let origin = Vec2::new(x, y) - Vec2::new(pos.x as f64, pos.y as f64);
                // The surface's local origin is its top-left, but the
                // output's origin is its top-left too -- since windows
                // are never taller than the output, a surface shorter
                // than OUTPUT_HEIGHT sits flush with the output's
                // bottom edge, not its top. Shift y so 0 lands on the
                // surface's own top edge, and drop samples that land
                // above it (confirmed against the original source).
                let local_y = origin.y - (OUTPUT_HEIGHT as f64 - committed_height as f64);
                if local_y < 0.0 {
                    return;
                }
                let local = Vec2::new(origin.x, local_y);
                pointer::on_motion(&seat, serials, clock, &wl_surface, local);
            }
            BackendEvent::PointerButton { button, pressed } => {
                pointer::on_button(&seat, serials, clock, button, pressed);
            }
            BackendEvent::PointerLeave => {
                pointer::on_leave(&seat, serials, &wl_surface);
            }
            BackendEvent::Key { key, pressed } => {
                keyboard::on_key(&seat, serials, clock, key, pressed);
            }
            BackendEvent::WindowResized { width, height } => {
                self.renderer_viewport_hint(width, height);
            }
        }
    }

    /// The original backend re-points the GL viewport here via a
    /// dynamically loaded `glViewport`. This crate's `Renderer` trait
    /// has no viewport call of its own -- a real GL renderer would
    /// need one added, but the logging stub this crate ships has
    /// nothing to resize -- so this is intentionally a no-op hook kept
    /// for a future renderer to hang real behavior off of.
    fn renderer_viewport_hint(&mut self, _width: u32, _height: u32) {}
}
