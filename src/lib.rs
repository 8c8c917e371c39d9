//! Wire-protocol core of a minimal single-threaded Wayland compositor.
//!
//! This crate implements the protocol state layer only: resource
//! lifetime, surfaces, regions, seats, shell handshakes, the globals
//! table, and the frame-pacing loop that ties them together. The GL/
//! EGL renderer and the platform input/display backend are external
//! collaborators, reached only through the [`renderer::Renderer`] and
//! [`backend::Backend`] traits.

pub mod backend;
pub mod compositor;
pub mod data_device;
pub mod error;
#[macro_use]
pub mod logging;
pub mod main_loop;
pub mod output;
pub mod region;
pub mod registry;
pub mod renderer;
pub mod seat;
pub mod server;
pub mod shell;
pub mod shm;
pub mod surface;
pub mod texture;
pub mod timing;
pub mod vec2;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use wayland_server::backend::ClientId;

use compositor::Compositor;
use seat::Seat;
use surface::Surface;
use timing::{Clock, SerialAllocator};

/// Fixed single-output resolution this design addresses (see the
/// crate's non-goals: no multi-output support).
pub const OUTPUT_WIDTH: i32 = 1920;
pub const OUTPUT_HEIGHT: i32 = 1024;

pub const OUTPUT_REFRESH_MHZ: i32 = 60_000;
pub const TARGET_FPS: u32 = 60;

/// The aggregate server state. Every `Dispatch`/`GlobalDispatch` impl
/// in this crate targets `&mut Core` (the escape hatch wayland-server
/// threads through every protocol callback in place of a thread-local
/// or process-global singleton).
pub struct Core {
    pub clock: Clock,
    pub serials: SerialAllocator,
    pub seats: HashMap<ClientId, Rc<RefCell<Seat>>>,
    pub compositor: Compositor,
    /// Every surface created by `wl_compositor.create_surface`, held
    /// weakly so client-driven destruction still wins. Scanned once
    /// per `Server::handle_event` iteration to flush frame callbacks.
    pub surfaces: Vec<Weak<RefCell<Surface>>>,
}

impl Core {
    pub fn new(renderer: Box<dyn renderer::Renderer>, backend: Box<dyn backend::Backend>) -> Core {
        Core {
            clock: Clock::new(),
            serials: SerialAllocator::new(),
            seats: HashMap::new(),
            compositor: Compositor::new(renderer, backend),
            surfaces: Vec::new(),
        }
    }

    pub fn seat_for_client(&mut self, client: ClientId) -> Rc<RefCell<Seat>> {
        self.seats
            .entry(client.clone())
            .or_insert_with(|| Rc::new(RefCell::new(Seat::new(client))))
            .clone()
    }

    /// Delegates OS input to the compositor's window resolution and
    /// seat emission. Split out from `Compositor` itself because the
    /// seats map and serial allocator live here, not on `Compositor`.
    pub fn handle_compositor_event(&mut self) -> bool {
        self.compositor.handle_event(&self.seats, &mut self.serials, &self.clock)
    }
}
