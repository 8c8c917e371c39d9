// The wire-protocol listener: owns the `Display`, accepts incoming
// client connections, and registers every global this compositor
// advertises. Everything past accept/dispatch/flush -- what a request
// actually does -- lives in the module that owns the interface it
// belongs to (`surface`, `region`, `seat`, `shell`, `output`, ...);
// this module only wires `wl_compositor` itself, since that global's
// two requests (`create_surface`, `create_region`) don't have an
// obvious more specific home.

use std::sync::Arc;

use wayland_server::backend::{ClientData, ClientId, DisconnectReason, GlobalId};
use wayland_server::protocol::{wl_compositor, wl_data_device_manager, wl_output, wl_seat, wl_shell, wl_shm};
use wayland_server::socket::ListeningSocket;
use wayland_server::{Client, DataInit, Display, Dispatch, DisplayHandle, GlobalDispatch, New};

use wayland_protocols::unstable::xdg_shell::v6::server::zxdg_shell_v6;

use crate::error::{CompositorError, Result};
use crate::Core;

const WL_COMPOSITOR_VERSION: u32 = 4;
const WL_SHM_VERSION: u32 = 1;
const WL_SHELL_VERSION: u32 = 1;
const ZXDG_SHELL_V6_VERSION: u32 = 1;
const WL_SEAT_VERSION: u32 = 6;
const WL_DATA_DEVICE_MANAGER_VERSION: u32 = 3;
const WL_OUTPUT_VERSION: u32 = 3;

/// Per-client bookkeeping the library requires but this design does
/// not otherwise need; logs connect/disconnect for visibility.
struct ClientState;

impl ClientData for ClientState {
    fn initialized(&self, client_id: ClientId) {
        crate::debug!("client {:?} connected", client_id);
    }

    fn disconnected(&self, client_id: ClientId, reason: DisconnectReason) {
        crate::debug!("client {:?} disconnected: {:?}", client_id, reason);
    }
}

/// The listening half of the compositor: the `Display` that owns
/// every client connection and the globals table, and the Unix socket
/// new clients connect through.
pub struct Server {
    display: Display<Core>,
    socket_name: String,
    listener: ListeningSocket,
    _globals: Vec<GlobalId>,
}

impl Server {
    pub fn new() -> Result<Server> {
        let display = Display::<Core>::new().map_err(|e| CompositorError::SocketBind(e.into()))?;
        let handle = display.handle();

        let globals = vec![
            handle.create_global::<Core, wl_compositor::WlCompositor, _>(WL_COMPOSITOR_VERSION, ()),
            handle.create_global::<Core, wl_shm::WlShm, _>(WL_SHM_VERSION, ()),
            handle.create_global::<Core, wl_shell::WlShell, _>(WL_SHELL_VERSION, ()),
            handle.create_global::<Core, zxdg_shell_v6::ZxdgShellV6, _>(ZXDG_SHELL_V6_VERSION, ()),
            handle.create_global::<Core, wl_seat::WlSeat, _>(WL_SEAT_VERSION, ()),
            handle.create_global::<Core, wl_data_device_manager::WlDataDeviceManager, _>(
                WL_DATA_DEVICE_MANAGER_VERSION,
                (),
            ),
            handle.create_global::<Core, wl_output::WlOutput, _>(WL_OUTPUT_VERSION, ()),
        ];

        let listener = ListeningSocket::bind_auto("wayland", 1..32).map_err(CompositorError::Io)?;
        let socket_name = listener.socket_name().to_string_lossy().into_owned();
        crate::info!("listening on wayland socket {}", socket_name);

        Ok(Server {
            display,
            socket_name,
            listener,
            _globals: globals,
        })
    }

    pub fn socket_name(&self) -> &str {
        &self.socket_name
    }

    /// Accepts any pending connection, dispatches every queued client
    /// request against `core`, flushes outgoing events, and flushes
    /// each live surface's frame-callback queue. Called once per main
    /// loop iteration.
    pub fn handle_event(&mut self, core: &mut Core) {
        match self.listener.accept() {
            Ok(Some(stream)) => {
                if let Err(e) = self.display.handle().insert_client(stream, Arc::new(ClientState)) {
                    crate::error!("failed to insert new client: {}", e);
                }
            }
            Ok(None) => {}
            Err(e) => crate::error!("failed to accept wayland client: {}", e),
        }

        if let Err(e) = self.display.dispatch_clients(core) {
            crate::error!("client dispatch failed: {}", e);
        }
        if let Err(e) = self.display.flush_clients() {
            crate::error!("failed to flush clients: {}", e);
        }

        let elapsed = core.clock.uptime_ms();
        for surface in crate::registry::live(core.surfaces.iter()) {
            surface.borrow_mut().flush_frame_callbacks(elapsed);
        }
        core.surfaces.retain(|weak| weak.strong_count() > 0);
    }
}

#[allow(unused_variables)]
impl GlobalDispatch<wl_compositor::WlCompositor, ()> for Core {
    fn bind(
        _state: &mut Self,
        _handle: &DisplayHandle,
        _client: &Client,
        resource: New<wl_compositor::WlCompositor>,
        _global_data: &(),
        data_init: &mut DataInit<'_, Self>,
    ) {
        data_init.init(resource, ());
    }
}

#[allow(unused_variables)]
impl Dispatch<wl_compositor::WlCompositor, ()> for Core {
    fn request(
        state: &mut Self,
        _client: &Client,
        _resource: &wl_compositor::WlCompositor,
        request: wl_compositor::Request,
        _data: &(),
        _dhandle: &DisplayHandle,
        data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            wl_compositor::Request::CreateSurface { id } => {
                crate::surface::create_surface(state, data_init, id);
            }
            wl_compositor::Request::CreateRegion { id } => {
                crate::region::create_region(data_init, id);
            }
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: wayland_server::backend::ObjectId, _data: &()) {}
}
