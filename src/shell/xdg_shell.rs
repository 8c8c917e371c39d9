// zxdg_shell_v6: the unstable predecessor of the stable xdg_shell,
// and the protocol this design targets (see the crate's non-goals --
// stable xdg_shell's extra popup/positioner semantics are not
// implemented). A toplevel's configure handshake is two events: the
// shell surface's own `configure` (always sent, carries the serial
// the client must `ack_configure`) and the toplevel's `configure`
// (geometry hint plus window state, here a fixed "client picks its own
// size" 0x0 with `activated` set, since this compositor does no
// tiling or resize negotiation).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wayland_protocols::unstable::xdg_shell::v6::server::{
    zxdg_positioner_v6, zxdg_shell_v6, zxdg_surface_v6, zxdg_toplevel_v6,
};
use wayland_server::backend::{ClientId, ObjectId};
use wayland_server::protocol::wl_surface;
use wayland_server::{Client, DataInit, Dispatch, DisplayHandle, GlobalDispatch, New, Resource};

use crate::shell::Window;
use crate::surface::Surface;
use crate::texture::TextureHandle;
use crate::Core;

pub struct XdgSurface {
    surface: Rc<RefCell<Surface>>,
    wl_surface: wl_surface::WlSurface,
    client: ClientId,
}

impl Window for XdgSurface {
    fn wl_surface(&self) -> wl_surface::WlSurface {
        self.wl_surface.clone()
    }

    fn client_id(&self) -> ClientId {
        self.client.clone()
    }

    fn texture(&self) -> Option<TextureHandle> {
        self.surface.borrow().texture.clone()
    }

    fn committed_size(&self) -> (u32, u32) {
        self.surface.borrow().committed_size
    }
}

/// The toplevel role object. Distinct from `XdgSurface` because the
/// protocol itself splits them -- `zxdg_surface_v6.get_toplevel` hangs
/// a second wire object off the surface role -- but nothing in this
/// design needs to address events to it beyond the one `configure`
/// sent at creation, so it carries no behavior of its own.
#[allow(dead_code)]
pub struct ToplevelSurface {
    surface: Rc<RefCell<Surface>>,
}

#[allow(unused_variables)]
impl GlobalDispatch<zxdg_shell_v6::ZxdgShellV6, ()> for Core {
    fn bind(
        _state: &mut Self,
        _handle: &DisplayHandle,
        _client: &Client,
        resource: New<zxdg_shell_v6::ZxdgShellV6>,
        _global_data: &(),
        data_init: &mut DataInit<'_, Self>,
    ) {
        data_init.init(resource, ());
    }
}

#[allow(unused_variables)]
impl Dispatch<zxdg_shell_v6::ZxdgShellV6, ()> for Core {
    fn request(
        state: &mut Self,
        client: &Client,
        _resource: &zxdg_shell_v6::ZxdgShellV6,
        request: zxdg_shell_v6::Request,
        _data: &(),
        _dhandle: &DisplayHandle,
        data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            zxdg_shell_v6::Request::GetXdgSurface { id, surface } => {
                let surf = match surface.data::<Rc<RefCell<Surface>>>() {
                    Some(s) => s.clone(),
                    None => return,
                };
                let xdg_surface = Rc::new(RefCell::new(XdgSurface {
                    surface: surf.clone(),
                    wl_surface: surface,
                    client: client.id(),
                }));
                let weak: Weak<RefCell<dyn Window>> = Rc::downgrade(&xdg_surface);
                state.compositor.add_window(weak);
                data_init.init(id, xdg_surface);
            }
            zxdg_shell_v6::Request::CreatePositioner { id } => {
                crate::debug!("zxdg_shell_v6.create_positioner: positioning is not implemented");
                data_init.init(id, ());
            }
            zxdg_shell_v6::Request::Pong { .. } => {}
            zxdg_shell_v6::Request::Destroy => {}
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &()) {}
}

#[allow(unused_variables)]
impl Dispatch<zxdg_positioner_v6::ZxdgPositionerV6, ()> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        _resource: &zxdg_positioner_v6::ZxdgPositionerV6,
        _request: zxdg_positioner_v6::Request,
        _data: &(),
        _dhandle: &DisplayHandle,
        _data_init: &mut DataInit<'_, Self>,
    ) {
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &()) {}
}

#[allow(unused_variables)]
impl Dispatch<zxdg_surface_v6::ZxdgSurfaceV6, Rc<RefCell<XdgSurface>>> for Core {
    fn request(
        state: &mut Self,
        _client: &Client,
        resource: &zxdg_surface_v6::ZxdgSurfaceV6,
        request: zxdg_surface_v6::Request,
        data: &Rc<RefCell<XdgSurface>>,
        _dhandle: &DisplayHandle,
        data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            zxdg_surface_v6::Request::GetToplevel { id } => {
                let surf = data.borrow().surface.clone();
                let toplevel_rc = Rc::new(RefCell::new(ToplevelSurface { surface: surf }));
                let toplevel = data_init.init(id, toplevel_rc.clone());

                if toplevel.version() >= zxdg_toplevel_v6::EVT_CONFIGURE_SINCE {
                    let states: Vec<u8> = vec![zxdg_toplevel_v6::State::Activated as u8];
                    toplevel.configure(0, 0, states);
                }

                if resource.version() >= zxdg_surface_v6::EVT_CONFIGURE_SINCE {
                    let serial = state.serials.next();
                    resource.configure(serial);
                }
            }
            zxdg_surface_v6::Request::SetWindowGeometry { .. } => {
                crate::debug!("zxdg_surface_v6.set_window_geometry is not implemented");
            }
            zxdg_surface_v6::Request::AckConfigure { .. } => {}
            zxdg_surface_v6::Request::Destroy => {}
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &Rc<RefCell<XdgSurface>>) {}
}

#[allow(unused_variables)]
impl Dispatch<zxdg_toplevel_v6::ZxdgToplevelV6, Rc<RefCell<ToplevelSurface>>> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        _resource: &zxdg_toplevel_v6::ZxdgToplevelV6,
        request: zxdg_toplevel_v6::Request,
        _data: &Rc<RefCell<ToplevelSurface>>,
        _dhandle: &DisplayHandle,
        _data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            zxdg_toplevel_v6::Request::Destroy => {}
            zxdg_toplevel_v6::Request::SetParent { .. }
            | zxdg_toplevel_v6::Request::SetTitle { .. }
            | zxdg_toplevel_v6::Request::SetAppId { .. }
            | zxdg_toplevel_v6::Request::ShowWindowMenu { .. }
            | zxdg_toplevel_v6::Request::Move { .. }
            | zxdg_toplevel_v6::Request::Resize { .. }
            | zxdg_toplevel_v6::Request::SetMaxSize { .. }
            | zxdg_toplevel_v6::Request::SetMinSize { .. }
            | zxdg_toplevel_v6::Request::SetMaximized
            | zxdg_toplevel_v6::Request::UnsetMaximized
            | zxdg_toplevel_v6::Request::SetFullscreen { .. }
            | zxdg_toplevel_v6::Request::UnsetFullscreen
            | zxdg_toplevel_v6::Request::SetMinimized => {
                crate::debug!("zxdg_toplevel_v6 request accepted but ignored");
            }
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &Rc<RefCell<ToplevelSurface>>) {}
}
