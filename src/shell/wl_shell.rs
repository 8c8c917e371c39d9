// wl_shell: the legacy, pre-xdg toplevel protocol. Kept alongside
// zxdg_shell_v6 because a number of still-relevant clients (simple X11
// bridges, some toolkits' fallback paths) never learned the newer
// protocol. Only `set_toplevel` is meaningful here; every other
// request (popups, transients, fullscreen, window-manager hints) is
// accepted and ignored, since this compositor has no window manager
// surface beyond "draw every mapped toplevel".

use std::cell::RefCell;
use std::rc::Rc;

use wayland_server::backend::{ClientId, ObjectId};
use wayland_server::protocol::{wl_shell, wl_shell_surface, wl_surface};
use wayland_server::{Client, DataInit, Dispatch, DisplayHandle, GlobalDispatch, New, Resource};

use crate::shell::Window;
use crate::surface::Surface;
use crate::texture::TextureHandle;
use crate::Core;

pub struct ShellSurface {
    surface: Rc<RefCell<Surface>>,
    wl_surface: wl_surface::WlSurface,
    client: ClientId,
}

impl Window for ShellSurface {
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

#[allow(unused_variables)]
impl GlobalDispatch<wl_shell::WlShell, ()> for Core {
    fn bind(
        _state: &mut Self,
        _handle: &DisplayHandle,
        _client: &Client,
        resource: New<wl_shell::WlShell>,
        _global_data: &(),
        data_init: &mut DataInit<'_, Self>,
    ) {
        data_init.init(resource, ());
    }
}

#[allow(unused_variables)]
impl Dispatch<wl_shell::WlShell, ()> for Core {
    fn request(
        state: &mut Self,
        client: &Client,
        _resource: &wl_shell::WlShell,
        request: wl_shell::Request,
        _data: &(),
        _dhandle: &DisplayHandle,
        data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            wl_shell::Request::GetShellSurface { id, surface } => {
                let surf = match surface.data::<Rc<RefCell<Surface>>>() {
                    Some(s) => s.clone(),
                    None => return,
                };
                let shell = Rc::new(RefCell::new(ShellSurface {
                    surface: surf,
                    wl_surface: surface,
                    client: client.id(),
                }));
                let weak: std::rc::Weak<RefCell<dyn Window>> = Rc::downgrade(&shell);
                state.compositor.add_window(weak);
                data_init.init(id, shell);
            }
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &()) {}
}

#[allow(unused_variables)]
impl Dispatch<wl_shell_surface::WlShellSurface, Rc<RefCell<ShellSurface>>> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        resource: &wl_shell_surface::WlShellSurface,
        request: wl_shell_surface::Request,
        _data: &Rc<RefCell<ShellSurface>>,
        _dhandle: &DisplayHandle,
        _data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            wl_shell_surface::Request::Pong { .. } => {}
            wl_shell_surface::Request::SetToplevel => {}
            wl_shell_surface::Request::Move { .. }
            | wl_shell_surface::Request::Resize { .. }
            | wl_shell_surface::Request::SetTransient { .. }
            | wl_shell_surface::Request::SetFullscreen { .. }
            | wl_shell_surface::Request::SetPopup { .. }
            | wl_shell_surface::Request::SetMaximized { .. }
            | wl_shell_surface::Request::SetTitle { .. }
            | wl_shell_surface::Request::SetClass { .. } => {
                crate::debug!("wl_shell_surface request accepted but ignored");
            }
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &Rc<RefCell<ShellSurface>>) {}
}
