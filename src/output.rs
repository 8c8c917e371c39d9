// wl_output: advertises the single fixed-resolution display this
// design addresses (see the crate's non-goals: no multi-output, no
// hotplug). Every geometry/mode/scale/done event a client might rely
// on to size its first surface correctly is sent once at bind time;
// nothing on this interface ever changes afterward.

use wayland_server::backend::{ClientId, ObjectId};
use wayland_server::protocol::wl_output;
use wayland_server::{Client, DataInit, Dispatch, DisplayHandle, GlobalDispatch, New, Resource};

use crate::{Core, OUTPUT_HEIGHT, OUTPUT_REFRESH_MHZ, OUTPUT_WIDTH};

#[allow(unused_variables)]
impl GlobalDispatch<wl_output::WlOutput, ()> for Core {
    fn bind(
        _state: &mut Self,
        _handle: &DisplayHandle,
        _client: &Client,
        resource: New<wl_output::WlOutput>,
        _global_data: &(),
        data_init: &mut DataInit<'_, Self>,
    ) {
        let output = data_init.init(resource, ());

        if output.version() >= wl_output::EVT_GEOMETRY_SINCE {
            output.geometry(
                0,
                0,
                OUTPUT_WIDTH,
                OUTPUT_HEIGHT,
                wl_output::Subpixel::None,
                String::new(),
                String::new(),
                wl_output::Transform::Normal,
            );
        }
        if output.version() >= wl_output::EVT_SCALE_SINCE {
            output.scale(1);
        }
        if output.version() >= wl_output::EVT_MODE_SINCE {
            output.mode(
                wl_output::Mode::Current | wl_output::Mode::Preferred,
                OUTPUT_WIDTH,
                OUTPUT_HEIGHT,
                OUTPUT_REFRESH_MHZ,
            );
        }
        if output.version() >= wl_output::EVT_DONE_SINCE {
            output.done();
        }
    }
}

#[allow(unused_variables)]
impl Dispatch<wl_output::WlOutput, ()> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        _resource: &wl_output::WlOutput,
        request: wl_output::Request,
        _data: &(),
        _dhandle: &DisplayHandle,
        _data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            wl_output::Request::Release => {}
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &()) {}
}
