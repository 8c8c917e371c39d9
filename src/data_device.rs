// wl_data_device_manager: clipboard and drag-and-drop. Advertised
// because many clients probe for it unconditionally during startup
// and treat its absence as a hard error, but no selection or drag data
// actually changes hands here -- see the crate's non-goals. Every
// request still gets a live wire object where the protocol requires
// one; none of them produce any event back to the client.

use wayland_server::backend::{ClientId, ObjectId};
use wayland_server::protocol::{wl_data_device, wl_data_device_manager, wl_data_source};
use wayland_server::{Client, DataInit, Dispatch, DisplayHandle, GlobalDispatch, New};

use crate::Core;

#[allow(unused_variables)]
impl GlobalDispatch<wl_data_device_manager::WlDataDeviceManager, ()> for Core {
    fn bind(
        _state: &mut Self,
        _handle: &DisplayHandle,
        _client: &Client,
        resource: New<wl_data_device_manager::WlDataDeviceManager>,
        _global_data: &(),
        data_init: &mut DataInit<'_, Self>,
    ) {
        data_init.init(resource, ());
    }
}

#[allow(unused_variables)]
impl Dispatch<wl_data_device_manager::WlDataDeviceManager, ()> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        _resource: &wl_data_device_manager::WlDataDeviceManager,
        request: wl_data_device_manager::Request,
        _data: &(),
        _dhandle: &DisplayHandle,
        data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            wl_data_device_manager::Request::CreateDataSource { id } => {
                crate::debug!("wl_data_device_manager.create_data_source: clipboard is not implemented");
                data_init.init(id, ());
            }
            wl_data_device_manager::Request::GetDataDevice { id, .. } => {
                data_init.init(id, ());
            }
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &()) {}
}

#[allow(unused_variables)]
impl Dispatch<wl_data_device::WlDataDevice, ()> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        _resource: &wl_data_device::WlDataDevice,
        request: wl_data_device::Request,
        _data: &(),
        _dhandle: &DisplayHandle,
        _data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            wl_data_device::Request::StartDrag { .. } => {
                crate::debug!("wl_data_device.start_drag: drag-and-drop is not implemented");
            }
            wl_data_device::Request::SetSelection { .. } => {
                crate::debug!("wl_data_device.set_selection: clipboard is not implemented");
            }
            wl_data_device::Request::Release => {}
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &()) {}
}

#[allow(unused_variables)]
impl Dispatch<wl_data_source::WlDataSource, ()> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        _resource: &wl_data_source::WlDataSource,
        _request: wl_data_source::Request,
        _data: &(),
        _dhandle: &DisplayHandle,
        _data_init: &mut DataInit<'_, Self>,
    ) {
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &()) {}
}
