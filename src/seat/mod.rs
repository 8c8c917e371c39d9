//! wl_seat: one input group per connecting client. Binds out to
//! `wl_pointer`/`wl_keyboard` (and a no-op `wl_touch` stub, since this
//! design does not model touch input -- see the crate's non-goals).
//!
//! A seat is created lazily, the first time a client binds `wl_seat`
//! or becomes the target of routed input (`Core::seat_for_client`),
//! and is looked up by `ClientId` rather than by wire object, since a
//! client may bind the global more than once.

pub mod focus;
pub mod keyboard;
pub mod pointer;

use std::cell::RefCell;
use std::rc::Rc;

use wayland_server::backend::{ClientId, ObjectId};
use wayland_server::protocol::wl_seat::{self, Capability};
use wayland_server::protocol::{wl_keyboard, wl_pointer, wl_touch};
use wayland_server::{Client, DataInit, Dispatch, DisplayHandle, GlobalDispatch, New, Resource};

use crate::Core;
use focus::PointerFocus;

/// The capabilities this compositor advertises on every seat. Fixed:
/// there is no touch backend to report, and every seat gets the same
/// pointer/keyboard pair (see the crate's non-goals on multi-seat
/// device assignment).
fn capabilities() -> Capability {
    Capability::Pointer | Capability::Keyboard
}

pub struct Seat {
    client: ClientId,
    pointer: Option<wl_pointer::WlPointer>,
    keyboard: Option<wl_keyboard::WlKeyboard>,
    focus: PointerFocus<ObjectId>,
}

impl Seat {
    pub fn new(client: ClientId) -> Seat {
        Seat {
            client,
            pointer: None,
            keyboard: None,
            focus: PointerFocus::new(),
        }
    }

    pub fn client_id(&self) -> ClientId {
        self.client.clone()
    }
}

#[allow(unused_variables)]
impl GlobalDispatch<wl_seat::WlSeat, ()> for Core {
    fn bind(
        _state: &mut Self,
        _handle: &DisplayHandle,
        _client: &Client,
        resource: New<wl_seat::WlSeat>,
        _global_data: &(),
        data_init: &mut DataInit<'_, Self>,
    ) {
        let seat = data_init.init(resource, ());
        if seat.version() >= wl_seat::EVT_CAPABILITIES_SINCE {
            seat.capabilities(capabilities());
        }
        if seat.version() >= wl_seat::EVT_NAME_SINCE {
            seat.name("seat0".to_string());
        }
    }
}

#[allow(unused_variables)]
impl Dispatch<wl_seat::WlSeat, ()> for Core {
    fn request(
        state: &mut Self,
        client: &Client,
        _resource: &wl_seat::WlSeat,
        request: wl_seat::Request,
        _data: &(),
        _dhandle: &DisplayHandle,
        data_init: &mut DataInit<'_, Self>,
    ) {
        let seat_rc = state.seat_for_client(client.id());
        match request {
            wl_seat::Request::GetPointer { id } => {
                let pointer = data_init.init(id, seat_rc.clone());
                // A second wl_pointer from the same client still gets a
                // live wire object (the library requires every `New<T>`
                // to be initialized), it just never becomes the one
                // this seat routes events through.
                if seat_rc.borrow().pointer.is_none() {
                    seat_rc.borrow_mut().pointer = Some(pointer);
                }
            }
            wl_seat::Request::GetKeyboard { id } => {
                let keyboard = data_init.init(id, seat_rc.clone());
                if seat_rc.borrow().keyboard.is_none() {
                    seat_rc.borrow_mut().keyboard = Some(keyboard);
                }
            }
            wl_seat::Request::GetTouch { id } => {
                data_init.init(id, ());
            }
            wl_seat::Request::Release => {}
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &()) {}
}

#[allow(unused_variables)]
impl Dispatch<wl_touch::WlTouch, ()> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        _resource: &wl_touch::WlTouch,
        _request: wl_touch::Request,
        _data: &(),
        _dhandle: &DisplayHandle,
        _data_init: &mut DataInit<'_, Self>,
    ) {
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &()) {}
}
