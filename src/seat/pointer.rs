// wl_pointer: motion, button and axis events bound to one seat. The
// requests a client can send here (set_cursor, release) carry no
// compositing behavior in this design -- cursor image ownership is a
// backend/renderer concern this crate does not model (see the
// crate's non-goals) -- so `request` only needs to acknowledge them.

use wayland_server::backend::{ClientId, ObjectId};
use wayland_server::protocol::{wl_pointer, wl_surface};
use wayland_server::{Client, DataInit, Dispatch, DisplayHandle, Resource};

use crate::seat::focus::FocusTransition;
use crate::seat::Seat;
use crate::timing::{Clock, SerialAllocator};
use crate::vec2::Vec2;
use crate::Core;

use std::cell::RefCell;
use std::rc::Rc;

#[allow(unused_variables)]
impl Dispatch<wl_pointer::WlPointer, Rc<RefCell<Seat>>> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        _resource: &wl_pointer::WlPointer,
        request: wl_pointer::Request,
        _data: &Rc<RefCell<Seat>>,
        _dhandle: &DisplayHandle,
        _data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            wl_pointer::Request::SetCursor { .. } => {}
            wl_pointer::Request::Release => {}
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &Rc<RefCell<Seat>>) {}
}

/// Routes a pointer motion sample to `target`, emitting `enter` or
/// `motion` depending on whether `target` is the already-focused
/// surface. `pos` is the pointer position in surface-local pixels.
pub fn on_motion(
    seat: &Rc<RefCell<Seat>>,
    serials: &mut SerialAllocator,
    clock: &Clock,
    target: &wl_surface::WlSurface,
    pos: Vec2<f64>,
) {
    let pointer = match seat.borrow().pointer.clone() {
        Some(p) => p,
        None => return,
    };
    let transition = seat.borrow_mut().focus.transition(target.id());

    match transition {
        FocusTransition::Enter => {
            if pointer.version() >= wl_pointer::EVT_ENTER_SINCE {
                pointer.enter(serials.next(), target, pos.x, pos.y);
            }
        }
        FocusTransition::Motion => {
            if pointer.version() >= wl_pointer::EVT_MOTION_SINCE {
                pointer.motion(clock.uptime_ms(), pos.x, pos.y);
            }
        }
    }
    if pointer.version() >= wl_pointer::EVT_FRAME_SINCE {
        pointer.frame();
    }
}

/// Clears this seat's pointer focus, sending `leave` to whatever
/// surface was focused. Called when the backend reports the pointer
/// left the compositor's window entirely.
pub fn on_leave(seat: &Rc<RefCell<Seat>>, serials: &mut SerialAllocator, focused: &wl_surface::WlSurface) {
    let pointer = match seat.borrow().pointer.clone() {
        Some(p) => p,
        None => return,
    };
    seat.borrow_mut().focus.clear();
    if pointer.version() >= wl_pointer::EVT_LEAVE_SINCE {
        pointer.leave(serials.next(), focused);
    }
    if pointer.version() >= wl_pointer::EVT_FRAME_SINCE {
        pointer.frame();
    }
}

pub fn on_button(
    seat: &Rc<RefCell<Seat>>,
    serials: &mut SerialAllocator,
    clock: &Clock,
    button: u32,
    pressed: bool,
) {
    let pointer = match seat.borrow().pointer.clone() {
        Some(p) => p,
        None => return,
    };
    let state = if pressed {
        wl_pointer::ButtonState::Pressed
    } else {
        wl_pointer::ButtonState::Released
    };
    if pointer.version() >= wl_pointer::EVT_BUTTON_SINCE {
        pointer.button(serials.next(), clock.uptime_ms(), button, state);
    }
    if pointer.version() >= wl_pointer::EVT_FRAME_SINCE {
        pointer.frame();
    }
}
