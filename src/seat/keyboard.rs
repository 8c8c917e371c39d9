// wl_keyboard: key events bound to one seat. `keymap` and `modifiers`
// are intentionally not emitted -- a keymap requires a real xkb
// compositor_keymap and the backend layer this crate stubs out does
// not produce one, so advertising keyboard capability while a client
// waits forever on `keymap` would be worse than the truth: keys are
// delivered, layout negotiation is not implemented. See `DESIGN.md`.

use wayland_server::backend::{ClientId, ObjectId};
use wayland_server::protocol::wl_keyboard;
use wayland_server::{Client, DataInit, Dispatch, DisplayHandle, Resource};

use crate::seat::Seat;
use crate::timing::{Clock, SerialAllocator};
use crate::Core;

use std::cell::RefCell;
use std::rc::Rc;

#[allow(unused_variables)]
impl Dispatch<wl_keyboard::WlKeyboard, Rc<RefCell<Seat>>> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        _resource: &wl_keyboard::WlKeyboard,
        request: wl_keyboard::Request,
        _data: &Rc<RefCell<Seat>>,
        _dhandle: &DisplayHandle,
        _data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            wl_keyboard::Request::Release => {}
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &Rc<RefCell<Seat>>) {}
}

/// Delivers a single key press/release to this seat's keyboard, if it
/// has one bound. The original backend leaves this call unimplemented
/// entirely (see `DESIGN.md`); emitting `key` here is a supplement,
/// since a compositor that accepts keyboard focus but never forwards
/// a keypress is not a useful one to type into.
pub fn on_key(seat: &Rc<RefCell<Seat>>, serials: &mut SerialAllocator, clock: &Clock, key: u32, pressed: bool) {
    let keyboard = match seat.borrow().keyboard.clone() {
        Some(k) => k,
        None => return,
    };
    let state = if pressed {
        wl_keyboard::KeyState::Pressed
    } else {
        wl_keyboard::KeyState::Released
    };
    if keyboard.version() >= wl_keyboard::EVT_KEY_SINCE {
        keyboard.key(serials.next(), clock.uptime_ms(), key, state);
    }
}
