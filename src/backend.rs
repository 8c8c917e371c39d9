// The platform backend (DRM/GBM + libinput/udev, or X11) lives outside
// this crate. It owns the real display connection and input devices;
// this module only defines the narrow interface the core pumps each
// iteration and a logging stand-in that never produces real input, so
// the main loop can run end to end in this repository.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackendEvent {
    PointerMotion { x: f64, y: f64 },
    PointerButton { button: u32, pressed: bool },
    PointerLeave,
    Key { key: u32, pressed: bool },
    WindowResized { width: u32, height: u32 },
}

pub trait Backend {
    /// False once the underlying display/window has gone away; the
    /// main loop treats this as a request to terminate.
    fn is_valid(&self) -> bool;

    /// Drains whatever OS input arrived since the last call. Must not
    /// block (the main loop already slept to the frame deadline).
    fn poll_events(&mut self) -> Vec<BackendEvent>;
}

pub mod stub {
    use super::*;

    /// Always valid, never produces input. A real backend replaces
    /// this with DRM/libinput or X11 event-pump plumbing.
    #[derive(Default)]
    pub struct LoggingBackend {
        valid: bool,
    }

    impl LoggingBackend {
        pub fn new() -> LoggingBackend {
            LoggingBackend { valid: true }
        }

        pub fn shut_down(&mut self) {
            self.valid = false;
        }
    }

    impl Backend for LoggingBackend {
        fn is_valid(&self) -> bool {
            self.valid
        }

        fn poll_events(&mut self) -> Vec<BackendEvent> {
            Vec::new()
        }
    }
}
