// The top-level frame loop: sleep to the next frame deadline, pump
// the wire protocol, draw, pump backend input, repeat. Mirrors the
// original implementation's `main.cc` shape, with the fixed sleep
// replaced by `FrameBudget` so drift doesn't accumulate across frames.

pub struct MainLoop {
    budget: crate::timing::FrameBudget,
}

impl MainLoop {
    pub fn new() -> MainLoop {
        MainLoop {
            budget: crate::timing::FrameBudget::new(crate::TARGET_FPS),
        }
    }

    /// Runs until the backend reports it is no longer valid (the
    /// window was closed, the DRM device was unplugged, and so on).
    pub fn run(&mut self, server: &mut crate::server::Server, core: &mut crate::Core) {
        loop {
            std::thread::sleep(self.budget.next_sleep());

            server.handle_event(core);
            core.compositor.draw();

            if !core.handle_compositor_event() {
                break;
            }
        }
    }
}

impl Default for MainLoop {
    fn default() -> Self {
        MainLoop::new()
    }
}
