// Minimal entry point: wires the logging stubs in place of a real
// GL/EGL renderer and DRM/libinput backend, binds the wayland socket,
// and runs the frame loop until the backend goes away.
//
// Argument parsing is deliberately manual -- the teacher's own `ways`
// layer has no `clap`/`structopt` dependency, and the only two
// settings here (an optional background image path, an optional log
// level override) don't earn one.

use std::time::SystemTime;

use waffle_core::backend::stub::LoggingBackend;
use waffle_core::renderer::stub::LoggingRenderer;
use waffle_core::{main_loop::MainLoop, server::Server, Core};

struct Args {
    background_image: Option<String>,
    log_level: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args {
        background_image: None,
        log_level: None,
    };
    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--log-level" => args.log_level = raw.next(),
            other => args.background_image = Some(other.to_string()),
        }
    }
    args
}

fn main() {
    let args = parse_args();
    if let Some(level) = &args.log_level {
        std::env::set_var("WAFFLE_CORE_LOG", level);
    }

    let mut core = Core::new(Box::new(LoggingRenderer::new()), Box::new(LoggingBackend::new()));

    if let Some(path) = &args.background_image {
        // Background rendering is out of scope (see DESIGN.md); the
        // path is accepted and logged so a future renderer has
        // somewhere to read it from, but no pixels are loaded here.
        waffle_core::info!("background image {} requested but not loaded (stub renderer)", path);
    }

    let mut server = match Server::new() {
        Ok(server) => server,
        Err(e) => {
            waffle_core::error!("failed to start wayland server: {}", e);
            std::process::exit(1);
        }
    };
    println!("listening on {}", server.socket_name());

    println!("Begin render loop...");
    let start = SystemTime::now();
    MainLoop::new().run(&mut server, &mut core);
    let end = SystemTime::now();

    println!("uptime: {}", end.duration_since(start).unwrap().as_secs_f32());
}
