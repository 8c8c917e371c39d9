//! Shell surfaces: the protocols that turn a bare `wl_surface` into a
//! window the compositor tracks and draws. Two variants are supported,
//! `wl_shell` (legacy, toplevel-only) and `zxdg_shell_v6`.

pub mod wl_shell;
pub mod xdg_shell;

use wayland_server::backend::ClientId;
use wayland_server::protocol::wl_surface;

use crate::texture::TextureHandle;

/// What the compositor's window list needs from a shell surface,
/// independent of which protocol created it. Both `wl_shell` and
/// `zxdg_shell_v6` toplevels implement this so `Compositor` never has
/// to match on which shell produced a given entry.
pub trait Window {
    fn wl_surface(&self) -> wl_surface::WlSurface;
    fn client_id(&self) -> ClientId;
    fn texture(&self) -> Option<TextureHandle>;
    fn committed_size(&self) -> (u32, u32);
}
