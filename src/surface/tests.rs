use super::*;
use crate::renderer::stub::LoggingRenderer;

#[test]
fn new_surface_has_no_texture_or_damage() {
    let mut surface = Surface::new();
    assert!(surface.texture.is_none());
    assert_eq!(surface.committed_size, (0, 0));
    surface.destroy();
}

#[test]
fn commit_with_no_pending_buffer_is_a_noop() {
    let mut surface = Surface::new();
    let mut renderer = LoggingRenderer::new();
    surface.mark_damaged();
    surface.commit(&mut renderer);
    assert!(surface.texture.is_none());
    assert_eq!(surface.committed_size, (0, 0));
    surface.destroy();
}

#[test]
fn commit_without_damage_is_a_noop_even_after_an_attach() {
    let mut surface = Surface::new();
    let mut renderer = LoggingRenderer::new();
    // attach(None) is a legal client sequence (unmapping a surface);
    // it sets the pending buffer slot but does not itself damage.
    surface.attach(None);
    surface.commit(&mut renderer);
    assert!(surface.texture.is_none());
    surface.destroy();
}

#[test]
fn flushing_an_empty_callback_list_does_not_panic() {
    let mut surface = Surface::new();
    surface.flush_frame_callbacks(42);
    surface.destroy();
}
