// A composable boolean area over the plane, expressed as a tree of
// rectangles and set operations rather than a flat rectangle list.
// `add` unions in a new rectangle, `subtract` intersects with its
// inverse. Neither operation needs to inspect the existing tree, so
// building one of these from a long `set_input_region`/`set_opaque_
// region` call sequence is O(1) per call rather than O(n) merge work.
//
// Not consulted by compositing in this design (input/opaque regions
// are accepted and stored but not enforced, see the crate-level
// non-goals), but the object model is created and destroyed for
// protocol completeness, and is a standalone, fully testable unit.

use std::cell::RefCell;
use std::rc::Rc;

use wayland_server::protocol::wl_region;
use wayland_server::{backend::ClientId, backend::ObjectId, Client, DataInit, Dispatch, DisplayHandle, New};

use crate::Core;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug)]
enum Node {
    Rect(Rect),
    Union(Box<Node>, Box<Node>),
    Intersect(Box<Node>, Box<Node>),
    Inverse(Box<Node>),
}

impl Node {
    fn contains(&self, x: i32, y: i32) -> bool {
        match self {
            Node::Rect(r) => r.contains(x, y),
            Node::Union(a, b) => a.contains(x, y) || b.contains(x, y),
            Node::Intersect(a, b) => a.contains(x, y) && b.contains(x, y),
            Node::Inverse(a) => !a.contains(x, y),
        }
    }
}

/// A `wl_region`'s accumulated state.
#[derive(Debug)]
pub struct Region {
    root: Option<Node>,
}

impl Region {
    pub fn new() -> Region {
        Region { root: None }
    }

    /// Unions the rectangle `(x, y, width, height)` into this region.
    pub fn add(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let rect = Node::Rect(Rect::new(x, y, width, height));
        self.root = Some(match self.root.take() {
            Some(existing) => Node::Union(Box::new(existing), Box::new(rect)),
            None => rect,
        });
    }

    /// Removes the rectangle `(x, y, width, height)` from this region.
    pub fn subtract(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let rect = Node::Rect(Rect::new(x, y, width, height));
        let inverse = Node::Inverse(Box::new(rect));
        self.root = Some(match self.root.take() {
            Some(existing) => Node::Intersect(Box::new(existing), Box::new(inverse)),
            // Subtracting from an empty region leaves it empty: there
            // is nothing to intersect the inverse against.
            None => return,
        });
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        match &self.root {
            Some(node) => node.contains(x, y),
            None => false,
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::new()
    }
}

#[allow(unused_variables)]
impl Dispatch<wl_region::WlRegion, Rc<RefCell<Region>>> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        _resource: &wl_region::WlRegion,
        request: wl_region::Request,
        data: &Rc<RefCell<Region>>,
        _dhandle: &DisplayHandle,
        _data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            wl_region::Request::Add { x, y, width, height } => data.borrow_mut().add(x, y, width, height),
            wl_region::Request::Subtract { x, y, width, height } => data.borrow_mut().subtract(x, y, width, height),
            wl_region::Request::Destroy => {}
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &Rc<RefCell<Region>>) {}
}

pub fn create_region(data_init: &mut DataInit<'_, Core>, id: New<wl_region::WlRegion>) {
    data_init.init(id, Rc::new(RefCell::new(Region::new())));
}
