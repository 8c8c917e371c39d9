// wl_shm / wl_shm_pool / wl_buffer: shared-memory buffer support.
//
// A pool is an anonymous mmap of a client-supplied fd; buffers carve a
// `(offset, width, height, stride, format)` view out of it. Only
// ARGB8888 and XRGB8888 are recognized -- any other format is accepted
// as a live buffer with `format: None` rather than a protocol error, so
// a client that never attaches it pays no penalty; the rejection
// happens later, at `commit`, where it is logged and the buffer is
// left unuploaded (see `Surface::commit`).

use std::cell::RefCell;
use std::ffi::c_void;
use std::os::unix::io::{AsRawFd, OwnedFd, RawFd};
use std::rc::Rc;

use nix::sys::mman;
use nix::unistd;

use wayland_server::protocol::{wl_buffer, wl_shm, wl_shm_pool};
use wayland_server::{
    backend::ClientId, backend::ObjectId, Client, DataInit, Dispatch, DisplayHandle,
    GlobalDispatch, New, Resource,
};

use crate::renderer::ShmFormat;
use crate::Core;

#[allow(unused_variables)]
impl GlobalDispatch<wl_shm::WlShm, ()> for Core {
    fn bind(
        _state: &mut Self,
        _handle: &DisplayHandle,
        _client: &Client,
        resource: New<wl_shm::WlShm>,
        _global_data: &(),
        data_init: &mut DataInit<'_, Self>,
    ) {
        let shm = data_init.init(resource, ());
        shm.format(wl_shm::Format::Argb8888);
        shm.format(wl_shm::Format::Xrgb8888);
    }
}

#[allow(unused_variables)]
impl Dispatch<wl_shm::WlShm, ()> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        resource: &wl_shm::WlShm,
        request: wl_shm::Request,
        _data: &(),
        _dhandle: &DisplayHandle,
        data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            wl_shm::Request::CreatePool { id, fd, size } => {
                if size <= 0 {
                    resource.post_error(wl_shm::Error::InvalidFd, "invalid pool size".to_string());
                    return;
                }
                match ShmPool::new(fd, size as usize) {
                    Ok(pool) => {
                        data_init.init(id, Rc::new(RefCell::new(pool)));
                    }
                    Err(e) => {
                        crate::error!("failed to map wl_shm pool: {}", e);
                        resource.post_error(wl_shm::Error::InvalidFd, "mmap failed".to_string());
                    }
                }
            }
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &()) {}
}

#[allow(unused_variables)]
impl Dispatch<wl_shm_pool::WlShmPool, Rc<RefCell<ShmPool>>> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        resource: &wl_shm_pool::WlShmPool,
        request: wl_shm_pool::Request,
        data: &Rc<RefCell<ShmPool>>,
        _dhandle: &DisplayHandle,
        data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            wl_shm_pool::Request::CreateBuffer {
                id,
                offset,
                width,
                height,
                stride,
                format,
            } => {
                let format = match format.into_result() {
                    Ok(wl_shm::Format::Argb8888) => Some(ShmFormat::Argb8888),
                    Ok(wl_shm::Format::Xrgb8888) => Some(ShmFormat::Xrgb8888),
                    Ok(other) => {
                        crate::debug!("shm buffer with unsupported format {:?}", other);
                        None
                    }
                    Err(_) => None,
                };
                let buf = ShmBufferData {
                    pool: data.clone(),
                    offset,
                    width,
                    height,
                    stride,
                    format,
                };
                data_init.init(id, Rc::new(RefCell::new(buf)));
            }
            wl_shm_pool::Request::Resize { size } => {
                if let Err(e) = data.borrow_mut().resize(size as usize) {
                    crate::error!("failed to resize wl_shm pool: {}", e);
                }
            }
            wl_shm_pool::Request::Destroy => {}
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &Rc<RefCell<ShmPool>>) {}
}

#[allow(unused_variables)]
impl Dispatch<wl_buffer::WlBuffer, Rc<RefCell<ShmBufferData>>> for Core {
    fn request(
        _state: &mut Self,
        _client: &Client,
        _resource: &wl_buffer::WlBuffer,
        request: wl_buffer::Request,
        _data: &Rc<RefCell<ShmBufferData>>,
        _dhandle: &DisplayHandle,
        _data_init: &mut DataInit<'_, Self>,
    ) {
        match request {
            wl_buffer::Request::Destroy => {}
            _ => {}
        }
    }

    fn destroyed(_state: &mut Self, _client: ClientId, _resource: ObjectId, _data: &Rc<RefCell<ShmBufferData>>) {
        // The shm fd itself is unmapped by ShmPool's own Drop, not here.
    }
}

/// An mmapped anonymous region of shared memory, backing one or more
/// `wl_buffer`s carved out of it by offset.
pub struct ShmPool {
    fd: OwnedFd,
    ptr: *mut c_void,
    size: usize,
}

// Safe to move/share across the (single) compositor thread; the raw
// pointer only ever aliases memory the client also maps, which is
// exactly what shared memory is for.
unsafe impl Send for ShmPool {}

impl ShmPool {
    fn new(fd: OwnedFd, size: usize) -> nix::Result<ShmPool> {
        let raw_fd: RawFd = fd.as_raw_fd();
        let ptr = unsafe {
            mman::mmap(
                None,
                std::num::NonZeroUsize::new(size).unwrap(),
                mman::ProtFlags::PROT_READ,
                mman::MapFlags::MAP_SHARED,
                Some(&fd),
                0,
            )?
        };
        let _ = raw_fd;
        Ok(ShmPool { fd, ptr, size })
    }

    fn resize(&mut self, size: usize) -> nix::Result<()> {
        if size <= self.size {
            return Ok(());
        }
        let ptr = unsafe {
            mman::mmap(
                None,
                std::num::NonZeroUsize::new(size).unwrap(),
                mman::ProtFlags::PROT_READ,
                mman::MapFlags::MAP_SHARED,
                Some(&self.fd),
                0,
            )?
        };
        unsafe {
            let _ = mman::munmap(self.ptr, self.size);
        }
        self.ptr = ptr;
        self.size = size;
        Ok(())
    }
}

impl Drop for ShmPool {
    fn drop(&mut self) {
        unsafe {
            let _ = mman::munmap(self.ptr, self.size);
        }
        let _ = unistd::close(self.fd.as_raw_fd());
    }
}

/// A `wl_buffer` carved out of an `ShmPool` at `offset`, `stride`
/// bytes per row.
pub struct ShmBufferData {
    pool: Rc<RefCell<ShmPool>>,
    offset: i32,
    width: i32,
    height: i32,
    stride: i32,
    format: Option<ShmFormat>,
}

impl ShmBufferData {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn format(&self) -> Option<ShmFormat> {
        self.format
    }

    /// Copies this buffer's pixels out of the pool. A copy (rather
    /// than a borrowed slice) because the pool's mapping may outlive
    /// or be resized independently of any one read.
    pub fn pixels(&self) -> Vec<u8> {
        let pool = self.pool.borrow();
        let row_bytes = self.stride.max(self.width * 4) as usize;
        let len = row_bytes * self.height as usize;
        unsafe {
            let base = (pool.ptr as *const u8).offset(self.offset as isize);
            std::slice::from_raw_parts(base, len).to_vec()
        }
    }
}
