//! Render target surfaces

use std::ffi::CString;
use std::path::Path as FsPath;

use tracing::debug;

use crate::enums::Format;
use crate::error::{self, Error, Result};
use crate::ffi;
use crate::handle::{ForeignRefCounted, Handle};
use crate::status::Status;

pub(crate) struct SurfaceKind;

unsafe impl ForeignRefCounted for SurfaceKind {
    type Raw = ffi::cairo_surface_t;
    const KIND: &'static str = "surface";

    unsafe fn reference(raw: *mut Self::Raw) {
        ffi::cairo_surface_reference(raw);
    }

    unsafe fn destroy(raw: *mut Self::Raw) {
        ffi::cairo_surface_destroy(raw);
    }

    unsafe fn status(raw: *mut Self::Raw) -> Status {
        Status(ffi::cairo_surface_status(raw))
    }
}

/// A render target. Cloning shares the one underlying engine surface.
#[derive(Clone, Debug)]
pub struct Surface {
    handle: Handle<SurfaceKind>,
}

impl Surface {
    /// Creates an in-memory image surface of the given pixel format.
    pub fn image(format: Format, width: i32, height: i32) -> Result<Self> {
        let raw = unsafe { ffi::cairo_image_surface_create(format.as_raw(), width, height) };
        let handle = unsafe { Handle::wrap(raw, "cairo_image_surface_create")? };
        debug!(width, height, "created image surface");
        Ok(Surface { handle })
    }

    /// Wraps an already-owned raw surface reference.
    ///
    /// # Safety
    ///
    /// `raw` must carry a reference the wrapper may release.
    pub(crate) unsafe fn from_owned(
        raw: *mut ffi::cairo_surface_t,
        call: &'static str,
    ) -> Result<Self> {
        let handle = Handle::wrap(raw, call)?;
        Ok(Surface { handle })
    }

    /// The surface's current status.
    pub fn status(&self) -> Status {
        self.handle.status()
    }

    /// Raw engine pointer; bypasses every wrapper check.
    pub fn as_ptr(&self) -> *mut ffi::cairo_surface_t {
        self.handle.as_ptr()
    }

    /// The engine-side reference count, counting every live share.
    pub fn reference_count(&self) -> u32 {
        unsafe { ffi::cairo_surface_get_reference_count(self.as_ptr()) }
    }

    pub fn width(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_width(self.as_ptr()) }
    }

    pub fn height(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_height(self.as_ptr()) }
    }

    /// Bytes per image row, including padding.
    pub fn stride(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_stride(self.as_ptr()) }
    }

    pub fn format(&self) -> Result<Format> {
        let raw = unsafe { ffi::cairo_image_surface_get_format(self.as_ptr()) };
        Format::from_raw(raw).ok_or(Error::UnexpectedEnumValue {
            what: "Format",
            value: raw,
        })
    }

    /// Completes any pending drawing so the pixel data is consistent.
    pub fn flush(&mut self) -> Result<()> {
        unsafe { ffi::cairo_surface_flush(self.as_ptr()) };
        self.handle.check("cairo_surface_flush")
    }

    /// Finishes the surface; further drawing to it fails.
    pub fn finish(&mut self) -> Result<()> {
        unsafe { ffi::cairo_surface_finish(self.as_ptr()) };
        self.handle.check("cairo_surface_finish")
    }

    /// Writes the surface contents out as a PNG file.
    pub fn write_to_png(&self, path: impl AsRef<FsPath>) -> Result<()> {
        let path = CString::new(path.as_ref().as_os_str().as_encoded_bytes())
            .map_err(|_| Error::NulByte { what: "path" })?;
        let status = unsafe { ffi::cairo_surface_write_to_png(self.as_ptr(), path.as_ptr()) };
        error::check("cairo_surface_write_to_png", Status(status))?;
        debug!("wrote surface to png");
        Ok(())
    }
}
