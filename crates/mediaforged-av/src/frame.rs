//! Buffers of encoded media data.
//!
//! A [`Frame`] either owns its bytes or borrows them from memory owned
//! elsewhere (a demuxer's packet, another frame). Only an owning frame can be
//! resized or assigned. A borrowed view never allocates and never frees what
//! it points at; it can be written in place only when it was made with
//! [`Frame::refer_to_mut`].

use crate::codec::AudioFrameDesc;
use mediaforged_common::{Error, Result};
use std::fmt;

/// Backing storage of a [`Frame`].
enum Data<'a> {
    Owned(Vec<u8>),
    Borrowed(&'a [u8]),
    BorrowedMut(&'a mut [u8]),
}

/// One unit of encoded media data.
///
/// # Example
///
/// ```
/// use mediaforged_av::Frame;
///
/// let packet = vec![0x47u8; 188];
///
/// let mut frame = Frame::new();
/// frame.refer_to(&packet);
/// assert_eq!(frame.as_ptr(), packet.as_ptr());
/// assert!(frame.resize(64).is_err());
///
/// frame.clear();
/// frame.assign(4, 0xff)?;
/// assert_eq!(frame.data(), &[0xff; 4]);
/// # Ok::<(), mediaforged_av::Error>(())
/// ```
pub struct Frame<'a> {
    data: Data<'a>,
}

/// Buffer of coded data.
///
/// Coded data has no meaningful picture size or channel count until it is
/// decoded, only a byte length.
pub type CodedData<'a> = Frame<'a>;

impl Frame<'static> {
    /// Create an empty frame. Nothing is allocated.
    pub fn new() -> Self {
        Self {
            data: Data::Owned(Vec::new()),
        }
    }

    /// Create a frame of `size` bytes, every byte set to `value`.
    pub fn with_size(size: usize, value: u8) -> Self {
        Self {
            data: Data::Owned(vec![value; size]),
        }
    }

    /// Create a frame holding a copy of `data`.
    ///
    /// The frame is independent of `data` afterwards.
    pub fn copy_from(data: &[u8]) -> Self {
        Self {
            data: Data::Owned(data.to_vec()),
        }
    }

    /// Create a zeroed frame large enough for one frame of interleaved PCM
    /// described by `desc` at `fps` frames per second.
    pub fn for_audio(desc: &AudioFrameDesc, fps: f64) -> Self {
        Self::with_size(desc.data_size(fps), 0)
    }
}

impl<'a> Frame<'a> {
    /// Resize the buffer to `new_size` bytes.
    ///
    /// Shrinking drops the tail and growing appends zero bytes; in both cases
    /// the whole buffer is then cleared to zero.
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        let buf = self.owned_mut("resize")?;
        if new_size < buf.len() {
            buf.truncate(new_size);
        } else if new_size > buf.len() {
            buf.resize(new_size, 0);
        }
        // Existing callers rely on a resize leaving every byte at zero,
        // including the ones kept by a shrink.
        buf.fill(0);
        Ok(())
    }

    /// Point this frame at `data` without copying it.
    ///
    /// Any bytes the frame owned before are released.
    pub fn refer_to(&mut self, data: &'a [u8]) {
        self.data = Data::Borrowed(data);
    }

    /// Point this frame at `data` without copying it, keeping it writable.
    ///
    /// [`Frame::data_mut`] then writes straight into `data`. The size is still
    /// fixed by the memory behind the view.
    pub fn refer_to_mut(&mut self, data: &'a mut [u8]) {
        self.data = Data::BorrowedMut(data);
    }

    /// Point this frame at the current bytes of `other`.
    ///
    /// `other` stays borrowed, and so cannot be resized or written, for as
    /// long as this view is alive.
    pub fn refer_frame(&mut self, other: &'a Frame<'_>) {
        self.refer_to(other.data());
    }

    /// Resize to `size` bytes and set every byte to `value`.
    ///
    /// Fails on a borrowed frame, which makes this the way to check whether a
    /// frame may be modified.
    pub fn assign(&mut self, size: usize, value: u8) -> Result<()> {
        self.resize(size)?;
        self.owned_mut("assign")?.fill(value);
        Ok(())
    }

    /// Release owned bytes and return to the empty state.
    ///
    /// A borrowed frame just forgets the memory it was pointing at.
    pub fn clear(&mut self) {
        self.data = Data::Owned(Vec::new());
    }

    /// Get the frame data.
    pub fn data(&self) -> &[u8] {
        match &self.data {
            Data::Owned(buf) => buf.as_slice(),
            Data::Borrowed(buf) => *buf,
            Data::BorrowedMut(buf) => &**buf,
        }
    }

    /// Get mutable access to the frame data.
    ///
    /// Fails on a read-only view made by [`Frame::refer_to`] or
    /// [`Frame::refer_frame`].
    pub fn data_mut(&mut self) -> Result<&mut [u8]> {
        match &mut self.data {
            Data::Owned(buf) => Ok(buf.as_mut_slice()),
            Data::BorrowedMut(buf) => Ok(&mut **buf),
            Data::Borrowed(_) => Err(rejected("write to")),
        }
    }

    /// Get a raw pointer to the first byte.
    pub fn as_ptr(&self) -> *const u8 {
        self.data().as_ptr()
    }

    /// Get the size of the frame data.
    pub fn size(&self) -> usize {
        self.data().len()
    }

    /// Check if this frame is empty.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Check if this frame borrows its bytes.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.data, Data::Borrowed(_) | Data::BorrowedMut(_))
    }

    /// Make the frame own its data, copying borrowed bytes.
    pub fn into_owned(self) -> Frame<'static> {
        let data = match self.data {
            Data::Owned(buf) => buf,
            Data::Borrowed(buf) => buf.to_vec(),
            Data::BorrowedMut(buf) => buf.to_vec(),
        };
        Frame {
            data: Data::Owned(data),
        }
    }

    fn owned_mut(&mut self, operation: &'static str) -> Result<&mut Vec<u8>> {
        match &mut self.data {
            Data::Owned(buf) => Ok(buf),
            Data::Borrowed(_) | Data::BorrowedMut(_) => Err(rejected(operation)),
        }
    }
}

fn rejected(operation: &'static str) -> Error {
    #[cfg(feature = "tracing")]
    tracing::warn!(operation, "rejected mutation of a borrowed frame");
    Error::borrowed(operation)
}

/// Cloning a writable view copies its bytes into an owned frame.
impl Clone for Frame<'_> {
    fn clone(&self) -> Self {
        let data = match &self.data {
            Data::Owned(buf) => Data::Owned(buf.clone()),
            Data::Borrowed(buf) => Data::Borrowed(*buf),
            Data::BorrowedMut(buf) => Data::Owned(buf.to_vec()),
        };
        Self { data }
    }
}

impl Default for Frame<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for Frame<'_> {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}

impl fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("size", &self.size())
            .field("borrowed", &self.is_borrowed())
            .finish()
    }
}
