//! Mediaforged-Common: Shared types used across the mediaforged crates.
//!
//! - **Error Handling**: The `Error` enum and `Result` alias returned by every
//!   fallible operation on frames, codecs and file properties
//! - **Stream Kinds**: Classification of a container's streams
//! - **Property Lists**: The flat `(name, value)` export format
//!
//! # Examples
//!
//! ```
//! use mediaforged_common::{add_property, Error, PropertyVector, StreamKind};
//!
//! let mut data = PropertyVector::new();
//! add_property(&mut data, "numberOfAudioStreams", 2);
//! assert_eq!(data[0], ("numberOfAudioStreams".to_string(), "2".to_string()));
//!
//! let err = Error::not_found(StreamKind::Video, 5);
//! assert_eq!(err.to_string(), "no video properties correspond to stream at index 5");
//! ```

pub mod error;
pub mod property;
pub mod types;

pub use error::{Error, Result};
pub use property::{add_property, PropertyVector};
pub use types::StreamKind;
