//! Strongly typed device pointers.
//!
//! `yonder` tags a raw address as belonging to device (accelerator) memory,
//! so host and device pointers cannot be confused. A [`DevicePtr<T>`] has the
//! same layout as a `*mut T` and behaves like one, except that the operations
//! which actually touch memory exist only in device builds
//! (`target_os = "cuda"`), and every crossing between the tagged and raw
//! worlds is an explicit call visible at the call site.
//!
//! The crate never tracks at runtime which memory space an address refers to
//! and never manages allocation or lifetime. A device pointer is exactly as
//! dangerous as the raw pointer it wraps; the tag only prevents the *silent*
//! mistakes.
//!
//! # Pointer kinds
//!
//! | Type | Wraps | Arithmetic | Device deref |
//! |------|-------|------------|--------------|
//! | [`DevicePtr<T>`] | `*mut T` | yes | shared + exclusive |
//! | [`DeviceConstPtr<T>`] | `*const T` | yes | shared only |
//! | [`OpaqueDevicePtr`] | `*mut c_void` | no | no |
//! | [`OpaqueDeviceConstPtr`] | `*const c_void` | no | no |
//!
//! # Sanctioned conversions
//!
//! | From | To | Form |
//! |------|----|------|
//! | `*mut T` | `DevicePtr<T>` | explicit [`DevicePtr::from_raw`] |
//! | `DevicePtr<T>` | raw pointer, `usize`, `bool` | explicit `as_raw*` / `addr` / `is_null` |
//! | `DevicePtr<T>` | `DeviceConstPtr<T>` | implicit (`From`) |
//! | `DevicePtr<T>` | opaque wrappers | implicit (`From`) |
//! | `OpaqueDevicePtr` | `DevicePtr<T>` | explicit [`OpaqueDevicePtr::cast`] |
//! | `DevicePtr<T>` | `DevicePtr<U>` | never directly; round-trip through raw or opaque |
//!
//! # Quick start
//!
//! ```
//! use yonder::{get, DevicePtr, OpaqueDevicePtr};
//!
//! let mut buffer = [0i32; 4];
//! let base = DevicePtr::from_raw(buffer.as_mut_ptr());
//!
//! // Address arithmetic and ordering work everywhere.
//! let third = base + 2;
//! assert_eq!(third - base, 2);
//! assert!(base < third);
//!
//! // Discarding type information is lossless and implicit.
//! let untyped: OpaqueDevicePtr = base.into();
//!
//! // Reasserting a pointee type is explicit.
//! let typed = untyped.cast::<i32>();
//! assert_eq!(get(typed), get(base));
//! ```

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

#[cfg(test)]
extern crate std;

pub mod const_ptr;
pub mod iter;
pub mod opaque;
pub mod ptr;
pub mod raw;

// Public re-exports for the primary API surface.
pub use const_ptr::DeviceConstPtr;
pub use iter::{ConstIter, Iter};
pub use opaque::{OpaqueDeviceConstPtr, OpaqueDevicePtr};
pub use ptr::DevicePtr;
pub use raw::{get, IntoRaw};
