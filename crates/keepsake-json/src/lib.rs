//! Keepsake JSON - encode/decode extension traits
//!
//! Any `Serialize` value gains `to_json_bytes`/`to_json_string`, and byte
//! buffers and strings gain `from_json`:
//!
//! ```
//! use keepsake_json::{FromJson, ToJson};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let bytes = Point { x: 1, y: 2 }.to_json_bytes()?;
//! let point: Point = bytes.from_json()?;
//! assert_eq!(point, Point { x: 1, y: 2 });
//! # Ok::<(), keepsake_json::Error>(())
//! ```

mod decode;
mod encode;
mod error;

pub use decode::FromJson;
pub use encode::ToJson;
pub use error::{Error, Result};
