//! Colour values that convert between RGB, HSV, CMY(K) and hex representations,
//! stored either in-process or in a native colour object of a host application.
//!
//! # Example
//! ```
//! use rwcolour::{Colour, ColourModel, ColourSpace, Value};
//!
//! let mut colour = Colour::default();
//! colour.set_in("#FF8800", ColourSpace::Hex).unwrap();
//! assert_eq!(colour.get_in(ColourSpace::RgbFull), Value::from([255.0, 136.0, 0.0, 1.0]));
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod host;
pub mod model;
pub mod picker;
pub mod space;
pub mod value;

pub use error::ColourError;
pub use host::emulated::Emulated;
pub use host::{HostColour, NativeColour, NativeModel};
pub use model::{Colour, ColourDescriptor, ColourModel, InvalidInput};
pub use picker::ColourPicker;
pub use space::ColourSpace;
pub use value::Value;
