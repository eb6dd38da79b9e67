//! Maybe-fallible value containers: [`Option`], [`Result`] and [`Either`].
//!
//! All three are one generic container, [`Variant`], specialized by a sealed
//! [`Shape`] marker. Each instance holds exactly one live payload behind
//! private fields; callers branch through predicates (`is_some`, `is_err`,
//! `is_left`) and accessors, never by reaching into the representation.
//!
//! Two error channels are kept apart:
//!
//! - the `Err` branch of [`Result`] is an ordinary value to be handled;
//! - calling an accessor against the wrong branch (`unwrap` on `None`,
//!   `unwrap_err` on `Ok`) is a contract violation. It is logged through
//!   `tracing` and panics with the [`Violation`] message. The `*_or`,
//!   `*_or_else`, `*_or_default` and `try_*` siblings exist to avoid that
//!   path.
//!
//! ```
//! use oxyde_types::{Option, Result};
//!
//! fn divide(numerator: f64, divisor: f64) -> Result<f64, String> {
//!     if divisor == 0.0 {
//!         Result::err(format!("cannot divide {numerator} by 0"))
//!     } else {
//!         Result::ok(numerator / divisor)
//!     }
//! }
//!
//! assert_eq!(format!("{:?}", divide(100.0, 10.0)), "Ok(10.0)");
//! assert_eq!(format!("{}", divide(1.0, 0.0)), "Err(cannot divide 1 by 0)");
//!
//! let mut slot: Option<u8> = Option::none();
//! assert_eq!(*slot.get_or_insert(3), 3);
//! assert_eq!(slot.take(), Option::some(3));
//! assert!(slot.is_none());
//! ```

mod abort;
mod capability;
mod either;
mod iter;
mod option;
mod result;
mod sentinel;
mod variant;

pub use abort::Violation;
pub use either::Either;
pub use iter::{IntoIter, Iter};
pub use option::Option;
pub use result::Result;
pub use sentinel::Nothing;
pub use variant::{Choice, Fallible, Optional, Shape, Variant};
