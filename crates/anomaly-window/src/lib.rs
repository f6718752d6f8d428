//! Sliding window with incrementally maintained statistics
//!
//! [`RingWindow`] keeps the most recent `capacity` samples of a stream and
//! tracks their sum and sum of squares as samples enter and leave, so the
//! window mean and population standard deviation are available in O(1)
//! after every push.
//!
//! ## Numerical drift
//!
//! Adding and subtracting the same values over a long stream accumulates
//! rounding error in the running sums. The window recomputes both sums from
//! the live buffer every `recompute_interval` evictions (by default once per
//! `capacity` evictions), which bounds the drift to what a single pass over
//! the window can accumulate.
//!
//! A window whose samples are all identical bypasses the sums entirely: its
//! mean is the held value and its standard deviation is exactly zero.
//!
//! ## Usage
//!
//! ```rust
//! use anomaly_window::RingWindow;
//!
//! let mut window = RingWindow::new(3).unwrap();
//! for value in [1.0, 2.0, 3.0] {
//!     window.push(value);
//! }
//! assert!(window.is_full());
//! assert_eq!(window.mean().unwrap(), 2.0);
//!
//! // Pushing into a full window evicts the oldest sample
//! assert_eq!(window.push(4.0), Some(1.0));
//! assert_eq!(window.mean().unwrap(), 3.0);
//! ```

pub mod ring;
pub mod stats;

pub use ring::RingWindow;
pub use stats::WindowStats;
