//! Bounds-check macros for the hot scan loops
//!
//! Debug builds index normally and panic with a useful message on a bad
//! index; release builds use unchecked access. Callers must have validated
//! the index (the grid's `in_bounds`/`index` pair does this).
//!
//! ```rust
//! use openbox_engine::fast;
//!
//! let temps = vec![20.0f32; 4];
//! let t = *fast!(temps, [2]);
//! assert_eq!(t, 20.0);
//!
//! let mut life = vec![0i32; 4];
//! fast!(life, [2] = -1);
//! assert_eq!(life[2], -1);
//! ```

/// Checked-in-debug, unchecked-in-release slice access.
#[macro_export]
macro_rules! fast {
    // Read: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
