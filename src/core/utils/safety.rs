//! Zero-Cost Safety Macros
//!
//! Hot SPH loops index the particle arrays with indices that come straight out
//! of `0..n` or the neighbor grid, so bounds are already guaranteed.
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Usage:
//! ```rust
//! use sph_engine::fast;
//!
//! let densities = vec![998.0f32, 1002.5, 1000.0];
//! let j = 1;
//! // Read: fast!(slice, [index])
//! let rho_j = *fast!(densities, [j]);
//! assert_eq!(rho_j, 1002.5);
//!
//! let mut pressures = vec![0.0f32; 3];
//! // Write: fast!(slice, [index] = value)
//! fast!(pressures, [j] = 2000.0 * (rho_j - 1000.0));
//! assert_eq!(pressures[j], 5000.0);
//! ```

/// Bounds-checked in debug, `get_unchecked` in release.
///
/// Only use it where the index provably comes from the same array's range.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
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

    // Write pattern: fast!(slice, [index] = value)
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

#[cfg(test)]
mod tests {
    #[test]
    fn fast_read_returns_neighbor_density() {
        let densities = vec![1000.0f32, 1250.0, 980.0];
        assert_eq!(*fast!(densities, [1]), 1250.0);
    }

    #[test]
    fn fast_write_stores_pressure() {
        let mut pressures = vec![0.0f32; 4];
        fast!(pressures, [3] = -40.0);
        assert_eq!(pressures[3], -40.0);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fast_read_past_particle_count_panics_in_debug() {
        let densities = vec![1000.0f32; 2];
        let _ = *fast!(densities, [2]);
    }
}
