//! SIMD-Optimized Conversion Kernels
//!
//! This module provides SIMD-accelerated versions of the grayscale
//! conversion using the `multiversion` crate for automatic CPU dispatch.
//!
//! Supported instruction sets:
//! - x86-64: SSE4.1, AVX2
//! - ARM64: NEON
//!
//! # Usage
//!
//! All functions automatically dispatch to the best available implementation
//! at runtime. The scalar fallback is always available.

mod batch;

pub use batch::{GRAY8_LUT, INV_255, gray8_to_f64_lut_batch, gray8_to_f64_scaled_batch};

/// Get a description of the active SIMD features
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_features() {
        let features = active_features();
        println!("Active SIMD features: {}", features);
        assert!(!features.is_empty());
    }
}
