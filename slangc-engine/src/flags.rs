//! Feature flags for global session creation

use bitflags::bitflags;

bitflags! {
    /// Optional engine features enabled when a global session is created.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct GlobalSessionFlags: u32 {
        /// Allow the GLSL backend to be used for code generation.
        const ENABLE_GLSL = 1 << 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_bits_are_dropped() {
        let flags = GlobalSessionFlags::from_bits_truncate(0xffff_ffff);
        assert_eq!(flags, GlobalSessionFlags::ENABLE_GLSL);
    }
}
