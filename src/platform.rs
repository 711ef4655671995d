/// Windows releases the binding can be built against, oldest first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    strum_macros::Display,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
pub enum Platform {
    WindowsXp,
    WindowsServer2003,
    WindowsServer2008,
}

/// Platform selected for this build through the `target-*` cargo features.
///
/// When both legacy features are enabled the oldest one wins, so the crate
/// never advertises a code the oldest requested target lacks.
pub const TARGET: Platform = if cfg!(feature = "target-winxp") {
    Platform::WindowsXp
} else if cfg!(feature = "target-win2003") {
    Platform::WindowsServer2003
} else {
    Platform::WindowsServer2008
};

impl Platform {
    /// Whether native result codes introduced with `since` exist on this platform.
    pub const fn supports(self, since: Platform) -> bool {
        self as u8 >= since as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platforms_are_ordered_by_release() {
        assert!(Platform::WindowsXp < Platform::WindowsServer2003);
        assert!(Platform::WindowsServer2003 < Platform::WindowsServer2008);
    }

    #[test]
    fn supports_is_inclusive() {
        assert!(Platform::WindowsServer2008.supports(Platform::WindowsServer2008));
        assert!(Platform::WindowsServer2008.supports(Platform::WindowsXp));
        assert!(!Platform::WindowsServer2003.supports(Platform::WindowsServer2008));
        assert!(!Platform::WindowsXp.supports(Platform::WindowsServer2003));
    }

    #[cfg(not(any(feature = "target-winxp", feature = "target-win2003")))]
    #[test]
    fn default_target_is_server_2008() {
        assert_eq!(TARGET, Platform::WindowsServer2008);
    }

    #[cfg(feature = "target-winxp")]
    #[test]
    fn winxp_feature_wins() {
        assert_eq!(TARGET, Platform::WindowsXp);
    }
}
