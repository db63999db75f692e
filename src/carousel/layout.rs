/// Card dimensions and spacing for one viewport width bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutProfile {
    pub card_width: f64,
    pub card_height: f64,
    /// Distance between adjacent card centers.
    pub spacing: f64,
}

/// `(min_width, profile)`, widest first. The first bracket whose minimum the
/// width reaches wins.
pub const BREAKPOINTS: [(f64, LayoutProfile); 5] = [
    (1536.0, LayoutProfile::new(280.0, 420.0, 320.0)),
    (1280.0, LayoutProfile::new(260.0, 400.0, 300.0)),
    (1024.0, LayoutProfile::new(240.0, 380.0, 280.0)),
    (768.0, LayoutProfile::new(220.0, 360.0, 260.0)),
    (0.0, LayoutProfile::new(200.0, 340.0, 240.0)),
];

/// Anything that can report the current viewport width in CSS pixels.
pub trait ViewportObserver {
    fn viewport_width(&self) -> f64;
}

impl ViewportObserver for f64 {
    fn viewport_width(&self) -> f64 {
        *self
    }
}

impl LayoutProfile {
    pub const fn new(card_width: f64, card_height: f64, spacing: f64) -> Self {
        Self {
            card_width,
            card_height,
            spacing,
        }
    }

    pub fn observe(viewport: &impl ViewportObserver) -> Self {
        resolve(viewport.viewport_width())
    }
}

/// Map a viewport width to its layout profile.
///
/// Negative or NaN widths are not meaningful; they fall through to the
/// narrowest profile.
pub fn resolve(width: f64) -> LayoutProfile {
    BREAKPOINTS
        .iter()
        .find(|(min, _)| width >= *min)
        .map(|(_, profile)| *profile)
        .unwrap_or(BREAKPOINTS[BREAKPOINTS.len() - 1].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_edges() {
        assert_eq!(resolve(1536.0), LayoutProfile::new(280.0, 420.0, 320.0));
        assert_eq!(resolve(1535.0), LayoutProfile::new(260.0, 400.0, 300.0));
        assert_eq!(resolve(1280.0), LayoutProfile::new(260.0, 400.0, 300.0));
        assert_eq!(resolve(1024.0), LayoutProfile::new(240.0, 380.0, 280.0));
        assert_eq!(resolve(1023.0), LayoutProfile::new(220.0, 360.0, 260.0));
        assert_eq!(resolve(768.0), LayoutProfile::new(220.0, 360.0, 260.0));
        assert_eq!(resolve(767.9), LayoutProfile::new(200.0, 340.0, 240.0));
        assert_eq!(resolve(0.0), LayoutProfile::new(200.0, 340.0, 240.0));
        assert_eq!(resolve(4000.0), LayoutProfile::new(280.0, 420.0, 320.0));
    }

    #[test]
    fn test_resolve_is_monotonic() {
        let mut prev = resolve(0.0);
        let mut width = 0.0;
        while width <= 2000.0 {
            let next = resolve(width);
            assert!(next.card_width >= prev.card_width);
            assert!(next.card_height >= prev.card_height);
            assert!(next.spacing >= prev.spacing);
            assert_eq!(next, resolve(width));
            prev = next;
            width += 7.5;
        }
    }

    #[test]
    fn test_invalid_widths_use_narrowest() {
        assert_eq!(resolve(-10.0), resolve(0.0));
        assert_eq!(resolve(f64::NAN), resolve(0.0));
    }

    #[test]
    fn test_observe_viewport() {
        struct FixedViewport(f64);
        impl ViewportObserver for FixedViewport {
            fn viewport_width(&self) -> f64 {
                self.0
            }
        }

        assert_eq!(
            LayoutProfile::observe(&FixedViewport(1300.0)),
            resolve(1280.0)
        );
        assert_eq!(LayoutProfile::observe(&800.0), resolve(768.0));
    }
}
