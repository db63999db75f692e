use super::{layout::LayoutProfile, window::WindowEntry};

const CENTER_Z: i32 = 20;
const NEAR_Z: i32 = 15;
const FAR_Z: i32 = 5;

// outer cards are pulled in so they peek past the neighbours
const FAR_COMPRESSION: f64 = 0.9;

/// What the view should do when a card is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Open the center item's external link.
    OpenCenter,
    /// Bring the side card at this index to the center.
    JumpTo(usize),
}

/// Placement of one card, relative to the carousel's horizontal center.
#[derive(Debug, PartialEq)]
pub struct RenderTuple<'a, T> {
    pub item: &'a T,
    pub index: usize,
    pub offset: isize,
    pub x: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
    pub is_interactive_center: bool,
}

impl<T> RenderTuple<'_, T> {
    pub fn activation(&self) -> Activation {
        if self.is_interactive_center {
            Activation::OpenCenter
        } else {
            Activation::JumpTo(self.index)
        }
    }
}

/// Lay out a visible window. Output order matches the window order, which is
/// also back-to-front for the two halves.
pub fn project<'a, T>(
    window: &[WindowEntry<'a, T>],
    layout: &LayoutProfile,
) -> Vec<RenderTuple<'a, T>> {
    window
        .iter()
        .map(|entry| {
            let distance = entry.offset.unsigned_abs();
            let base_x = entry.offset as f64 * layout.spacing;
            let (x, scale, opacity, z_index) = match distance {
                0 => (base_x, 1.0, 1.0, CENTER_Z),
                1 => (base_x, 0.85, 1.0, NEAR_Z),
                _ => (base_x * FAR_COMPRESSION, 0.70, 0.7, FAR_Z),
            };
            RenderTuple {
                item: entry.item,
                index: entry.index,
                offset: entry.offset,
                x,
                scale,
                opacity,
                z_index,
                is_interactive_center: distance == 0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{resolve, visible_window, DEFAULT_RADIUS};

    fn tuples_for(items: &[u32], current: usize, width: f64) -> Vec<RenderTuple<'_, u32>> {
        let window = visible_window(items, current, DEFAULT_RADIUS).unwrap();
        project(&window, &resolve(width))
    }

    #[test]
    fn test_center_is_on_top_and_opaque() {
        let items: Vec<u32> = (0..8).collect();
        for current in 0..items.len() {
            let tuples = tuples_for(&items, current, 1400.0);
            let center = tuples
                .iter()
                .find(|t| t.offset == 0)
                .expect("window has a center");
            let max_z = tuples.iter().map(|t| t.z_index).max().unwrap();
            assert_eq!(center.z_index, max_z);
            assert_eq!(center.z_index, 20);
            assert_eq!(center.opacity, 1.0);
            assert_eq!(center.scale, 1.0);
            assert_eq!(center.x, 0.0);
            assert!(center.is_interactive_center);
            assert_eq!(tuples.iter().filter(|t| t.is_interactive_center).count(), 1);
        }
    }

    #[test]
    fn test_side_card_rules() {
        let items: Vec<u32> = (0..8).collect();
        // 1536 and up: spacing 320
        let tuples = tuples_for(&items, 0, 1600.0);
        let xs: Vec<f64> = tuples.iter().map(|t| t.x).collect();
        assert_eq!(xs, vec![-576.0, -320.0, 0.0, 320.0, 576.0]);

        let scales: Vec<f64> = tuples.iter().map(|t| t.scale).collect();
        assert_eq!(scales, vec![0.70, 0.85, 1.0, 0.85, 0.70]);

        let opacity: Vec<f64> = tuples.iter().map(|t| t.opacity).collect();
        assert_eq!(opacity, vec![0.7, 1.0, 1.0, 1.0, 0.7]);

        let z: Vec<i32> = tuples.iter().map(|t| t.z_index).collect();
        assert_eq!(z, vec![5, 15, 20, 15, 5]);
    }

    #[test]
    fn test_spacing_follows_layout() {
        let items: Vec<u32> = (0..8).collect();
        let narrow = tuples_for(&items, 3, 500.0);
        assert_eq!(narrow[3].x, 240.0);
        assert_eq!(narrow[4].x, 432.0);
        let medium = tuples_for(&items, 3, 1100.0);
        assert_eq!(medium[1].x, -280.0);
    }

    #[test]
    fn test_activation() {
        let items: Vec<u32> = (0..8).collect();
        let tuples = tuples_for(&items, 0, 1024.0);
        let activations: Vec<Activation> = tuples.iter().map(|t| t.activation()).collect();
        assert_eq!(
            activations,
            vec![
                Activation::JumpTo(6),
                Activation::JumpTo(7),
                Activation::OpenCenter,
                Activation::JumpTo(1),
                Activation::JumpTo(2),
            ]
        );
    }

    #[test]
    fn test_wide_radius_uses_outer_rules() {
        let items: Vec<u32> = (0..10).collect();
        let window = visible_window(&items, 0, 3).unwrap();
        let tuples = project(&window, &resolve(0.0));
        assert_eq!(tuples.len(), 7);
        assert_eq!(tuples[0].offset, -3);
        assert_eq!(tuples[0].opacity, 0.7);
        assert_eq!(tuples[0].z_index, 5);
        assert_eq!(tuples[0].x, -3.0 * 240.0 * 0.9);
    }
}
