use super::CarouselError;

/// Cards shown on each side of the current one.
pub const DEFAULT_RADIUS: usize = 2;

/// One slot of the visible window.
#[derive(Debug, PartialEq)]
pub struct WindowEntry<'a, T> {
    pub item: &'a T,
    /// Position relative to the current item, `0` is the center.
    pub offset: isize,
    /// Index into the item list, always in `0..len`.
    pub index: usize,
}

// derive would require T: Clone/Copy
impl<T> Clone for WindowEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for WindowEntry<'_, T> {}

impl<T> WindowEntry<'_, T> {
    /// Stacking rank: the center is highest, each step outward is one lower.
    pub fn z_order(&self, radius: usize) -> usize {
        radius - self.offset.unsigned_abs().min(radius)
    }
}

/// Wrap `current + offset` into `0..len`.
///
/// `len` must be non-zero.
pub fn circular_index(current: usize, offset: isize, len: usize) -> usize {
    debug_assert!(len > 0, "circular_index on an empty sequence");
    // a slice length always fits in isize, and so does anything below it
    let current = (current % len) as isize;
    (current + offset).rem_euclid(len as isize) as usize
}

/// The `2 * radius + 1` items around `current`, most negative offset first.
///
/// With fewer items than slots the same index shows up more than once.
/// `current` must be a valid index into `items`.
pub fn visible_window<T>(
    items: &[T],
    current: usize,
    radius: usize,
) -> Result<Vec<WindowEntry<'_, T>>, CarouselError> {
    if items.is_empty() {
        return Err(CarouselError::InvalidInput);
    }
    if current >= items.len() {
        return Err(CarouselError::OutOfRange {
            index: current,
            len: items.len(),
        });
    }
    Ok(window_of(items, current, radius))
}

// callers guarantee `items` is non-empty
pub(super) fn window_of<T>(items: &[T], current: usize, radius: usize) -> Vec<WindowEntry<'_, T>> {
    let radius = radius as isize;
    (-radius..=radius)
        .map(|offset| {
            let index = circular_index(current, offset, items.len());
            WindowEntry {
                item: &items[index],
                offset,
                index,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(entries: &[WindowEntry<'_, u32>]) -> Vec<usize> {
        entries.iter().map(|e| e.index).collect()
    }

    #[test]
    fn test_circular_index_wraps_both_ways() {
        assert_eq!(circular_index(0, -1, 8), 7);
        assert_eq!(circular_index(0, -2, 8), 6);
        assert_eq!(circular_index(7, 1, 8), 0);
        assert_eq!(circular_index(7, 2, 8), 1);
        assert_eq!(circular_index(3, 0, 8), 3);
        assert_eq!(circular_index(0, -2, 1), 0);
        for current in 0..5 {
            for offset in -12..=12 {
                let expected = ((current as isize + offset) % 5 + 5) % 5;
                assert_eq!(circular_index(current, offset, 5), expected as usize);
            }
        }
    }

    #[test]
    fn test_window_around_start() {
        let items: Vec<u32> = (0..8).collect();
        let window = visible_window(&items, 0, DEFAULT_RADIUS).unwrap();
        let offsets: Vec<isize> = window.iter().map(|e| e.offset).collect();
        assert_eq!(offsets, vec![-2, -1, 0, 1, 2]);
        assert_eq!(indices(&window), vec![6, 7, 0, 1, 2]);
        assert_eq!(*window[2].item, 0);
        assert_eq!(*window[0].item, 6);
    }

    #[test]
    fn test_window_has_distinct_indices_when_large_enough() {
        let items: Vec<u32> = (0..6).collect();
        for current in 0..items.len() {
            let window = visible_window(&items, current, DEFAULT_RADIUS).unwrap();
            assert_eq!(window.len(), 5);
            let mut seen = indices(&window);
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), 5);
        }
    }

    #[test]
    fn test_small_lists_repeat_indices() {
        let items = vec![10u32, 20];
        let window = visible_window(&items, 1, DEFAULT_RADIUS).unwrap();
        assert_eq!(window.len(), 5);
        assert_eq!(indices(&window), vec![1, 0, 1, 0, 1]);

        let single = vec![5u32];
        let window = visible_window(&single, 0, DEFAULT_RADIUS).unwrap();
        assert_eq!(indices(&window), vec![0; 5]);
    }

    #[test]
    fn test_empty_items_rejected() {
        let items: Vec<u32> = Vec::new();
        assert_eq!(
            visible_window(&items, 0, DEFAULT_RADIUS),
            Err(CarouselError::InvalidInput)
        );
    }

    #[test]
    fn test_current_out_of_range_rejected() {
        let items: Vec<u32> = (0..5).collect();
        assert_eq!(
            visible_window(&items, 9, DEFAULT_RADIUS),
            Err(CarouselError::OutOfRange { index: 9, len: 5 })
        );
        assert_eq!(
            visible_window(&items, 5, DEFAULT_RADIUS),
            Err(CarouselError::OutOfRange { index: 5, len: 5 })
        );
        assert!(visible_window(&items, 4, DEFAULT_RADIUS).is_ok());
    }

    #[test]
    fn test_circular_index_huge_current() {
        // usize::MAX % 5 == 0
        let wrapped: Vec<usize> = (-2..=2)
            .map(|offset| circular_index(usize::MAX, offset, 5))
            .collect();
        assert_eq!(wrapped, vec![3, 4, 0, 1, 2]);
        assert_eq!(circular_index(usize::MAX, 0, 7), usize::MAX % 7);
    }

    #[test]
    fn test_z_order_peaks_at_center() {
        let items: Vec<u32> = (0..8).collect();
        let window = visible_window(&items, 4, DEFAULT_RADIUS).unwrap();
        let z: Vec<usize> = window.iter().map(|e| e.z_order(DEFAULT_RADIUS)).collect();
        assert_eq!(z, vec![0, 1, 2, 1, 0]);
    }
}
