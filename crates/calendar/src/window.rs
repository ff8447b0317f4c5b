//! Day windows around a target ordinal.

use crate::doy::{DAYS_PER_CYCLE, Doy};

/// Returns the ordinals in `[target - leading, target + trailing]`, wrapping
/// across the December 31 / January 1 seam, sorted and deduplicated.
///
/// A window wider than the cycle yields all 365 ordinals.
///
/// # Example
///
/// ```
/// use flowstat_calendar::{Doy, window_days};
///
/// let days = window_days(Doy::new(2).unwrap(), 3, 1);
/// let ordinals: Vec<u16> = days.iter().map(|d| d.get()).collect();
/// assert_eq!(ordinals, vec![1, 2, 3, 364, 365]);
/// ```
pub fn window_days(target: Doy, leading: u16, trailing: u16) -> Vec<Doy> {
    let width = leading as usize + trailing as usize + 1;
    if width >= DAYS_PER_CYCLE as usize {
        return (1..=DAYS_PER_CYCLE as i32).map(Doy::wrapping).collect();
    }
    let start = target.get() as i32 - leading as i32;
    let mut days: Vec<Doy> = (0..width as i32).map(|o| Doy::wrapping(start + o)).collect();
    days.sort_unstable();
    days.dedup();
    days
}

/// Returns a 365-slot membership mask for [`window_days`].
pub fn window_mask(target: Doy, leading: u16, trailing: u16) -> [bool; DAYS_PER_CYCLE as usize] {
    let mut mask = [false; DAYS_PER_CYCLE as usize];
    for d in window_days(target, leading, trailing) {
        mask[d.index()] = true;
    }
    mask
}
