use crate::entities::Load;

/// Can `demand` be added to a vehicle currently holding `current` without exceeding `capacity`?
/// Both weight and volume must fit, there is no partial allocation.
pub fn fits(current: &Load, demand: &Load, capacity: &Load) -> bool {
    (*current + *demand).fits_within(capacity)
}

/// Per dimension overshoot if `demand` were added to `current`, zero where it fits
pub fn excess(current: &Load, demand: &Load, capacity: &Load) -> Load {
    (*current + *demand).excess_over(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_exactly_at_capacity() {
        let cap = Load::new(3500.0, 15.0);
        assert!(fits(&Load::new(2500.0, 8.0), &Load::new(1000.0, 7.0), &cap));
    }

    #[test]
    fn rejects_when_one_dimension_overflows() {
        let cap = Load::new(3500.0, 15.0);
        let current = Load::new(3300.0, 11.0);
        assert!(!fits(&current, &Load::new(100.0, 5.0), &cap));
        assert!(!fits(&current, &Load::new(300.0, 1.0), &cap));
        assert_eq!(
            excess(&current, &Load::new(3500.0, 12.0), &cap),
            Load::new(3300.0, 8.0)
        );
    }
}
