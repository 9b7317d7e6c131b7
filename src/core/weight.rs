/// Distance of a single route. Always positive in a valid network.
pub type Distance = u32;

/// Sum of route distances along a path or across a network.
pub type TotalDistance = u64;

/// Adds a route distance to an accumulated total, returning `None` on
/// overflow.
pub fn extend(total: TotalDistance, distance: Distance) -> Option<TotalDistance> {
    total.checked_add(TotalDistance::from(distance))
}
