use compute::merge_intervals;
use foundation::bounds::{GeoBounds, LatLng, LonInterval};

use crate::layer::Layer;

/// Combines per-layer bounds into the bounds of the whole map.
pub struct ViewportBoundsAggregator;

impl ViewportBoundsAggregator {
    /// `None` when there is nothing to frame; callers keep their previous bounds.
    ///
    /// Latitude never wraps, so the combined range is a plain min/max. The
    /// longitude ranges are merged on the circle.
    pub fn aggregate(bounds: &[GeoBounds]) -> Option<GeoBounds> {
        let first = bounds.first()?;
        let mut south = first.south();
        let mut north = first.north();
        for b in bounds.iter().skip(1) {
            south = south.min(b.south());
            north = north.max(b.north());
        }

        let intervals: Vec<LonInterval> = bounds.iter().map(GeoBounds::longitudes).collect();
        let longitudes = merge_intervals(&intervals);

        Some(GeoBounds::new(
            LatLng::new(south, longitudes.west),
            LatLng::new(north, longitudes.east),
        ))
    }

    /// Aggregate over the bounded members of `layers`.
    pub fn aggregate_layers<'a, I>(layers: I) -> Option<GeoBounds>
    where
        I: IntoIterator<Item = &'a dyn Layer>,
    {
        let bounds: Vec<GeoBounds> = layers
            .into_iter()
            .filter(|l| l.has_bounds())
            .filter_map(|l| l.data_bounds())
            .collect();
        Self::aggregate(&bounds)
    }
}
