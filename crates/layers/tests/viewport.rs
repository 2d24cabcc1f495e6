use compute::merge_longitude_bounds;
use foundation::bounds::{DEFAULT_BOUNDS, GeoBounds, LatLng};
use layers::heatmap::HeatmapLayer;
use layers::markers::MarkerLayer;
use layers::overlay::{OverlayKind, TileOverlayLayer};
use layers::{Layer, Map, ViewportBoundsAggregator};
use pretty_assertions::assert_eq;

#[test]
fn layers_around_the_antimeridian_merge_into_one_arc() {
    let bounds = [
        GeoBounds::from_ranges((-5.0, 5.0), (170.0, -170.0)),
        GeoBounds::from_ranges((10.0, 20.0), (-160.0, -150.0)),
        GeoBounds::from_ranges((-20.0, -10.0), (160.0, 165.0)),
    ];
    let merged = ViewportBoundsAggregator::aggregate(&bounds).unwrap();
    assert_eq!(
        merged,
        GeoBounds::new(LatLng::new(-20.0, 160.0), LatLng::new(20.0, -150.0))
    );
    for b in &bounds {
        assert!(merged.longitudes().covers(&b.longitudes()));
    }
    assert_eq!(
        merge_longitude_bounds(&[(170.0, -170.0), (-160.0, -150.0), (160.0, 165.0)]),
        (160.0, -150.0)
    );
}

#[test]
fn map_frames_a_pacific_dataset() {
    let mut map = Map::new();
    assert_eq!(map.data_bounds(), DEFAULT_BOUNDS);

    let fiji = MarkerLayer::from_locations(
        1,
        &[LatLng::new(-17.7, 178.9), LatLng::new(-16.8, -179.9), LatLng::new(-18.1, 179.4)],
    )
    .unwrap();
    let samoa = HeatmapLayer::weighted(
        2,
        vec![LatLng::new(-13.8, -171.8), LatLng::new(-14.0, -171.4)],
        vec![2.0, 1.0],
    )
    .unwrap();
    assert!(fiji.data_bounds().unwrap().longitudes().wraps());

    map.add_layer(fiji).unwrap();
    map.add_layer(samoa).unwrap();
    map.add_layer(TileOverlayLayer::new(3, OverlayKind::Traffic)).unwrap();
    assert_eq!(map.data_bounds(), DEFAULT_BOUNDS);
    assert!(map.process_events());

    let framed = map.data_bounds();
    let arc = framed.longitudes();
    assert!(arc.wraps());
    for lng in [178.9, -179.9, 179.4, -171.8, -171.4] {
        assert!(arc.contains(lng), "{lng} outside {arc:?}");
    }
    assert!(arc.width() < 30.0);
    assert!(framed.south() < -18.1 && framed.north() > -13.8);
}

#[test]
fn removing_every_bounded_layer_keeps_the_last_frame() {
    let mut map = Map::new();
    let id = map
        .add_layer(MarkerLayer::from_locations(7, &[LatLng::new(51.5, -0.1)]).unwrap())
        .unwrap();
    map.process_events();
    let framed = map.data_bounds();
    assert_ne!(framed, DEFAULT_BOUNDS);

    map.remove_layer(id).unwrap();
    map.add_layer(TileOverlayLayer::new(8, OverlayKind::Bicycling)).unwrap();
    map.process_events();
    assert_eq!(map.data_bounds(), framed);
}
