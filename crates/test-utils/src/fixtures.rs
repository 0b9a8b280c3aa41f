//! Common test fixtures for hexgrid-geo tests.
//!
//! Reference inputs together with the outputs every implementation of the
//! projections must reproduce to within [`crate::PRECISION`].

use geo_common::{GeoPoint, PlanarPoint};

/// Reference points.
pub mod points {
    use super::*;

    /// Lower Manhattan, the reference input for the projection vectors.
    pub const NEW_YORK: GeoPoint = GeoPoint::new(-73.0, 40.0);

    /// Greenwich on the equator.
    pub const NULL_ISLAND: GeoPoint = GeoPoint::new(0.0, 0.0);

    /// Points on the poles, singular for some projections.
    pub const NORTH_POLE: GeoPoint = GeoPoint::new(0.0, 90.0);
    pub const SOUTH_POLE: GeoPoint = GeoPoint::new(0.0, -90.0);

    /// A handful of well-behaved cities.
    pub const CITIES: [GeoPoint; 5] = [
        GeoPoint::new(-73.0, 40.0),    // New York
        GeoPoint::new(-0.1276, 51.5072), // London
        GeoPoint::new(139.6917, 35.6895), // Tokyo
        GeoPoint::new(-58.3816, -34.6037), // Buenos Aires
        GeoPoint::new(151.2093, -33.8688), // Sydney
    ];
}

/// Expected forward projection of [`points::NEW_YORK`].
pub mod projected {
    use super::*;

    pub const IDENTITY: PlanarPoint = PlanarPoint::new(-73.0, 40.0);
    pub const SINUSOIDAL: PlanarPoint = PlanarPoint::new(9124497.47463, 4452779.63173);
    pub const POLAR_AZIMUTHAL: PlanarPoint = PlanarPoint::new(-0.83453, -0.25514);
    pub const SPHERICAL_MERCATOR: PlanarPoint = PlanarPoint::new(-8126322.82791, 4865942.27950);
}

/// Expected cell geometry on a flat-topped grid.
pub mod cells {
    use super::*;

    /// Cell size in meters for the reference Mercator grid.
    pub const SIZE: PlanarPoint = PlanarPoint::new(500.0, 500.0);

    /// Corners of the cell containing [`points::NEW_YORK`] on a flat grid
    /// with 500 m cells under spherical Mercator, in engine order.
    pub const NEW_YORK_CORNERS: [GeoPoint; 6] = [
        GeoPoint::new(-72.99485, 39.99877),
        GeoPoint::new(-72.99710, 40.00175),
        GeoPoint::new(-73.00159, 40.00175),
        GeoPoint::new(-73.00384, 39.99877),
        GeoPoint::new(-73.00159, 39.99579),
        GeoPoint::new(-72.99710, 39.99579),
    ];
}
