use crate::models::Province;

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance in kilometres.
pub fn haversine_km(a: Position, b: Position) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Closest province with its distance. Ties keep the earlier entry.
pub fn nearest_province(pos: Position, provinces: &[Province]) -> Option<(&Province, f64)> {
    let mut nearest: Option<(&Province, f64)> = None;
    for province in provinces {
        let distance = haversine_km(pos, Position::new(province.latitude, province.longitude));
        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((province, distance)),
        }
    }
    nearest
}
