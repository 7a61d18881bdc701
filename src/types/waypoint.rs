#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Waypoint {
    lat_rad: f64,
    lon_rad: f64,
    alt_m: f32,
}

impl Waypoint {
    pub const fn new(lat_rad: f64, lon_rad: f64, alt_m: f32) -> Self {
        Self { lat_rad, lon_rad, alt_m }
    }

    pub fn lat_rad(&self) -> f64 {
        self.lat_rad
    }

    pub fn lon_rad(&self) -> f64 {
        self.lon_rad
    }

    pub fn alt_m(&self) -> f32 {
        self.alt_m
    }

    pub fn set_lat_rad(&mut self, value: f64) {
        self.lat_rad = value
    }

    pub fn set_lon_rad(&mut self, value: f64) {
        self.lon_rad = value
    }

    pub fn set_alt_m(&mut self, value: f32) {
        self.alt_m = value
    }
}

mod test {
    #[test]
    fn test_waypoint_accessors() {
        use super::Waypoint;

        let waypoint = Waypoint::default();
        assert_eq!((waypoint.lat_rad(), waypoint.lon_rad(), waypoint.alt_m()), (0.0, 0.0, 0.0));

        let mut waypoint = Waypoint::new(0.7, -2.1, 350.5);
        assert_eq!((waypoint.lat_rad(), waypoint.lon_rad(), waypoint.alt_m()), (0.7, -2.1, 350.5));

        waypoint.set_lat_rad(-1.5);
        waypoint.set_lon_rad(3.0);
        waypoint.set_alt_m(-12.25);
        assert_eq!(waypoint, Waypoint::new(-1.5, 3.0, -12.25));
    }

    #[test]
    fn test_waypoint_no_range_check() {
        use super::Waypoint;

        let waypoint = Waypoint::new(10.0, -100.0, 1e6);
        assert_eq!(waypoint.lat_rad(), 10.0);
        assert_eq!(waypoint.lon_rad(), -100.0);
    }
}
