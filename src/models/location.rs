//! Geographic location with a derived geohash.

/// Alphabet used by the standard geohash encoding (base32, no a/i/l/o).
const GEOHASH_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of geohash characters computed at construction.
///
/// 12 characters resolve to roughly 4 cm, far below any grouping precision
/// used in practice.
pub const GEOHASH_MAX_PRECISION: usize = 12;

/// A physical location on the globe.
///
/// The geohash is computed once at construction (unless supplied) and is a
/// deterministic encoding of the coordinates: the closer two points are, the
/// longer the common prefix of their geohashes.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::Location;
///
/// let loc = Location::new(4.718400, -74.072100);
/// assert_eq!(loc.geohash().len(), 12);
/// assert_eq!(loc.geohash_prefix(6), &loc.geohash()[..6]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    lat: f64,
    lng: f64,
    geohash: String,
}

impl Location {
    /// Creates a location and derives its geohash.
    pub fn new(lat: f64, lng: f64) -> Self {
        let geohash = encode_geohash(lat, lng, GEOHASH_MAX_PRECISION);
        Self { lat, lng, geohash }
    }

    /// Creates a location with a pre-computed geohash.
    pub fn with_geohash(lat: f64, lng: f64, geohash: String) -> Self {
        Self { lat, lng, geohash }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// The location's coordinates as a `(lat, lng)` pair.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// The full-precision geohash.
    pub fn geohash(&self) -> &str {
        &self.geohash
    }

    /// Returns the geohash truncated to the given precision, counted in
    /// characters.
    ///
    /// Precisions beyond the stored length return the full geohash. Encoded
    /// geohashes are base32, but a hash supplied via [`with_geohash`] may
    /// carry arbitrary text, so truncation walks character boundaries.
    ///
    /// [`with_geohash`]: Self::with_geohash
    pub fn geohash_prefix(&self, precision: usize) -> &str {
        match self.geohash.char_indices().nth(precision) {
            Some((end, _)) => &self.geohash[..end],
            None => &self.geohash,
        }
    }
}

/// Encodes coordinates as a geohash string of the given length.
///
/// Standard algorithm: binary-search the longitude and latitude intervals
/// alternately, packing the resulting bits five at a time into base32
/// characters (even bits longitude, odd bits latitude).
pub fn encode_geohash(lat: f64, lng: f64, precision: usize) -> String {
    let mut lat_range = (-90.0_f64, 90.0_f64);
    let mut lng_range = (-180.0_f64, 180.0_f64);
    let mut hash = String::with_capacity(precision);
    let mut bits: u8 = 0;
    let mut bit_count: u8 = 0;
    let mut even_bit = true;

    while hash.len() < precision {
        if even_bit {
            let mid = (lng_range.0 + lng_range.1) / 2.0;
            if lng >= mid {
                bits = (bits << 1) | 1;
                lng_range.0 = mid;
            } else {
                bits <<= 1;
                lng_range.1 = mid;
            }
        } else {
            let mid = (lat_range.0 + lat_range.1) / 2.0;
            if lat >= mid {
                bits = (bits << 1) | 1;
                lat_range.0 = mid;
            } else {
                bits <<= 1;
                lat_range.1 = mid;
            }
        }
        even_bit = !even_bit;
        bit_count += 1;

        if bit_count == 5 {
            hash.push(GEOHASH_ALPHABET[bits as usize] as char);
            bits = 0;
            bit_count = 0;
        }
    }

    hash
}
