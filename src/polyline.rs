//! Precision-5 polyline codec for route geometries.
//!
//! Routes travel over the wire as compact polyline strings (successive
//! deltas, zig-zag signed encoding, five bits per character offset by 63,
//! fixed-point scaled by 1e5). Internally routes are decoded coordinate
//! sequences; encoding and decoding happen at the provider boundary.

use serde::{Deserialize, Serialize};

/// A route geometry as decoded coordinates.
///
/// Each point is a (latitude, longitude) tuple. An empty polyline means
/// "no route to display".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// The "no route" value.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Bounding corners as (south-west, north-east), for viewport framing.
    ///
    /// Padding around the frame is the renderer's concern, not computed here.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let (first, rest) = self.points.split_first()?;
        let mut south_west = *first;
        let mut north_east = *first;
        for &(lat, lng) in rest {
            south_west.0 = south_west.0.min(lat);
            south_west.1 = south_west.1.min(lng);
            north_east.0 = north_east.0.max(lat);
            north_east.1 = north_east.1.max(lng);
        }
        Some((south_west, north_east))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolylineError {
    /// A delta run ended mid-value.
    UnexpectedEnd,
    /// A byte outside the 63..=126 encoding range.
    InvalidCharacter(u8),
}

/// Decodes a precision-5 polyline string into coordinate points.
pub fn decode(encoded: &str) -> Result<Polyline, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let (delta_lat, next) = decode_value(bytes, index)?;
        let (delta_lng, next) = decode_value(bytes, next)?;
        lat += delta_lat;
        lng += delta_lng;
        points.push((lat as f64 / 1e5, lng as f64 / 1e5));
        index = next;
    }

    Ok(Polyline::new(points))
}

/// Encodes coordinate points as a precision-5 polyline string.
pub fn encode(polyline: &Polyline) -> String {
    let mut encoded = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for &(lat, lng) in polyline.points() {
        let lat_e5 = (lat * 1e5).round() as i64;
        let lng_e5 = (lng * 1e5).round() as i64;
        encode_value(lat_e5 - prev_lat, &mut encoded);
        encode_value(lng_e5 - prev_lng, &mut encoded);
        prev_lat = lat_e5;
        prev_lng = lng_e5;
    }

    encoded
}

fn decode_value(bytes: &[u8], mut index: usize) -> Result<(i64, usize), PolylineError> {
    let mut accumulated: i64 = 0;
    let mut shift = 0;

    loop {
        let byte = *bytes.get(index).ok_or(PolylineError::UnexpectedEnd)?;
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter(byte));
        }
        index += 1;

        let chunk = (byte - 63) as i64;
        accumulated |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk & 0x20 == 0 {
            break;
        }
    }

    // Undo zig-zag: the low bit carries the sign.
    let value = if accumulated & 1 != 0 {
        !(accumulated >> 1)
    } else {
        accumulated >> 1
    };
    Ok((value, index))
}

fn encode_value(value: i64, encoded: &mut String) {
    let mut zig_zag = ((value << 1) ^ (value >> 63)) as u64;
    loop {
        let mut chunk = (zig_zag & 0x1f) as u8;
        zig_zag >>= 5;
        if zig_zag != 0 {
            chunk |= 0x20;
        }
        encoded.push((chunk + 63) as char);
        if zig_zag == 0 {
            break;
        }
    }
}
