//! Location codec
//!
//! Axes are stored as IEEE-754 bit patterns, so every `f64` (including
//! negative zero and NaN payloads) survives unchanged. The space is stored as
//! the high and low halves of its UUID, with `0, 0` meaning "no space". A space
//! whose id is all zero bits therefore decodes as no space.

use uuid::Uuid;

use super::{AdapterContext, PersistentType};
use crate::space::Location;

/// Number of words in an encoded location
pub const LOCATION_WORDS: usize = 5;

/// `Location` <-> five 64-bit words
///
/// Payloads shorter than [`LOCATION_WORDS`] decode to `Location::default()`.
/// Words past the fifth are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationType;

impl PersistentType for LocationType {
    type Primitive = Vec<i64>;
    type Complex = Location;

    fn to_primitive(&self, location: &Location, _ctx: &AdapterContext<'_>) -> Vec<i64> {
        let (high, low) = location
            .space_id()
            .map(|id| id.as_u64_pair())
            .unwrap_or((0, 0));

        vec![
            location.x.to_bits() as i64,
            location.y.to_bits() as i64,
            location.z.to_bits() as i64,
            high as i64,
            low as i64,
        ]
    }

    fn from_primitive(&self, words: &Vec<i64>, ctx: &AdapterContext<'_>) -> Location {
        if words.len() < LOCATION_WORDS {
            tracing::debug!(words = words.len(), "Truncated location payload, using origin");
            return Location::default();
        }

        let x = f64::from_bits(words[0] as u64);
        let y = f64::from_bits(words[1] as u64);
        let z = f64::from_bits(words[2] as u64);

        let (high, low) = (words[3] as u64, words[4] as u64);
        let space = if high == 0 && low == 0 {
            None
        } else {
            let id = Uuid::from_u64_pair(high, low);
            let resolved = ctx.spaces().resolve(id);
            if resolved.is_none() {
                tracing::debug!(space_id = %id, "Location references a space that is not loaded");
            }
            resolved
        };

        Location { space, x, y, z }
    }
}
