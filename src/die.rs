use crate::game::GameError;
use core::fmt;
use core::ops::RangeInclusive;
use rand::Rng;

/// Lowest face value on a die.
pub const MIN_FACE: u8 = 1;
/// Highest face value on a die.
pub const MAX_FACE: u8 = 6;
/// Every face a die can show.
pub const FACES: RangeInclusive<u8> = MIN_FACE..=MAX_FACE;

/// Returns true if `face` is a valid face value (1..=6).
pub fn is_face(face: u8) -> bool {
    FACES.contains(&face)
}

/// A single concealed six-sided die.
///
/// Dice are deliberately not `Copy`: a die has exactly one owner (a player's
/// hand or the table pool) and moves between them by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Die {
    face: u8,
}

impl Die {
    /// Creates a die showing a fixed face.
    ///
    /// ```
    /// use liars_dice::die::Die;
    ///
    /// assert_eq!(Die::new(4).unwrap().face(), 4);
    /// assert!(Die::new(7).is_err());
    /// ```
    pub fn new(face: u8) -> Result<Self, GameError> {
        if !is_face(face) {
            return Err(GameError::FaceOutOfRange { face });
        }
        Ok(Self { face })
    }

    /// Creates a die with a uniformly random face.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { face: rng.random_range(FACES) }
    }

    pub fn face(&self) -> u8 {
        self.face
    }

    /// Re-randomizes the face in place.
    pub fn reroll<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.face = rng.random_range(FACES);
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn rolled_faces_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..600 {
            let d = Die::roll(&mut rng);
            assert!(is_face(d.face()), "face out of range: {}", d.face());
        }
    }

    #[test]
    fn reroll_hits_every_face() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut die = Die::new(1).unwrap();
        let mut seen = [false; 6];
        for _ in 0..600 {
            die.reroll(&mut rng);
            seen[usize::from(die.face() - 1)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn seeded_rolls_are_reproducible() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        let xs: Vec<u8> = (0..20).map(|_| Die::roll(&mut a).face()).collect();
        let ys: Vec<u8> = (0..20).map(|_| Die::roll(&mut b).face()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn new_rejects_zero_and_seven() {
        assert_eq!(Die::new(0), Err(GameError::FaceOutOfRange { face: 0 }));
        assert_eq!(Die::new(7), Err(GameError::FaceOutOfRange { face: 7 }));
    }

    #[test]
    fn faces_span_one_to_six() {
        assert_eq!(FACES.collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
        for face in FACES {
            assert_eq!(Die::new(face).map(|d| d.face()), Ok(face));
        }
    }
}
