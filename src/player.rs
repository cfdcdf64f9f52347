use crate::die::Die;
use crate::game::GameError;
use core::fmt;
use rand::Rng;

/// Number of dice each player starts a game with.
pub const DICE_PER_PLAYER: usize = 5;

/// A seated player and the dice they still hold.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) id: usize,
    pub(crate) dice: Vec<Die>,
}

impl Player {
    /// Seats a player with [`DICE_PER_PLAYER`] freshly rolled dice.
    pub fn new<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        let dice = (0..DICE_PER_PLAYER).map(|_| Die::roll(rng)).collect();
        Self { id, dice }
    }

    /// Seats a player holding exactly the given faces, in order.
    ///
    /// Useful for replaying a known arrangement. At most [`DICE_PER_PLAYER`]
    /// faces are accepted.
    pub fn from_faces(id: usize, faces: &[u8]) -> Result<Self, GameError> {
        if faces.len() > DICE_PER_PLAYER {
            return Err(GameError::CountOutOfRange { count: faces.len(), max: DICE_PER_PLAYER });
        }
        let dice = faces.iter().map(|&f| Die::new(f)).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { id, dice })
    }

    /// Returns the player's seat index
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the dice the player still holds
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Returns the face values of the held dice, in hand order
    pub fn faces(&self) -> Vec<u8> {
        self.dice.iter().map(Die::face).collect()
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Counts held dice showing `face`.
    pub fn count_of_value(&self, face: u8) -> usize {
        self.dice.iter().filter(|d| d.face() == face).count()
    }

    /// Removes the first `count` dice showing `face` and hands them over.
    ///
    /// All-or-nothing: if fewer than `count` such dice are held, the hand is
    /// left untouched and [`GameError::InsufficientDice`] is returned.
    pub fn withdraw(&mut self, face: u8, count: usize) -> Result<Vec<Die>, GameError> {
        let available = self.count_of_value(face);
        if count > available {
            return Err(GameError::InsufficientDice {
                player: self.id,
                face,
                requested: count,
                available,
            });
        }
        let mut taken = Vec::with_capacity(count);
        let mut kept = Vec::with_capacity(self.dice.len() - count);
        for die in std::mem::take(&mut self.dice) {
            if taken.len() < count && die.face() == face {
                taken.push(die);
            } else {
                kept.push(die);
            }
        }
        self.dice = kept;
        Ok(taken)
    }

    /// Rerolls every held die.
    pub fn reshuffle_all<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for die in &mut self.dice {
            die.reroll(rng);
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id)
    }
}
