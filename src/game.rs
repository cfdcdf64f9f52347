use crate::die::{is_face, Die};
use crate::odds::bid_odds;
use crate::player::{Player, DICE_PER_PLAYER};
use core::fmt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fewest players a game can be started with.
pub const MIN_PLAYERS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MoveKind {
    Move,
    Claim,
    Challenge,
}

impl MoveKind {
    pub const ALL: [MoveKind; 3] = [MoveKind::Move, MoveKind::Claim, MoveKind::Challenge];

    pub fn label(self) -> &'static str {
        match self {
            MoveKind::Move => "move",
            MoveKind::Claim => "claim",
            MoveKind::Challenge => "challenge",
        }
    }

    fn bit(self) -> u8 {
        match self {
            MoveKind::Move => 0b001,
            MoveKind::Claim => 0b010,
            MoveKind::Challenge => 0b100,
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The set of move kinds the acting player may choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveSet(u8);

impl MoveSet {
    /// Start of a game: a player may reveal dice or bid straight away.
    pub const OPENING: MoveSet = MoveSet(0b011);
    /// After revealing dice a player must bid.
    pub const AFTER_MOVE: MoveSet = MoveSet(0b010);
    /// After a bid the next player may do anything.
    pub const AFTER_CLAIM: MoveSet = MoveSet(0b111);

    pub fn contains(self, kind: MoveKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = MoveKind> {
        MoveKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.iter().map(MoveKind::label).collect();
        f.write_str(&labels.join(", "))
    }
}

/// A claim that at least `count` dice in play show `face`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bid {
    pub count: usize,
    pub face: u8,
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.count, self.face)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("need at least {min} players, got {got}")]
    InvalidPlayerCount { min: usize, got: usize },
    #[error("it is player {current}'s turn, not player {got}'s")]
    NotPlayersTurn { current: usize, got: usize },
    #[error("'{kind}' is not allowed now; allowed: {allowed}")]
    IllegalMove { kind: MoveKind, allowed: MoveSet },
    #[error("face must be between 1 and 6, got {face}")]
    FaceOutOfRange { face: u8 },
    #[error("count must be between 0 and {max}, got {count}")]
    CountOutOfRange { count: usize, max: usize },
    #[error("bid must be at least {current} dice, got {got}")]
    BidNotHighEnough { current: usize, got: usize },
    #[error("player {player} has only {available} dice of value {face}, cannot move {requested}")]
    InsufficientDice { player: usize, face: u8, requested: usize, available: usize },
}

impl GameError {
    /// True for rejections caused by the move kind or its parameters, as
    /// opposed to turn order, bid height or dice supply.
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            GameError::IllegalMove { .. }
                | GameError::FaceOutOfRange { .. }
                | GameError::CountOutOfRange { .. }
        )
    }
}

/// Result of a successful claim.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct ClaimOutcome {
    pub player: usize,
    pub bid: Bid,
    /// Probability that the bid holds, see [`crate::odds::bid_odds`].
    pub odds: f64,
    /// Seat that acts next.
    pub next: usize,
}

impl fmt::Display for ClaimOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player {} bids {}. The odds of at least {} dice of value {} are {:.6}",
            self.player, self.bid, self.bid.count, self.bid.face, self.odds
        )
    }
}

/// Result of a challenge. The game state is not changed by a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct ChallengeOutcome {
    pub challenger: usize,
    pub challenged: usize,
    pub bid: Bid,
    /// Dice showing the bid face across every hand and the table pool.
    pub actual: usize,
    /// True only when `actual < bid.count`; a claim met exactly stands.
    pub challenger_wins: bool,
}

impl fmt::Display for ChallengeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.challenger_wins { "correctly" } else { "incorrectly" };
        write!(
            f,
            "Player {} {} challenged player {} on {}: there are {} dice of value {}",
            self.challenger, verdict, self.challenged, self.bid, self.actual, self.bid.face
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum HistoryEvent {
    Moved { face: u8, count: usize },
    Claimed { bid: Bid, odds: f64 },
    Challenged { against: usize, bid: Bid, actual: usize, challenger_wins: bool },
}

impl HistoryEvent {
    pub fn kind(&self) -> MoveKind {
        match self {
            HistoryEvent::Moved { .. } => MoveKind::Move,
            HistoryEvent::Claimed { .. } => MoveKind::Claim,
            HistoryEvent::Challenged { .. } => MoveKind::Challenge,
        }
    }
}

impl fmt::Display for HistoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryEvent::Moved { face, count } => write!(f, "moves {count} x {face} to table"),
            HistoryEvent::Claimed { bid, odds } => write!(f, "claims {bid} ({:.1}%)", odds * 100.0),
            HistoryEvent::Challenged { against, bid, actual, challenger_wins } => {
                let verdict = if *challenger_wins { "wins" } else { "loses" };
                write!(f, "challenges P{against} on {bid}: {actual} found, {verdict}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct HistoryEntry {
    pub player: usize,
    pub event: HistoryEvent,
}

/// Read-only snapshot for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameStatus {
    pub turn: usize,
    pub legal: MoveSet,
    pub bid: Option<Bid>,
    pub table: Vec<u8>,
    pub hands: Vec<Vec<u8>>,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Currently, it is player {}'s turn.", self.turn)?;
        writeln!(f, "They can choose any of these moves: {}.", self.legal)?;
        match self.bid {
            Some(bid) => writeln!(f, "Current bid: {bid}")?,
            None => writeln!(f, "No bid yet.")?,
        }
        writeln!(f, "Dice in the middle:\n\t{:?}", self.table)?;
        for (i, hand) in self.hands.iter().enumerate() {
            writeln!(f, "Player {i}:\n\t{hand:?}")?;
        }
        Ok(())
    }
}

/// A game of Liar's Dice.
///
/// The generator `R` supplies every face value; the default is a ChaCha8
/// stream seeded either from the OS or from a caller-provided seed.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game<R = ChaCha8Rng> {
    pub(crate) players: Vec<Player>,
    /// Dice revealed to everyone via moves.
    pub(crate) table: Vec<Die>,
    pub(crate) bid: Option<Bid>,
    pub(crate) current: usize,
    pub(crate) legal: MoveSet,
    pub(crate) last_challenge: Option<ChallengeOutcome>,
    history: Vec<HistoryEntry>,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Starts a game with an OS-seeded generator.
    ///
    /// ```
    /// use liars_dice::game::Game;
    ///
    /// let game = Game::new(3).unwrap();
    /// assert_eq!(game.players().len(), 3);
    /// assert!(Game::new(1).is_err());
    /// ```
    pub fn new(player_count: usize) -> Result<Self, GameError> {
        let seed: u64 = rand::rng().random();
        log::debug!("seeding game with {seed}");
        Self::seeded(player_count, seed)
    }

    /// Starts a reproducible game.
    pub fn seeded(player_count: usize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(player_count, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Starts a game drawing faces from `rng`.
    pub fn with_rng(player_count: usize, mut rng: R) -> Result<Self, GameError> {
        ensure_player_count(player_count)?;
        let players = (0..player_count).map(|id| Player::new(id, &mut rng)).collect();
        Ok(Self::from_players(players, rng))
    }

    /// Starts a game from known hands, one slice of faces per seat.
    ///
    /// `rng` is still needed for rerolls after claims.
    pub fn from_hands(hands: &[&[u8]], rng: R) -> Result<Self, GameError> {
        ensure_player_count(hands.len())?;
        let players = hands
            .iter()
            .enumerate()
            .map(|(id, faces)| Player::from_faces(id, faces))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_players(players, rng))
    }

    fn from_players(players: Vec<Player>, rng: R) -> Self {
        log::info!("new game with {} players", players.len());
        Self {
            players,
            table: Vec::new(),
            bid: None,
            current: 0,
            legal: MoveSet::OPENING,
            last_challenge: None,
            history: Vec::new(),
            rng,
        }
    }

    /// Discards every player, the bid, the table pool and the turn, then
    /// deals a fresh game. On error nothing is discarded.
    pub fn restart(&mut self, player_count: usize) -> Result<(), GameError> {
        ensure_player_count(player_count)?;
        self.players.clear();
        self.table.clear();
        self.history.clear();
        self.bid = None;
        self.last_challenge = None;
        for id in 0..player_count {
            let p = Player::new(id, &mut self.rng);
            self.players.push(p);
        }
        self.current = 0;
        self.legal = MoveSet::OPENING;
        log::info!("restarted game with {player_count} players");
        Ok(())
    }

    /// Returns a reference to the players
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: usize) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Returns the dice moved to the table
    pub fn table(&self) -> &[Die] {
        &self.table
    }

    /// Returns the current bid, if any claim has been made
    pub fn current_bid(&self) -> Option<Bid> {
        self.bid
    }

    /// Returns the index of the player whose turn it is
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn legal_moves(&self) -> MoveSet {
        self.legal
    }

    /// Returns the most recent challenge outcome
    pub fn last_challenge(&self) -> Option<ChallengeOutcome> {
        self.last_challenge
    }

    /// Dice the game started with, used as `n` for odds.
    pub fn total_dice(&self) -> usize {
        self.players.len() * DICE_PER_PLAYER
    }

    /// Dice showing `face` across every hand and the table pool.
    pub fn count_face(&self, face: u8) -> usize {
        let on_table = self.table.iter().filter(|d| d.face() == face).count();
        let in_hands: usize = self.players.iter().map(|p| p.count_of_value(face)).sum();
        on_table + in_hands
    }

    /// Odds that `bid` holds given the starting dice count.
    pub fn odds_for(&self, bid: Bid) -> f64 {
        bid_odds(self.total_dice(), bid.count)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            turn: self.current,
            legal: self.legal,
            bid: self.bid,
            table: self.table.iter().map(Die::face).collect(),
            hands: self.players.iter().map(Player::faces).collect(),
        }
    }

    pub fn history_recent(&self, n: usize) -> Vec<HistoryEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        let start = len.saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HistoryEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        if len == 0 {
            return Vec::new();
        }
        let max_offset = len.saturating_sub(n);
        let offset = offset.min(max_offset);
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn ensure_turn(&self, player: usize) -> Result<(), GameError> {
        if player != self.current {
            log::warn!("player {player} acted out of turn (turn: {})", self.current);
            return Err(GameError::NotPlayersTurn { current: self.current, got: player });
        }
        Ok(())
    }

    fn ensure_legal(&self, kind: MoveKind) -> Result<(), GameError> {
        if !self.legal.contains(kind) {
            log::warn!("player {} tried '{kind}', allowed: {}", self.current, self.legal);
            return Err(GameError::IllegalMove { kind, allowed: self.legal });
        }
        Ok(())
    }

    /// Moves `count` of the acting player's dice showing `face` onto the table.
    ///
    /// The player must claim next.
    pub fn move_dice(&mut self, player: usize, face: u8, count: usize) -> Result<(), GameError> {
        self.ensure_turn(player)?;
        self.ensure_legal(MoveKind::Move)?;
        if count > DICE_PER_PLAYER {
            return Err(GameError::CountOutOfRange { count, max: DICE_PER_PLAYER });
        }
        if !is_face(face) {
            return Err(GameError::FaceOutOfRange { face });
        }
        let moved = self.players[player].withdraw(face, count)?;
        log::debug!("player {player} moves {count} x {face} to the table");
        self.table.extend(moved);
        self.legal = MoveSet::AFTER_MOVE;
        self.record_history(player, HistoryEvent::Moved { face, count });
        Ok(())
    }

    /// Raises (or matches) the bid, rerolls the claimant's hand and passes
    /// the turn to the next seat.
    pub fn claim(
        &mut self,
        player: usize,
        count: usize,
        face: u8,
    ) -> Result<ClaimOutcome, GameError> {
        self.ensure_turn(player)?;
        self.ensure_legal(MoveKind::Claim)?;
        let floor = self.bid.map(|b| b.count).unwrap_or(0);
        if count < floor {
            return Err(GameError::BidNotHighEnough { current: floor, got: count });
        }
        if !is_face(face) {
            return Err(GameError::FaceOutOfRange { face });
        }
        let bid = Bid { count, face };
        let odds = self.odds_for(bid);
        self.bid = Some(bid);
        self.players[player].reshuffle_all(&mut self.rng);
        self.current = (player + 1) % self.players.len();
        self.legal = MoveSet::AFTER_CLAIM;
        log::info!("player {player} claims {bid} (odds {odds:.6}), player {} to act", self.current);
        self.record_history(player, HistoryEvent::Claimed { bid, odds });
        Ok(ClaimOutcome { player, bid, odds, next: self.current })
    }

    /// Calls the previous seat's bid. The claim stands when at least the
    /// claimed number of dice show the claimed face; otherwise the
    /// challenger wins.
    pub fn challenge(&mut self, player: usize) -> Result<ChallengeOutcome, GameError> {
        self.ensure_turn(player)?;
        let Some(bid) = self.bid else {
            log::warn!("player {player} challenged with no bid on the table");
            return Err(GameError::IllegalMove { kind: MoveKind::Challenge, allowed: self.legal });
        };
        let n = self.players.len();
        let challenged = (player + n - 1) % n;
        let actual = self.count_face(bid.face);
        let outcome = ChallengeOutcome {
            challenger: player,
            challenged,
            bid,
            actual,
            challenger_wins: actual < bid.count,
        };
        log::info!("{outcome}");
        self.last_challenge = Some(outcome);
        self.record_history(
            player,
            HistoryEvent::Challenged {
                against: challenged,
                bid,
                actual,
                challenger_wins: outcome.challenger_wins,
            },
        );
        Ok(outcome)
    }

    fn record_history(&mut self, player: usize, event: HistoryEvent) {
        self.history.push(HistoryEntry { player, event });
    }
}

fn ensure_player_count(player_count: usize) -> Result<(), GameError> {
    if player_count < MIN_PLAYERS {
        log::warn!("rejected game with {player_count} players");
        return Err(GameError::InvalidPlayerCount { min: MIN_PLAYERS, got: player_count });
    }
    Ok(())
}
