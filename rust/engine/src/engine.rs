use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::actions::{
    ActRequest, HandResult, OpponentSummary, PlayType, PlayerAction, ShowdownHand, Street,
};
use crate::board::CommunityCards;
use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::eval::best_hand;
use crate::hand::HandValue;
use crate::logger::ActionRecord;
use crate::player::{Player, PlayerId};
use crate::pot::{settle, SidePot};
use crate::rules::{validate_action, BetContext, ValidatedAction};
use crate::strategy::Strategy;

/// Table engine that runs Texas Hold'em hands for 2 to 10 seated players.
///
/// Owns the players, their strategies, the deck and the betting ledgers. A hand
/// is started with [`Engine::next_hand`] and driven either one move at a time
/// through [`Engine::apply_move`] or to completion with [`Engine::play_hand`].
///
/// # Examples
///
/// ```
/// use holdem_engine::actions::{ActRequest, PlayerAction};
/// use holdem_engine::config::TableConfig;
/// use holdem_engine::engine::Engine;
/// use holdem_engine::player::Player;
/// use holdem_engine::strategy::Strategy;
///
/// struct Folder;
/// impl Strategy for Folder {
///     fn act(&mut self, req: &ActRequest) -> PlayerAction {
///         if req.to_call > 0 { PlayerAction::fold() } else { PlayerAction::check() }
///     }
///     fn name(&self) -> &str { "folder" }
/// }
///
/// let config = TableConfig { seed: Some(7), ..TableConfig::default() };
/// let mut engine = Engine::new(config).unwrap();
/// for name in ["a", "b", "c"] {
///     engine.add_player(Player::new(name, 100), Box::new(Folder)).unwrap();
/// }
/// let result = engine.play_hand().unwrap();
/// assert_eq!(result.winners.len(), 1);
/// assert_eq!(engine.total_chips(), 300);
/// assert_eq!(engine.pot(), 0);
/// ```
pub struct Engine {
    config: TableConfig,
    seed: u64,
    deck: Deck,
    players: Vec<Player>,
    strategies: HashMap<PlayerId, Box<dyn Strategy>>,
    board: CommunityCards,
    /// Seats still contesting the pot, in seat order
    active: Vec<usize>,
    street: Street,
    street_bets: HashMap<PlayerId, u32>,
    hand_bets: HashMap<PlayerId, u32>,
    /// Players who acted since the last bet or raise
    acted: HashSet<PlayerId>,
    last_raise: u32,
    any_bet: bool,
    current: Option<usize>,
    small_blind_seat: Option<usize>,
    big_blind_seat: Option<usize>,
    hand_number: u64,
    in_progress: bool,
    history: Vec<ActionRecord>,
    last_result: Option<HandResult>,
}

impl Engine {
    pub fn new(config: TableConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            config,
            seed,
            deck: Deck::new_with_seed(seed),
            players: Vec::with_capacity(config.seats),
            strategies: HashMap::new(),
            board: CommunityCards::default(),
            active: Vec::new(),
            street: Street::Preflop,
            street_bets: HashMap::new(),
            hand_bets: HashMap::new(),
            acted: HashSet::new(),
            last_raise: config.big_blind,
            any_bet: false,
            current: None,
            small_blind_seat: None,
            big_blind_seat: None,
            hand_number: 0,
            in_progress: false,
            history: Vec::new(),
            last_result: None,
        })
    }

    /// Seats a player at the next free seat with the strategy that will act for them.
    pub fn add_player(
        &mut self,
        mut player: Player,
        strategy: Box<dyn Strategy>,
    ) -> Result<usize, GameError> {
        if self.in_progress {
            return Err(GameError::HandInProgress);
        }
        if self.players.len() >= self.config.seats {
            return Err(GameError::TableFull(self.config.seats));
        }
        let table_chips = self
            .players
            .iter()
            .try_fold(player.chips(), |sum, p| sum.checked_add(p.chips()));
        if table_chips.is_none() {
            return Err(GameError::ChipOverflow);
        }
        let seat = self.players.len();
        player.set_seat(seat);
        debug!(player = %player.name(), seat, strategy = strategy.name(), "player seated");
        self.strategies.insert(player.id(), strategy);
        self.players.push(player);
        Ok(seat)
    }

    /// Places the blinds; the next call to [`Engine::next_hand`] rotates from here.
    pub fn seat_blinds(&mut self, small_blind: usize, big_blind: usize) -> Result<(), GameError> {
        for seat in [small_blind, big_blind] {
            if seat >= self.players.len() {
                return Err(GameError::InvalidSeat(seat));
            }
        }
        self.small_blind_seat = Some(small_blind);
        self.big_blind_seat = Some(big_blind);
        Ok(())
    }

    /// Starts a new hand.
    ///
    /// Players without chips leave the table first; their ids are returned
    /// together with the seat that acts first. Blinds move one seat on, the
    /// deck is reshuffled, hole cards are dealt and both blinds are posted.
    /// A hand that was abandoned mid-way has its ledger refunded.
    ///
    /// # Errors
    ///
    /// [`GameError::NotEnoughPlayers`] when fewer than two players have chips.
    pub fn next_hand(&mut self) -> Result<(Vec<PlayerId>, usize), GameError> {
        if self.in_progress {
            self.refund_unsettled();
        }

        let prev_sb = self.small_blind_seat;
        let mut removed = Vec::new();
        let mut removed_before_sb = 0;
        let mut sb_removed = false;
        let mut kept = Vec::with_capacity(self.players.len());
        for (seat, player) in std::mem::take(&mut self.players).into_iter().enumerate() {
            if player.chips() > 0 {
                kept.push(player);
                continue;
            }
            match prev_sb {
                Some(prev) if seat < prev => removed_before_sb += 1,
                Some(prev) if seat == prev => sb_removed = true,
                _ => {}
            }
            debug!(player = %player.name(), "busted player leaves the table");
            self.strategies.remove(&player.id());
            removed.push(player.id());
        }
        self.players = kept;
        for (seat, player) in self.players.iter_mut().enumerate() {
            player.set_seat(seat);
        }

        let n = self.players.len();
        if n < 2 {
            self.small_blind_seat = None;
            self.big_blind_seat = None;
            return Err(GameError::NotEnoughPlayers);
        }
        let sb = match prev_sb {
            None => 0,
            Some(prev) if sb_removed => (prev - removed_before_sb) % n,
            Some(prev) => (prev - removed_before_sb + 1) % n,
        };
        let bb = (sb + 1) % n;

        self.hand_number += 1;
        self.small_blind_seat = Some(sb);
        self.big_blind_seat = Some(bb);
        self.active = (0..n).collect();
        self.street = Street::Preflop;
        self.board.clear();
        self.street_bets.clear();
        self.hand_bets.clear();
        self.acted.clear();
        self.history.clear();
        self.last_raise = self.config.big_blind;
        self.any_bet = true;
        self.last_result = None;

        self.deck.reset();
        for player in &mut self.players {
            player.clear_cards();
        }
        for _ in 0..2 {
            for i in 0..n {
                let card = self.deck.draw()?;
                self.players[(sb + i) % n].give_card(card)?;
            }
        }

        self.in_progress = true;
        let posted_sb = self.commit(sb, self.config.small_blind);
        let posted_bb = self.commit(bb, self.config.big_blind);
        debug!(
            hand = self.hand_number,
            small_blind_seat = sb,
            big_blind_seat = bb,
            posted_sb,
            posted_bb,
            "hand started"
        );

        let first = (bb + 1) % n;
        self.advance(first)?;
        Ok((removed, self.current.unwrap_or(first)))
    }

    /// Plays a full hand, asking each player's strategy for decisions.
    pub fn play_hand(&mut self) -> Result<HandResult, GameError> {
        self.next_hand()?;
        while self.in_progress {
            let seat = self.current.ok_or(GameError::NoHandInProgress)?;
            let request = self.build_act_request(seat)?;
            let strategy = self
                .strategies
                .get_mut(&request.player_id)
                .ok_or(GameError::MissingStrategy(request.player_id))?;
            let action = strategy.act(&request);
            if let Some(result) = self.apply_move(request.player_id, action.play, action.amount)? {
                return Ok(result);
            }
        }
        // The hand can close while blinds are posted when nobody is left to act
        self.last_result.clone().ok_or(GameError::NoHandInProgress)
    }

    /// Applies one move by the player whose turn it is.
    ///
    /// Returns the hand result when this move ended the hand. A rejected move
    /// leaves ledgers, stacks and the turn untouched.
    pub fn apply_move(
        &mut self,
        player_id: PlayerId,
        play: PlayType,
        amount: Option<u32>,
    ) -> Result<Option<HandResult>, GameError> {
        if !self.in_progress {
            return Err(GameError::NoHandInProgress);
        }
        let seat = self.seat_of(player_id)?;
        let expected = self.current.ok_or(GameError::NoHandInProgress)?;
        if seat != expected {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: seat,
            });
        }

        let ctx = self.bet_context(seat);
        let validated = validate_action(&ctx, PlayerAction::new(play, amount))?;
        if play == PlayType::Check && ctx.to_call() > 0 {
            warn!(
                player = %self.players[seat].name(),
                to_call = ctx.to_call(),
                "check while facing a bet played as a call"
            );
        }

        let recorded = match validated {
            ValidatedAction::Fold => {
                self.active.retain(|&s| s != seat);
                PlayerAction::fold()
            }
            ValidatedAction::Check => PlayerAction::check(),
            ValidatedAction::Call(chips) => {
                self.commit(seat, chips);
                PlayerAction::call()
            }
            ValidatedAction::Raise { to, added } => {
                self.commit(seat, added);
                self.last_raise = to - ctx.street_high;
                self.reopen_action();
                PlayerAction::raise_to(to)
            }
            ValidatedAction::AllIn(chips) => {
                self.commit(seat, chips);
                let total = self.street_bet(player_id);
                if total > ctx.street_high {
                    self.last_raise = (total - ctx.street_high).max(self.config.big_blind);
                    self.reopen_action();
                }
                PlayerAction::all_in()
            }
        };
        self.acted.insert(player_id);
        debug!(
            hand = self.hand_number,
            street = ?self.street,
            seat,
            action = %recorded.play,
            amount = ?recorded.amount,
            pot = self.pot(),
            "action applied"
        );
        self.history.push(ActionRecord {
            player_id,
            street: self.street,
            action: recorded,
        });

        self.advance(seat + 1)
    }

    /// Builds the snapshot handed to the strategy of the player at `seat`.
    pub fn build_act_request(&self, seat: usize) -> Result<ActRequest, GameError> {
        let player = self.players.get(seat).ok_or(GameError::InvalidSeat(seat))?;
        if !self.in_progress {
            return Err(GameError::NoHandInProgress);
        }
        let ctx = self.bet_context(seat);
        let opponents = self
            .active
            .iter()
            .filter(|&&s| s != seat)
            .map(|&s| {
                let p = &self.players[s];
                (
                    p.id(),
                    OpponentSummary {
                        seat: s,
                        chips: p.chips(),
                        committed_street: self.street_bet(p.id()),
                        committed_hand: self.hand_bet(p.id()),
                        folded: false,
                    },
                )
            })
            .collect();
        Ok(ActRequest {
            player_id: player.id(),
            hole_cards: player.hole_cards().to_vec(),
            community_cards: self.board.cards().to_vec(),
            street: self.street,
            to_call: ctx.to_call(),
            min_raise: ctx.min_raise,
            min_raise_to: ctx.min_raise_to(),
            any_bet_this_street: self.any_bet,
            pot: self.pot(),
            committed_street: ctx.committed_street,
            committed_hand: self.hand_bet(player.id()),
            stack: player.chips(),
            active_players: self.active.len(),
            seat,
            dealer_seat: self.dealer_seat(),
            small_blind: self.config.small_blind,
            big_blind: self.config.big_blind,
            opponents,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Deck seed in use, whether configured or drawn from entropy.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn pot(&self) -> u32 {
        self.hand_bets.values().sum()
    }

    /// Highest amount any player has committed on the current street.
    pub fn current_bet(&self) -> u32 {
        self.street_bets.values().copied().max().unwrap_or(0)
    }

    pub fn to_call(&self, seat: usize) -> u32 {
        self.players
            .get(seat)
            .map(|p| self.current_bet().saturating_sub(self.street_bet(p.id())))
            .unwrap_or(0)
    }

    pub fn min_raise(&self) -> u32 {
        self.last_raise
    }

    pub fn committed_street(&self, id: PlayerId) -> u32 {
        self.street_bet(id)
    }

    pub fn committed_hand(&self, id: PlayerId) -> u32 {
        self.hand_bet(id)
    }

    pub fn active_seats(&self) -> &[usize] {
        &self.active
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn strategy_name(&self, id: PlayerId) -> Option<&str> {
        self.strategies.get(&id).map(|s| s.name())
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn board(&self) -> &[Card] {
        self.board.cards()
    }

    /// Seat due to act, or `None` between hands.
    pub fn current_seat(&self) -> Option<usize> {
        self.current
    }

    pub fn small_blind_seat(&self) -> Option<usize> {
        self.small_blind_seat
    }

    pub fn big_blind_seat(&self) -> Option<usize> {
        self.big_blind_seat
    }

    /// The seat before the small blind; heads-up the small blind holds the button.
    pub fn dealer_seat(&self) -> usize {
        let n = self.players.len();
        let sb = self.small_blind_seat.unwrap_or(0);
        if n <= 2 {
            sb
        } else {
            (sb + n - 1) % n
        }
    }

    /// Chips in stacks plus chips in the pot; constant for the engine's lifetime.
    ///
    /// Seating refuses players that would push this past `u32::MAX`.
    pub fn total_chips(&self) -> u32 {
        self.players.iter().map(|p| p.chips()).sum::<u32>() + self.pot()
    }

    pub fn hand_in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }

    /// Actions taken in the current (or just finished) hand.
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    pub fn last_result(&self) -> Option<&HandResult> {
        self.last_result.as_ref()
    }

    fn seat_of(&self, id: PlayerId) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id() == id)
            .ok_or(GameError::UnknownPlayer(id))
    }

    fn street_bet(&self, id: PlayerId) -> u32 {
        self.street_bets.get(&id).copied().unwrap_or(0)
    }

    fn hand_bet(&self, id: PlayerId) -> u32 {
        self.hand_bets.get(&id).copied().unwrap_or(0)
    }

    fn bet_context(&self, seat: usize) -> BetContext {
        let player = &self.players[seat];
        BetContext {
            stack: player.chips(),
            committed_street: self.street_bet(player.id()),
            street_high: self.current_bet(),
            min_raise: self.last_raise,
        }
    }

    /// Moves up to `amount` chips from the player's stack into both ledgers.
    fn commit(&mut self, seat: usize, amount: u32) -> u32 {
        let player = &mut self.players[seat];
        let taken = player.bet(amount);
        let id = player.id();
        *self.street_bets.entry(id).or_insert(0) += taken;
        *self.hand_bets.entry(id).or_insert(0) += taken;
        taken
    }

    fn reopen_action(&mut self) {
        self.acted.clear();
        self.any_bet = true;
    }

    fn needs_to_act(&self, seat: usize) -> bool {
        let Some(player) = self.players.get(seat) else {
            return false;
        };
        if player.chips() == 0 || !self.active.contains(&seat) {
            return false;
        }
        let id = player.id();
        if self.street_bet(id) < self.current_bet() {
            return true;
        }
        if self.acted.contains(&id) {
            return false;
        }
        self.active
            .iter()
            .any(|&s| s != seat && self.players[s].chips() > 0)
    }

    fn find_actor(&self, from: usize) -> Option<usize> {
        let n = self.players.len();
        (0..n).map(|i| (from + i) % n).find(|&s| self.needs_to_act(s))
    }

    /// Hands the turn to the next seat that must act, dealing further streets
    /// and settling the hand when betting is closed.
    fn advance(&mut self, mut from: usize) -> Result<Option<HandResult>, GameError> {
        loop {
            if self.active.len() <= 1 {
                return self.finish_hand().map(Some);
            }
            if let Some(seat) = self.find_actor(from) {
                self.current = Some(seat);
                return Ok(None);
            }
            if self.street == Street::River {
                return self.finish_hand().map(Some);
            }
            self.deal_street()?;
            from = self.small_blind_seat.unwrap_or(0);
        }
    }

    fn deal_street(&mut self) -> Result<(), GameError> {
        self.street = self.street.next();
        self.deck.burn()?;
        while self.board.len() < self.street.board_len() {
            let card = self.deck.draw()?;
            self.board.add(card)?;
        }
        self.street_bets.clear();
        self.acted.clear();
        self.last_raise = self.config.big_blind;
        self.any_bet = false;
        debug!(
            hand = self.hand_number,
            street = ?self.street,
            board = ?self.board.cards(),
            pot = self.pot(),
            "street dealt"
        );
        Ok(())
    }

    fn finish_hand(&mut self) -> Result<HandResult, GameError> {
        let contributions: Vec<(PlayerId, u32)> = self
            .players
            .iter()
            .map(|p| (p.id(), self.hand_bet(p.id())))
            .collect();
        let pot = self.pot();

        let (showdown, winners, pots, payouts) = if let &[seat] = self.active.as_slice() {
            let id = self.players[seat].id();
            let pots = vec![SidePot {
                amount: pot,
                eligible: vec![id],
            }];
            (Vec::new(), vec![id], pots, vec![(id, pot)])
        } else {
            let mut showdown = Vec::with_capacity(self.active.len());
            for &seat in &self.active {
                let player = &self.players[seat];
                showdown.push(ShowdownHand {
                    player_id: player.id(),
                    name: player.name().to_string(),
                    hole_cards: player.hole_cards().to_vec(),
                    value: best_hand(player.hole_cards(), self.board.cards())?,
                });
            }
            let hands: Vec<(PlayerId, HandValue)> = showdown
                .iter()
                .map(|h| (h.player_id, h.value.clone()))
                .collect();
            let best = hands.iter().map(|(_, v)| v).max();
            let winners: Vec<PlayerId> = hands
                .iter()
                .filter(|(_, v)| Some(v) == best)
                .map(|(id, _)| *id)
                .collect();
            let (pots, payouts) = settle(&contributions, &hands);
            (showdown, winners, pots, payouts)
        };

        for (id, amount) in &payouts {
            let seat = self.seat_of(*id)?;
            self.players[seat].add_chips(*amount);
        }
        debug_assert_eq!(payouts.iter().map(|(_, a)| a).sum::<u32>(), pot);

        self.street = Street::Showdown;
        self.current = None;
        self.in_progress = false;
        self.street_bets.clear();
        self.hand_bets.clear();
        self.acted.clear();

        let result = HandResult {
            hand_number: self.hand_number,
            board: self.board.cards().to_vec(),
            showdown,
            winners,
            pots,
            payouts,
        };
        debug!(
            hand = self.hand_number,
            pot,
            winners = result.winners.len(),
            "hand complete"
        );
        self.last_result = Some(result.clone());
        Ok(result)
    }

    fn refund_unsettled(&mut self) {
        let pot = self.pot();
        for player in &mut self.players {
            if let Some(amount) = self.hand_bets.get(&player.id()) {
                player.add_chips(*amount);
            }
        }
        warn!(
            hand = self.hand_number,
            pot, "unfinished hand abandoned, contributions refunded"
        );
        self.hand_bets.clear();
        self.street_bets.clear();
        self.in_progress = false;
    }
}
