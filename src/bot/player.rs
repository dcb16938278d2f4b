//! The advised player: pipeline orchestration per turn.

use super::fallback::fallback_decision;
use super::legalize::legalize;
use super::models::{DecisionLog, DecisionRecord, DecisionSource};
use crate::advisor::AdvisorClient;
use crate::analysis::{self, GameInfo};
use crate::config::AdvisorConfig;
use crate::game::TableAgent;
use crate::game::cards;
use crate::game::entities::{
    Chips, Decision, DecisionKind, FinalAction, GameStart, HistoryAction, RoundState, Seat, Street,
    ValidAction,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

/// An agent that plays by consulting the advisory service, with the
/// deterministic fallback behind it.
///
/// Each instance owns its decision history and engine identity; nothing is
/// shared, so independent instances can play separate matches in parallel.
pub struct AdvisorPlayer {
    name: String,
    session_id: Uuid,
    /// Engine-assigned seat identifier, learned at match start.
    engine_uuid: Option<String>,
    client: AdvisorClient,
    history: DecisionLog,
    last_stack: Option<Chips>,
}

impl AdvisorPlayer {
    /// Creates a player consulting the service described by `config`.
    pub fn new(name: impl Into<String>, config: AdvisorConfig) -> Result<Self> {
        let client = AdvisorClient::new(config)?;
        Ok(Self {
            name: name.into(),
            session_id: Uuid::new_v4(),
            engine_uuid: None,
            client,
            history: DecisionLog::default(),
            last_stack: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn engine_uuid(&self) -> Option<&str> {
        self.engine_uuid.as_deref()
    }

    /// This session's decision history, oldest first.
    pub fn history(&self) -> &DecisionLog {
        &self.history
    }

    /// The advisory path for one turn: consult, then legalize.
    ///
    /// Any error in here (transport, status, empty reply, or anything a
    /// future stage grows) funnels into one `Result` handled at the turn
    /// boundary; the parser and legalizer themselves cannot fail.
    async fn advised_turn(&self, info: &GameInfo) -> Result<(Decision, FinalAction)> {
        let proposed = self.client.consult(info).await?;
        let action = legalize(&proposed, &info.legal_actions, info.my_stack);
        Ok((proposed, action))
    }

    fn record(&mut self, info: &GameInfo, source: DecisionSource, proposed: Decision, action: FinalAction) {
        self.history.push(DecisionRecord {
            timestamp: Utc::now(),
            street: info.street,
            hole_cards: info.hole_cards.clone(),
            community_cards: info.community_cards.clone(),
            stack: info.my_stack,
            pot_size: info.pot_size,
            source,
            proposed,
            final_kind: action.kind,
            final_amount: action.amount,
        });
    }
}

#[async_trait]
impl TableAgent for AdvisorPlayer {
    async fn declare_action(
        &mut self,
        valid_actions: &[ValidAction],
        hole_cards: &[String],
        round_state: &RoundState,
    ) -> (DecisionKind, Chips) {
        let info = analysis::extract_game_info(
            round_state,
            hole_cards,
            valid_actions,
            self.engine_uuid.as_deref(),
        );

        let (source, proposed, action) = match self.advised_turn(&info).await {
            Ok((proposed, action)) => {
                if proposed.kind != action.kind || proposed.amount != Some(action.amount) {
                    log::info!(
                        "agent {}: advised {proposed}, adjusted to {action}",
                        self.name
                    );
                } else {
                    log::info!("agent {}: advised {action}", self.name);
                }
                (DecisionSource::Advisory, proposed, action)
            }
            Err(err) => {
                log::warn!(
                    "agent {}: advisory unavailable, using fallback: {err:#}",
                    self.name
                );
                let action = fallback_decision(
                    hole_cards,
                    &round_state.community_card,
                    info.my_stack,
                    info.call_amount,
                    &info.legal_actions,
                );
                log::info!("agent {}: fallback chose {action}", self.name);
                let proposed = Decision::new(action.kind, Some(action.amount));
                (DecisionSource::Fallback, proposed, action)
            }
        };

        self.record(&info, source, proposed, action);
        (action.kind, action.amount)
    }

    fn receive_game_start(&mut self, game: &GameStart) {
        self.engine_uuid = game
            .seats
            .iter()
            .find(|seat| seat.name == self.name)
            .map(|seat| seat.uuid.clone());
        match &self.engine_uuid {
            Some(uuid) => log::info!(
                "agent {}: match starting as seat {uuid} (session {})",
                self.name,
                self.session_id
            ),
            None => log::warn!(
                "agent {}: match starting but no seat carries this name",
                self.name
            ),
        }
    }

    fn receive_round_start(&mut self, round_count: u32, hole_cards: &[String], _seats: &[Seat]) {
        log::debug!(
            "agent {}: round {round_count} dealt {}",
            self.name,
            cards::format_cards(hole_cards)
        );
    }

    fn receive_street_start(&mut self, street: Street, round_state: &RoundState) {
        log::debug!(
            "agent {}: {street} opens, board {}",
            self.name,
            cards::format_cards(&round_state.community_card)
        );
    }

    fn receive_game_update(&mut self, action: &HistoryAction, round_state: &RoundState) {
        if Some(action.uuid.as_str()) == self.engine_uuid.as_deref() {
            return;
        }
        let actor = round_state
            .seats
            .iter()
            .find(|seat| seat.uuid == action.uuid)
            .map(|seat| seat.name.as_str())
            .unwrap_or("unknown seat");
        log::debug!(
            "agent {}: {actor} {} {}",
            self.name,
            action.action.to_lowercase(),
            action.amount
        );
    }

    fn receive_round_result(&mut self, winners: &[String], round_state: &RoundState) {
        let Some(uuid) = self.engine_uuid.as_deref() else {
            return;
        };
        let won = winners.iter().any(|winner| winner == uuid);
        let stack = round_state
            .seats
            .iter()
            .find(|seat| seat.uuid == uuid)
            .map(|seat| seat.stack);
        if let Some(stack) = stack {
            if let Some(previous) = self.last_stack {
                let delta = stack as i64 - previous as i64;
                log::debug!(
                    "agent {}: round over, won={won}, stack {stack} ({delta:+})",
                    self.name
                );
            } else {
                log::debug!("agent {}: round over, won={won}, stack {stack}", self.name);
            }
            self.last_stack = Some(stack);
        }
    }
}
