//! # Reveal Sequencer
//!
//! Timed state machine that staggers the appearance of the sheet sections:
//!
//! ```text
//! Idle ──icon──▶ IconShown ──title──▶ TitleShown ──pause + card 0──▶ CardsShown(1)
//!      ──card i──▶ CardsShown(i + 1) ──footer──▶ FooterShown ──▶ Interactive
//! ```
//!
//! Every step waits its delay (measured from the previous step) and flips
//! exactly one flag of [`AnimationState`]. The sequencer only tracks time; a
//! driver feeds it, either frame deltas through [`RevealSequencer::advance`]
//! or sleeps through [`RevealSequencer::next_delay`] and
//! [`RevealSequencer::fire_next`].

use crate::platform::FormFactor;
use crate::settings::RevealTimings;
use std::time::Duration;

/// Where the reveal is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealPhase {
    /// Nothing shown yet.
    #[default]
    Idle,
    /// Icon visible.
    IconShown,
    /// Title visible.
    TitleShown,
    /// The first `k` cards are visible.
    CardsShown(usize),
    /// Footer visible.
    FooterShown,
    /// Reveal finished, sheet accepts input.
    Interactive,
}

/// What a step reveals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    /// The icon section.
    Icon,
    /// The title.
    Title,
    /// Card at this index.
    Card(usize),
    /// The footer (and Continue button).
    Footer,
    /// End of the sequence.
    Interactive,
}

/// One scheduled step: wait `delay` after the previous step, then reveal `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStep {
    /// Wait measured from the previous step.
    pub delay: Duration,
    /// Section revealed.
    pub target: RevealTarget,
}

/// Builds the step list for `card_count` cards.
#[must_use]
pub fn schedule(timings: &RevealTimings, form_factor: FormFactor, card_count: usize) -> Vec<RevealStep> {
    let mut steps = Vec::with_capacity(card_count + 4);
    steps.push(RevealStep {
        delay: timings.icon(form_factor),
        target: RevealTarget::Icon,
    });
    steps.push(RevealStep {
        delay: timings.title(),
        target: RevealTarget::Title,
    });

    // The pause after the title is owed by whichever step comes next.
    let mut carry = timings.pause();
    for index in 0..card_count {
        steps.push(RevealStep {
            delay: carry + timings.card(index),
            target: RevealTarget::Card(index),
        });
        carry = Duration::ZERO;
    }

    steps.push(RevealStep {
        delay: carry + timings.footer(),
        target: RevealTarget::Footer,
    });
    steps.push(RevealStep {
        delay: Duration::ZERO,
        target: RevealTarget::Interactive,
    });
    steps
}

/// Visibility flags of every section.
///
/// `cards.len()` always equals the number of cards the sheet was built with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimationState {
    icon: bool,
    title: bool,
    cards: Vec<bool>,
    footer: bool,
}

impl AnimationState {
    /// Everything hidden, one card flag per card.
    #[must_use]
    pub fn new(card_count: usize) -> Self {
        Self {
            icon: false,
            title: false,
            cards: vec![false; card_count],
            footer: false,
        }
    }

    /// Icon flag.
    #[must_use]
    pub fn icon(&self) -> bool {
        self.icon
    }

    /// Title flag.
    #[must_use]
    pub fn title(&self) -> bool {
        self.title
    }

    /// Flag of card `index`; false when out of range.
    #[must_use]
    pub fn card(&self, index: usize) -> bool {
        self.cards.get(index).copied().unwrap_or(false)
    }

    /// All card flags.
    #[must_use]
    pub fn cards(&self) -> &[bool] {
        &self.cards
    }

    /// Footer flag. Input is accepted only once it is set.
    #[must_use]
    pub fn footer(&self) -> bool {
        self.footer
    }

    fn reveal(&mut self, target: RevealTarget) {
        match target {
            RevealTarget::Icon => self.icon = true,
            RevealTarget::Title => self.title = true,
            RevealTarget::Card(index) => {
                if let Some(flag) = self.cards.get_mut(index) {
                    *flag = true;
                }
            }
            RevealTarget::Footer => self.footer = true,
            RevealTarget::Interactive => {}
        }
    }
}

/// Runs the reveal timeline at most once.
#[derive(Clone, Debug)]
pub struct RevealSequencer {
    steps: Vec<RevealStep>,
    cursor: usize,
    waited: Duration,
    elapsed: Duration,
    started: bool,
    phase: RevealPhase,
    state: AnimationState,
}

impl RevealSequencer {
    /// Creates an idle sequencer for `card_count` cards.
    #[must_use]
    pub fn new(timings: &RevealTimings, form_factor: FormFactor, card_count: usize) -> Self {
        Self {
            steps: schedule(timings, form_factor, card_count),
            cursor: 0,
            waited: Duration::ZERO,
            elapsed: Duration::ZERO,
            started: false,
            phase: RevealPhase::Idle,
            state: AnimationState::new(card_count),
        }
    }

    /// Starts the timeline. Returns false if it was already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            tracing::trace!("reveal already started, ignoring");
            return false;
        }
        self.started = true;
        tracing::debug!("reveal started with {} steps", self.steps.len());
        true
    }

    /// Returns true once [`start`](Self::start) has succeeded.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Delay of the next step, or `None` when idle or finished.
    #[must_use]
    pub fn next_delay(&self) -> Option<Duration> {
        if !self.started {
            return None;
        }
        self.steps.get(self.cursor).map(|step| step.delay)
    }

    /// Fires the next step immediately, regardless of its delay.
    pub fn fire_next(&mut self) -> Option<RevealTarget> {
        if !self.started {
            return None;
        }
        let step = *self.steps.get(self.cursor)?;
        self.cursor += 1;
        self.elapsed += step.delay;
        self.state.reveal(step.target);
        self.phase = match step.target {
            RevealTarget::Icon => RevealPhase::IconShown,
            RevealTarget::Title => RevealPhase::TitleShown,
            RevealTarget::Card(index) => RevealPhase::CardsShown(index + 1),
            RevealTarget::Footer => RevealPhase::FooterShown,
            RevealTarget::Interactive => RevealPhase::Interactive,
        };
        tracing::debug!(
            "reveal step {:?} at {:.2}s -> {:?}",
            step.target,
            self.elapsed.as_secs_f32(),
            self.phase
        );
        Some(step.target)
    }

    /// Advances by `dt` seconds, firing every step that became due, in order.
    pub fn advance(&mut self, dt: f32) -> Vec<RevealTarget> {
        let mut fired = Vec::new();
        if !self.started || self.is_finished() {
            return fired;
        }

        self.waited += Duration::try_from_secs_f32(dt).unwrap_or(Duration::ZERO);
        while let Some(delay) = self.next_delay() {
            if self.waited < delay {
                break;
            }
            self.waited -= delay;
            if let Some(target) = self.fire_next() {
                fired.push(target);
            }
        }
        if self.is_finished() {
            self.waited = Duration::ZERO;
        }
        fired
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Visibility flags.
    #[must_use]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Scheduled steps.
    #[must_use]
    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    /// Sum of the delays of every fired step.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns true once the footer is shown.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.state.footer
    }

    /// Returns true after the last step fired.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequencer(cards: usize) -> RevealSequencer {
        RevealSequencer::new(&RevealTimings::default(), FormFactor::Phone, cards)
    }

    fn close(a: Duration, secs: f32) -> bool {
        (a.as_secs_f32() - secs).abs() < 1e-4
    }

    #[test]
    fn test_card_flags_match_card_count() {
        for n in 0..8 {
            let seq = sequencer(n);
            assert_eq!(seq.state().cards().len(), n);
            assert!(seq.state().cards().iter().all(|shown| !shown));
        }
    }

    #[test]
    fn test_idle_until_started() {
        let mut seq = sequencer(2);
        assert_eq!(seq.next_delay(), None);
        assert_eq!(seq.fire_next(), None);
        assert!(seq.advance(10.0).is_empty());
        assert_eq!(seq.phase(), RevealPhase::Idle);
    }

    #[test]
    fn test_start_runs_once() {
        let mut seq = sequencer(3);
        assert!(seq.start());
        seq.advance(0.5);
        let phase = seq.phase();
        assert!(!seq.start());
        assert_eq!(seq.phase(), phase);
        assert!(!seq.state().footer());
    }

    #[test]
    fn test_phase_order() {
        let mut seq = sequencer(3);
        seq.start();
        let mut phases = vec![seq.phase()];
        while seq.fire_next().is_some() {
            phases.push(seq.phase());
        }
        assert_eq!(
            phases,
            vec![
                RevealPhase::Idle,
                RevealPhase::IconShown,
                RevealPhase::TitleShown,
                RevealPhase::CardsShown(1),
                RevealPhase::CardsShown(2),
                RevealPhase::CardsShown(3),
                RevealPhase::FooterShown,
                RevealPhase::Interactive,
            ]
        );
        assert!(seq.is_finished());
        assert!(seq.fire_next().is_none());
    }

    #[test]
    fn test_cumulative_times() {
        let mut seq = sequencer(3);
        seq.start();
        let mut times = Vec::new();
        while seq.fire_next().is_some() {
            times.push(seq.elapsed());
        }
        // icon, title, card 0, card 1, card 2, footer, interactive
        let expected = [0.35, 0.55, 0.75, 0.85, 1.05, 1.25, 1.25];
        for (time, secs) in times.iter().zip(expected) {
            assert!(close(*time, secs), "{time:?} != {secs}");
        }
    }

    #[test]
    fn test_desktop_only_shortens_icon() {
        let timings = RevealTimings::default();
        let phone = schedule(&timings, FormFactor::Phone, 2);
        let desktop = schedule(&timings, FormFactor::Desktop, 2);

        assert!(close(desktop[0].delay, 0.1));
        assert!(close(phone[0].delay, 0.35));
        assert_eq!(phone[1..], desktop[1..]);
    }

    #[test]
    fn test_zero_cards_footer_waits_pause() {
        let steps = schedule(&RevealTimings::default(), FormFactor::Phone, 0);
        let targets: Vec<_> = steps.iter().map(|s| s.target).collect();
        assert_eq!(
            targets,
            vec![
                RevealTarget::Icon,
                RevealTarget::Title,
                RevealTarget::Footer,
                RevealTarget::Interactive
            ]
        );
        assert!(close(steps[2].delay, 0.4));
    }

    #[test]
    fn test_advance_fires_due_steps_in_order() {
        let mut seq = sequencer(2);
        seq.start();

        assert!(seq.advance(0.3).is_empty());
        assert_eq!(seq.advance(0.1), vec![RevealTarget::Icon]);
        assert!(!seq.is_interactive());

        // One long frame catches up on everything left.
        let fired = seq.advance(5.0);
        assert_eq!(
            fired,
            vec![
                RevealTarget::Title,
                RevealTarget::Card(0),
                RevealTarget::Card(1),
                RevealTarget::Footer,
                RevealTarget::Interactive,
            ]
        );
        assert!(seq.is_interactive());
        assert_eq!(seq.phase(), RevealPhase::Interactive);
        assert!(seq.advance(1.0).is_empty());
    }

    #[test]
    fn test_interactive_tracks_footer_flag() {
        let mut seq = sequencer(1);
        seq.start();
        while seq.phase() != RevealPhase::FooterShown {
            assert!(!seq.is_interactive());
            seq.fire_next();
        }
        assert!(seq.is_interactive());
    }
}
