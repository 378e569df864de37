//! Whole-game flows driven through a scripted adapter.

use std::collections::VecDeque;

use yz_engine::{
    Action, Category, ControlId, EngineResult, Game, InputEvent, IoAdapter, LoadedDice, Session,
    SessionEnd, Transition,
};

/// Replays a fixed list of events and records what it was shown.
#[derive(Default)]
struct Scripted {
    events: VecDeque<InputEvent>,
    renders: usize,
    totals: Vec<Option<u32>>,
    initialized: bool,
}

impl Scripted {
    fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl IoAdapter for Scripted {
    fn initialize(&mut self) -> EngineResult<()> {
        self.initialized = true;
        Ok(())
    }

    fn render(&mut self, session: &Session) -> EngineResult<()> {
        self.renders += 1;
        self.totals.push(session.total());
        Ok(())
    }

    fn next_event(&mut self, _session: &Session) -> EngineResult<Option<InputEvent>> {
        Ok(self.events.pop_front())
    }
}

fn loaded(faces: &[u8]) -> Game {
    Game::with_roller(Box::new(LoadedDice::new(faces.iter().copied())))
}

fn click(id: ControlId) -> InputEvent {
    InputEvent::clicked(id)
}

fn commit(category: Category) -> [InputEvent; 2] {
    [click(ControlId::Slot(category)), click(ControlId::Button)]
}

fn selectable() -> impl DoubleEndedIterator<Item = Category> {
    Category::ALL.into_iter().filter(|c| c.is_selectable())
}

// ---------------------------------------------------------------------------
// Single turns
// ---------------------------------------------------------------------------

#[test]
fn three_of_a_kind_commits_preview() {
    let mut game = loaded(&[2, 2, 2, 5, 6, 1, 1, 1, 1, 1]);
    assert_eq!(game.session().dice_faces(), [2, 2, 2, 5, 6]);

    game.prepare_turn();
    let t = game.dispatch(click(ControlId::Slot(Category::ThreeOfAKind)));
    assert_eq!(t, Transition::SlotSelected(Category::ThreeOfAKind));
    assert_eq!(game.session().total(), Some(17));

    game.prepare_turn();
    game.dispatch(click(ControlId::Button));

    let slot = game.session().registry().slot(Category::ThreeOfAKind);
    assert!(slot.is_disabled());
    assert_eq!(slot.score(), Some(17));
    assert_eq!(game.session().roll_count(), 1);
    assert_eq!(game.session().open_slot_count(), 12);
}

#[test]
fn committed_slot_cannot_be_reselected() {
    let mut game = loaded(&[6]);
    game.prepare_turn();
    let t = game.dispatch(click(ControlId::Slot(Category::Sixes)));
    assert_eq!(t, Transition::SlotSelected(Category::Sixes));
    game.prepare_turn();
    let t = game.dispatch(click(ControlId::Button));
    assert_eq!(
        t,
        Transition::Committed {
            category: Category::Sixes,
            score: 30
        }
    );
    game.prepare_turn();
    let t = game.dispatch(click(ControlId::Slot(Category::Sixes)));
    assert_eq!(t, Transition::Ignored);
    assert_eq!(game.session().registry().slot(Category::Sixes).score(), Some(30));
}

#[test]
fn ignored_events_leave_state_untouched() {
    let mut game = loaded(&[4, 1, 3, 6, 2]);
    game.prepare_turn();
    let before = game.session().registry().clone();

    for e in [
        click(ControlId::Button),
        click(ControlId::Slot(Category::Subtotal)),
        click(ControlId::Slot(Category::Total)),
        InputEvent {
            control: 22,
            action: Action::Clicked,
        },
        InputEvent {
            control: usize::MAX,
            action: Action::PressDown,
        },
    ] {
        assert_eq!(game.dispatch(e), Transition::Ignored);
    }
    assert_eq!(game.session().registry(), &before);
}

// ---------------------------------------------------------------------------
// Final roll
// ---------------------------------------------------------------------------

#[test]
fn last_slot_on_final_roll_is_scored_automatically() {
    let mut script: Vec<InputEvent> = selectable()
        .filter(|&c| c != Category::Chance)
        .flat_map(commit)
        .collect();
    for _ in 0..2 {
        script.push(click(ControlId::Die(0)));
        script.push(click(ControlId::Button));
    }

    let mut io = Scripted::new(script);
    let end = loaded(&[3]).play(&mut io).unwrap();

    assert_eq!(end, SessionEnd::Completed { total: 135 });
    assert!(io.events.is_empty());
}

#[test]
fn final_roll_with_several_open_slots_waits() {
    let mut game = loaded(&[5]);
    for _ in 0..2 {
        game.prepare_turn();
        game.dispatch(click(ControlId::Die(3)));
        game.prepare_turn();
        game.dispatch(click(ControlId::Button));
    }
    game.prepare_turn();
    assert!(game.session().is_final_roll());
    assert_eq!(game.synthesized_event(), None);
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[test]
fn end_of_input_quits() {
    let mut io = Scripted::new([]);
    let end = loaded(&[1]).play(&mut io).unwrap();
    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(io.renders, 1);
}

#[test]
fn full_game_reaches_total() {
    let script: Vec<InputEvent> = selectable().flat_map(commit).collect();
    let mut io = Scripted::new(script);
    let mut game = loaded(&[3]);

    let end = game.play(&mut io).unwrap();
    assert_eq!(end, SessionEnd::Completed { total: 135 });

    let card = game.session().scorecard();
    assert_eq!(card.get(Category::Subtotal), Some(15));
    assert_eq!(card.get(Category::Bonus), Some(0));
    assert_eq!(card.get(Category::FullHouse), Some(25));
    assert_eq!(card.get(Category::Yahtzee), Some(50));
    assert_eq!(card.get(Category::LargeStraight), Some(0));
    assert_eq!(card.get(Category::Total), Some(135));
}

#[test]
fn run_offers_another_game() {
    let mut script: Vec<InputEvent> = selectable().flat_map(commit).collect();
    script.push(click(ControlId::Die(0)));
    script.push(click(ControlId::Button));
    let mut io = Scripted::new(script);
    let mut game = loaded(&[3]);

    game.run(&mut io).unwrap();

    assert!(io.initialized);
    // the second game starts with a blank sheet
    assert_eq!(io.totals.last(), Some(&None));
    assert_eq!(game.session().open_slot_count(), 13);
}

#[test]
fn total_never_decreases_over_a_game() {
    let script: Vec<InputEvent> = selectable().rev().flat_map(commit).collect();
    let mut io = Scripted::new(script);
    loaded(&[1, 2, 3, 4, 5, 6, 6, 2]).play(&mut io).unwrap();

    let committed: Vec<u32> = io.totals.iter().flatten().copied().collect();
    assert!(committed.windows(2).all(|w| w[0] <= w[1]));
}
