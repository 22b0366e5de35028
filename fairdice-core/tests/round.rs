//! Full-round integration tests with a scripted counterpart.

use fairdice_core::{
    CommitPurpose, Counterpart, DiceSet, GameError, Party, Reporter, Result, Round, RoundEvent,
    RoundState,
};

/// Counterpart that always answers with in-range values: guesses the
/// given bit, takes the first available die, contributes zero.
struct Scripted {
    guess: u64,
    contribution: u64,
}

impl Counterpart for Scripted {
    fn guess_coin(&mut self) -> Result<u64> {
        Ok(self.guess)
    }

    fn choose_die(&mut self, available: &[usize]) -> Result<usize> {
        Ok(available[0])
    }

    fn modulo_contribution(&mut self, _modulus: u64) -> Result<u64> {
        Ok(self.contribution)
    }
}

/// Counterpart that misbehaves at a chosen step.
struct Hostile {
    bad_guess: Option<u64>,
    bad_die: Option<usize>,
    bad_contribution: Option<u64>,
}

impl Counterpart for Hostile {
    fn guess_coin(&mut self) -> Result<u64> {
        Ok(self.bad_guess.unwrap_or(0))
    }

    fn choose_die(&mut self, available: &[usize]) -> Result<usize> {
        Ok(self.bad_die.unwrap_or(available[0]))
    }

    fn modulo_contribution(&mut self, modulus: u64) -> Result<u64> {
        Ok(self.bad_contribution.unwrap_or(modulus - 1))
    }
}

#[derive(Default)]
struct EventLog {
    events: Vec<RoundEvent>,
}

impl Reporter for EventLog {
    fn report(&mut self, event: RoundEvent) {
        self.events.push(event);
    }
}

fn dice() -> DiceSet {
    DiceSet::parse(["1,2,3,4,5,6", "6,5,4,3,2,1", "2,3,4,5,6,1"]).unwrap()
}

#[test]
fn round_plays_to_resolution() {
    let dice = dice();
    let mut counterpart = Scripted {
        guess: 0,
        contribution: 3,
    };
    let mut log = EventLog::default();

    let outcome = Round::new(&dice).play(&mut counterpart, &mut log).unwrap();

    // Both parties hold distinct dice from the set.
    assert_ne!(outcome.player.die_index, outcome.computer.die_index);
    assert!(outcome.player.die_index < dice.len());
    assert!(outcome.computer.die_index < dice.len());

    // Each throw maps its face index back into its own die.
    for throw in [&outcome.player, &outcome.computer] {
        let die = &dice[throw.die_index];
        assert_eq!(die.face(throw.face_index as usize), Some(throw.face));
    }

    // Winner is consistent with the face comparison.
    match outcome.winner {
        Some(Party::Player) => assert!(outcome.player.face > outcome.computer.face),
        Some(Party::Computer) => assert!(outcome.player.face < outcome.computer.face),
        None => assert_eq!(outcome.player.face, outcome.computer.face),
    }
}

#[test]
fn every_reveal_matches_its_digest() {
    let dice = dice();
    let mut counterpart = Scripted {
        guess: 1,
        contribution: 0,
    };
    let mut log = EventLog::default();

    Round::new(&dice).play(&mut counterpart, &mut log).unwrap();

    // One coin-flip commitment plus one per throw, each digest
    // published before its reveal and verifiable afterwards.
    let mut pending: Vec<(CommitPurpose, [u8; 32])> = Vec::new();
    let mut reveals = 0;
    for event in &log.events {
        match event {
            RoundEvent::CommitmentPublished { purpose, digest, .. } => {
                pending.push((*purpose, *digest));
            }
            RoundEvent::SecretRevealed { purpose, revealed } => {
                let position = pending
                    .iter()
                    .position(|(p, _)| p == purpose)
                    .expect("reveal without prior commitment");
                let (_, digest) = pending.remove(position);
                assert_eq!(revealed.digest, digest);
                assert!(revealed.verify());
                reveals += 1;
            }
            _ => {}
        }
    }
    assert_eq!(reveals, 3);
    assert!(pending.is_empty());
}

#[test]
fn first_mover_decision_matches_reveal() {
    let dice = dice();
    let mut counterpart = Scripted {
        guess: 1,
        contribution: 2,
    };
    let mut log = EventLog::default();

    let outcome = Round::new(&dice).play(&mut counterpart, &mut log).unwrap();

    let secret = log
        .events
        .iter()
        .find_map(|event| match event {
            RoundEvent::SecretRevealed {
                purpose: CommitPurpose::FirstMover,
                revealed,
            } => Some(revealed.value),
            _ => None,
        })
        .unwrap();

    let expected = if secret == 1 {
        Party::Player
    } else {
        Party::Computer
    };
    assert_eq!(outcome.first_mover, expected);
}

#[test]
fn throw_results_follow_the_combination_rule() {
    let dice = dice();
    let mut counterpart = Scripted {
        guess: 0,
        contribution: 4,
    };
    let mut log = EventLog::default();

    Round::new(&dice).play(&mut counterpart, &mut log).unwrap();

    for event in &log.events {
        if let RoundEvent::ThrowResolved {
            secret,
            open,
            result,
            ..
        } = event
        {
            assert_eq!(*open, 4);
            assert_eq!(*result, (secret + open) % 6);
        }
    }
}

#[test]
fn out_of_range_guess_aborts_before_selection() {
    let dice = dice();
    let mut counterpart = Hostile {
        bad_guess: Some(2),
        bad_die: None,
        bad_contribution: None,
    };
    let err = Round::new(&dice)
        .play(&mut counterpart, &mut fairdice_core::NullReporter)
        .unwrap_err();
    assert!(matches!(err, GameError::OutOfRangeSelection { value: 2, .. }));
}

#[test]
fn out_of_range_die_choice_aborts_round() {
    let dice = dice();
    let mut counterpart = Hostile {
        bad_guess: None,
        bad_die: Some(9),
        bad_contribution: None,
    };
    let err = Round::new(&dice)
        .play(&mut counterpart, &mut fairdice_core::NullReporter)
        .unwrap_err();
    assert!(matches!(err, GameError::OutOfRangeSelection { value: 9, .. }));
}

#[test]
fn out_of_range_contribution_keeps_secret_hidden() {
    let dice = dice();
    let mut counterpart = Hostile {
        bad_guess: None,
        bad_die: None,
        bad_contribution: Some(6),
    };
    let mut log = EventLog::default();

    let err = Round::new(&dice).play(&mut counterpart, &mut log).unwrap_err();
    assert!(matches!(err, GameError::OutOfRangeSelection { value: 6, .. }));

    // The throw digest went out, but its secret was never revealed.
    let throw_reveals = log.events.iter().any(|event| {
        matches!(
            event,
            RoundEvent::SecretRevealed {
                purpose: CommitPurpose::Throw(_),
                ..
            }
        )
    });
    assert!(!throw_reveals);
}

#[test]
fn fresh_round_starts_at_first_mover() {
    let dice = dice();
    let round = Round::new(&dice);
    assert_eq!(round.state(), RoundState::DeterminingFirstMover);
}
