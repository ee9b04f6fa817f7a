//! End-to-end scenarios: fixed rosters with known terminal states.

use gridcar_core::{Heading, Position, TickId};
use gridcar_engine::{RunState, Simulation, SimulationError};
use gridcar_test_utils::{car, field, simulation};

// ── Single car ──────────────────────────────────────────────────

#[test]
fn single_car_drives_north() {
    let mut sim = simulation(5, 5, [car("A", 0, 0, 'N', "FF")]);
    let report = sim.run();

    let a = report.car("A").unwrap();
    assert_eq!(a.position, Position::new(0, 2));
    assert_eq!(a.heading, Heading::North);
    assert!(a.active);
    assert!(report.collisions.is_empty());
    assert_eq!(report.ticks, TickId(2));
}

#[test]
fn single_car_turns_east() {
    let mut sim = simulation(5, 5, [car("A", 0, 0, 'N', "FFRFF")]);
    let report = sim.run();

    let a = report.car("A").unwrap();
    assert_eq!(a.position, Position::new(2, 2));
    assert_eq!(a.heading, Heading::East);
    assert_eq!(report.ticks, TickId(5));
}

#[test]
fn forward_into_wall_is_absorbed() {
    let mut sim = simulation(5, 5, [car("A", 0, 0, 'W', "F")]);
    let report = sim.run();

    let a = report.car("A").unwrap();
    assert_eq!(a.position, Position::new(0, 0));
    assert_eq!(a.cursor, 1);
    assert!(a.active);
    assert_eq!(report.metrics.moves_blocked, 1);
}

#[test]
fn driving_past_the_edge_stays_on_field() {
    let mut sim = simulation(5, 5, [car("A", 0, 0, 'N', "FFFFFFFF")]);
    let report = sim.run();
    assert_eq!(report.car("A").unwrap().position, Position::new(0, 4));
    assert_eq!(report.metrics.moves_blocked, 4);
}

// ── Collisions ──────────────────────────────────────────────────

#[test]
fn co_located_cars_with_empty_programs_never_collide() {
    let mut sim = simulation(5, 5, [car("A", 1, 1, 'N', ""), car("B", 1, 1, 'N', "")]);
    let report = sim.run();

    assert_eq!(sim.state(), RunState::Completed);
    assert_eq!(report.ticks, TickId(0));
    assert!(report.collisions.is_empty());
    assert!(report.cars.iter().all(|c| c.active));
}

#[test]
fn head_on_collision_stops_both_cars() {
    let mut sim = simulation(3, 3, [car("A", 0, 0, 'N', "F"), car("B", 0, 2, 'S', "F")]);
    let report = sim.run();

    let lines: Vec<String> = report.collisions.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "A collides with B at (0,1) at step 1",
            "B collides with A at (0,1) at step 1",
        ]
    );
    assert!(!report.car("A").unwrap().active);
    assert!(!report.car("B").unwrap().active);
}

#[test]
fn collision_in_later_tick_is_tagged_with_that_tick() {
    let mut sim = simulation(
        5,
        5,
        [car("A", 0, 0, 'E', "FFF"), car("B", 4, 0, 'W', "FFF")],
    );
    let report = sim.run();

    // A: (1,0) (2,0)   B: (3,0) (2,0) -> collide at end of tick 2.
    assert_eq!(report.collisions.len(), 2);
    assert_eq!(report.collisions[0].tick, TickId(2));
    assert_eq!(report.collisions[0].position, Position::new(2, 0));
    assert_eq!(report.car("A").unwrap().cursor, 2);
    assert_eq!(report.ticks, TickId(3));
}

#[test]
fn three_way_pileup_reports_against_first_occupant() {
    let mut sim = simulation(
        3,
        3,
        [
            car("A", 1, 0, 'N', "F"),
            car("B", 0, 1, 'E', "F"),
            car("C", 2, 1, 'W', "F"),
        ],
    );
    let report = sim.run();

    let pairs: Vec<(&str, &str)> = report
        .collisions
        .iter()
        .map(|e| (e.car.as_str(), e.other.as_str()))
        .collect();
    assert_eq!(pairs, vec![("A", "B"), ("B", "A"), ("A", "C"), ("C", "A")]);
    assert!(report.cars.iter().all(|c| !c.active));
    assert_eq!(report.metrics.collision_pairs, 2);
}

#[test]
fn report_text_matches_results_listing() {
    let mut sim = simulation(
        10,
        10,
        [
            car("A", 1, 2, 'N', "FFRFFFFRRL"),
            car("B", 7, 8, 'W', "FFLFFFFFFF"),
        ],
    );
    let report = sim.run();
    assert_eq!(
        report.to_string(),
        "- A is no longer active due to collision.\n\
         - B is no longer active due to collision.\n\
         A collides with B at (5,4) at step 7\n\
         B collides with A at (5,4) at step 7\n"
    );
}

// ── Driver lifecycle ────────────────────────────────────────────

#[test]
fn start_over_after_reset() {
    let mut sim = Simulation::new(field(5, 5));
    sim.add_car(car("A", 0, 0, 'N', "F")).unwrap();
    sim.run();
    assert_eq!(
        sim.add_car(car("B", 1, 1, 'N', "F")),
        Err(SimulationError::RosterFrozen)
    );

    sim.reset();
    sim.add_car(car("A", 4, 4, 'S', "FF")).unwrap();
    let report = sim.run();
    assert_eq!(report.car("A").unwrap().position, Position::new(4, 2));
    assert_eq!(report.cars.len(), 1);
}

#[test]
fn stepping_exposes_each_tick() {
    let mut sim = simulation(3, 3, [car("A", 0, 0, 'N', "FF"), car("B", 0, 2, 'S', "F")]);

    let t1 = sim.step().unwrap();
    assert_eq!(t1.tick, TickId(1));
    assert_eq!(t1.collisions.len(), 2);
    assert!(!t1.completed);
    assert_eq!(sim.state(), RunState::Running);

    let t2 = sim.step().unwrap();
    assert!(t2.collisions.is_empty());
    assert!(t2.completed);
    assert!(sim.step().is_none());

    // A stopped at (0,1) in tick 1 and did not consume its second F.
    assert_eq!(sim.car("A").unwrap().position(), Position::new(0, 1));
    assert_eq!(sim.car("A").unwrap().cursor(), 1);
}
