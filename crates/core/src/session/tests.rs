use std::cell::Cell;
use std::rc::Rc;

use super::test_support::*;
use super::*;
use crate::config::SessionConfig;
use crate::input::InputSnapshot;
use crate::render::recording::RecordingCanvas;
use crate::types::{EnemyKind, ItemKind};

const STEP_MS: f64 = 150.0;
const ENEMY_READY_MS: f64 = 300.0;

#[test]
fn update_is_inert_until_the_session_is_entered() {
    let mut session =
        Session::new(SessionConfig::default(), TemplateCatalog::builtin(), SessionHooks::new())
            .expect("stock config is valid");
    assert_eq!(session.update(16.0, &InputSnapshot::idle()), TickOutcome::Inactive);
    assert_eq!(session.clock(), SimClock::default());

    session.on_enter();
    assert_eq!(session.update(16.0, &InputSnapshot::idle()), TickOutcome::Continued);
    session.on_exit();
    assert_eq!(session.update(16.0, &InputSnapshot::idle()), TickOutcome::Inactive);
    assert_eq!(session.clock().current_time, 16.0);
}

#[test]
fn new_session_starts_on_floor_one_at_the_generated_start() {
    let session =
        Session::new(SessionConfig::default(), TemplateCatalog::builtin(), SessionHooks::new())
            .expect("stock config is valid");
    assert_eq!(session.floor(), 1);
    assert_eq!(session.player().tile(), session.level().start);
    assert_eq!(session.level().stairs_up, None);
    assert_eq!(session.player().stats().health(), 100);
    assert!(session.enemies().all(|(_, enemy)| enemy.tile() != session.level().start));
}

#[test]
fn escape_pauses_after_the_clocks_advance_and_skips_all_actions() {
    let pauses = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pauses);
    let hooks = SessionHooks::new().on_pause(move || counter.set(counter.get() + 1));
    let mut session = arena_session_with_hooks(hooks);
    let start = session.player().tile();

    let input = InputSnapshot::holding(Key::KeyD).with_pressed(Key::Escape);
    assert_eq!(session.update(STEP_MS, &input), TickOutcome::Paused);

    assert_eq!(pauses.get(), 1);
    assert_eq!(session.player().tile(), start);
    assert_eq!(session.clock().current_time, STEP_MS);
    assert_eq!(session.clock().game_time, STEP_MS);
}

#[test]
fn held_direction_steps_once_per_move_cooldown() {
    let mut session = arena_session();
    let start = session.player().tile();
    let right = InputSnapshot::holding(Key::KeyD);

    session.update(100.0, &right);
    assert_eq!(session.player().tile(), start, "cooldown has not elapsed yet");

    session.update(50.0, &right);
    assert_eq!(session.player().tile(), start.offset(1, 0));

    session.update(100.0, &right);
    assert_eq!(session.player().tile(), start.offset(1, 0));

    session.update(50.0, &right);
    assert_eq!(session.player().tile(), start.offset(2, 0));
}

#[test]
fn walls_block_the_player_without_consuming_the_cooldown() {
    let mut session = arena_session();
    place_player(&mut session, Pos { y: 1, x: 1 });

    session.update(STEP_MS, &InputSnapshot::holding(Key::KeyW));
    assert_eq!(session.player().tile(), Pos { y: 1, x: 1 });
    assert_eq!(session.player().last_move_time(), 0.0);
}

#[test]
fn stepping_into_an_enemy_attacks_it_instead_of_moving() {
    let mut session = arena_session();
    let start = session.player().tile();
    let skeleton = add_enemy(&mut session, EnemyKind::Skeleton, start.offset(1, 0));

    session.update(STEP_MS, &InputSnapshot::holding(Key::ArrowRight));

    assert_eq!(session.player().tile(), start);
    assert_eq!(session.enemy(skeleton).map(|enemy| enemy.stats().health()), Some(6));
    assert_eq!(session.player().last_move_time(), STEP_MS, "melee consumes the cooldown");
}

#[test]
fn an_enemy_killed_by_the_player_is_removed_before_it_can_act() {
    let mut session = arena_session();
    let start = session.player().tile();
    player_stats(&mut session).raise_attack(100);
    add_enemy(&mut session, EnemyKind::Goblin, start.offset(1, 0));

    let outcome = session.update(ENEMY_READY_MS, &InputSnapshot::holding(Key::KeyD));

    assert_eq!(outcome, TickOutcome::Continued);
    assert_eq!(session.enemies().count(), 0);
    assert_eq!(session.progress().kills, 1);
    assert_eq!(session.player().stats().health(), 100);
    assert_eq!(session.score(), 10);
}

#[test]
fn area_attack_hits_every_adjacent_enemy_while_cooling_down() {
    let mut session = arena_session();
    let start = session.player().tile();
    let first = add_enemy(&mut session, EnemyKind::Goblin, start.offset(-1, -1));
    let second = add_enemy(&mut session, EnemyKind::Goblin, start.offset(1, 1));
    let distant = add_enemy(&mut session, EnemyKind::Orc, start.offset(2, 2));

    session.update(16.0, &InputSnapshot::idle().with_pressed(Key::Space));

    let health = |id| session.enemy(id).map(|enemy| enemy.stats().health());
    assert_eq!(health(first), Some(10));
    assert_eq!(health(second), Some(10));
    assert_eq!(health(distant), Some(40));
}

#[test]
fn walking_onto_an_item_applies_it_exactly_once() {
    let mut session = arena_session();
    let start = session.player().tile();
    let potion = add_item(&mut session, ItemKind::HealthPotion, start.offset(1, 0));
    player_stats(&mut session).take_damage(32);
    assert_eq!(session.player().stats().health(), 70);

    session.update(STEP_MS, &InputSnapshot::holding(Key::KeyD));
    assert_eq!(session.player().stats().health(), 100);
    assert_eq!(session.item(potion).map(Item::is_collected), Some(true));

    player_stats(&mut session).take_damage(32);
    assert!(!session.collect_item(potion));
    assert_eq!(session.player().stats().health(), 70);
}

#[test]
fn score_items_add_a_bonus_that_survives_later_ticks() {
    let mut session = arena_session();
    let start = session.player().tile();
    add_item(&mut session, ItemKind::Gold, start.offset(1, 0));

    session.update(STEP_MS, &InputSnapshot::holding(Key::KeyD));
    assert_eq!(session.score(), 50);

    session.update(1_000.0, &InputSnapshot::idle());
    assert_eq!(session.score(), 51);
}

#[test]
fn equipment_raises_stats_and_the_ring_also_heals() {
    let mut session = arena_session();
    let start = session.player().tile();
    let sword = add_item(&mut session, ItemKind::Sword, start);
    let plate = add_item(&mut session, ItemKind::PlateArmor, start);
    let ring = add_item(&mut session, ItemKind::RingRegeneration, start);

    for id in [sword, plate, ring] {
        assert!(session.collect_item(id));
    }

    let stats = session.player().stats();
    assert_eq!(stats.attack(), 15);
    assert_eq!(stats.defense(), 8);
    assert_eq!(stats.max_health(), 120);
    assert_eq!(stats.health(), 120);
}

#[test]
fn fireball_scroll_bursts_enemies_within_three_steps() {
    let mut session = arena_session();
    let start = session.player().tile();
    add_item(&mut session, ItemKind::ScrollFireball, start.offset(1, 0));
    let near = add_enemy(&mut session, EnemyKind::Orc, start.offset(3, 0));
    let far = add_enemy(&mut session, EnemyKind::Orc, Pos { y: 8, x: 9 });

    session.update(STEP_MS, &InputSnapshot::holding(Key::KeyD));

    assert_eq!(session.enemy(near), None, "48 damage kills a 40 health orc");
    assert_eq!(session.enemy(far).map(|enemy| enemy.stats().health()), Some(40));
    assert_eq!(session.progress().kills, 1);
}

#[test]
fn enemies_chase_once_their_cooldown_elapses() {
    let mut session = arena_session();
    let start = session.player().tile();
    let chaser = add_enemy(&mut session, EnemyKind::Goblin, start.offset(4, 0));
    let sleeper = add_enemy(&mut session, EnemyKind::Goblin, Pos { y: 10, x: 10 });

    session.update(STEP_MS, &InputSnapshot::idle());
    assert_eq!(session.enemy(chaser).map(Enemy::tile), Some(start.offset(4, 0)));

    session.update(STEP_MS, &InputSnapshot::idle());
    let chaser = session.enemy(chaser).expect("chaser is alive");
    assert_eq!(chaser.tile(), start.offset(3, 0));
    assert_eq!(chaser.last_move_time(), ENEMY_READY_MS);

    let sleeper = session.enemy(sleeper).expect("sleeper is alive");
    assert_eq!(sleeper.tile(), Pos { y: 10, x: 10 });
    assert_eq!(sleeper.last_move_time(), 0.0, "idling does not stamp the cooldown");
}

#[test]
fn enemies_in_a_line_do_not_stack_onto_one_tile() {
    let mut session = arena_session();
    let start = session.player().tile();
    let lead = add_enemy(&mut session, EnemyKind::Goblin, start.offset(2, 0));
    let trail = add_enemy(&mut session, EnemyKind::Goblin, start.offset(3, 0));

    session.update(ENEMY_READY_MS, &InputSnapshot::idle());

    let lead_tile = session.enemy(lead).map(Enemy::tile);
    let trail_tile = session.enemy(trail).map(Enemy::tile);
    assert_eq!(lead_tile, Some(start.offset(1, 0)));
    assert_eq!(trail_tile, Some(start.offset(2, 0)));
}

#[test]
fn a_lethal_enemy_hit_ends_the_run_and_reports_the_score() {
    let reported = Rc::new(Cell::new(None));
    let sink = Rc::clone(&reported);
    let hooks = SessionHooks::new().on_game_over(move |score| sink.set(Some(score)));
    let mut session = arena_session_with_hooks(hooks);
    let start = session.player().tile();
    add_enemy(&mut session, EnemyKind::Orc, start.offset(1, 1));
    player_stats(&mut session).take_damage(96);
    assert_eq!(session.player().stats().health(), 6);

    let outcome = session.update(ENEMY_READY_MS, &InputSnapshot::idle());

    assert_eq!(outcome, TickOutcome::GameOver { score: 0 });
    assert_eq!(reported.get(), Some(0));
    assert_eq!(session.status(), SessionStatus::GameOver { score: 0 });
    assert_eq!(session.update(16.0, &InputSnapshot::idle()), TickOutcome::Finished);
}

#[test]
fn reentering_after_game_over_starts_a_fresh_run_on_the_same_clock() {
    let mut session = arena_session();
    let start = session.player().tile();
    add_enemy(&mut session, EnemyKind::Orc, start.offset(1, 0));
    player_stats(&mut session).take_damage(96);
    session.update(ENEMY_READY_MS, &InputSnapshot::idle());
    assert!(matches!(session.status(), SessionStatus::GameOver { .. }));

    session.on_exit();
    session.on_enter();

    assert_eq!(session.status(), SessionStatus::Playing);
    assert_eq!(session.progress(), Progress::new_run());
    assert_eq!(session.player().stats().health(), 100);
    assert_eq!(session.player().tile(), session.level().start);
    assert_eq!(session.clock().game_time, 0.0);
    assert_eq!(session.clock().current_time, ENEMY_READY_MS);
}

#[test]
fn stepping_onto_stairs_down_descends_and_keeps_stats() {
    let mut session = arena_session();
    let stairs = session.level().stairs_down;
    place_player(&mut session, stairs.offset(-1, 0));
    player_stats(&mut session).raise_attack(5);
    player_stats(&mut session).take_damage(12);

    let outcome = session.update(STEP_MS, &InputSnapshot::holding(Key::KeyD));

    assert_eq!(outcome, TickOutcome::FloorChanged { floor: 2 });
    assert_eq!(session.floor(), 2);
    assert_eq!(session.progress().deepest_floor, 2);
    assert_eq!(session.level().floor, 2);
    assert!(session.level().stairs_up.is_some());
    assert_eq!(session.player().tile(), session.level().start);
    let stats = session.player().stats();
    assert_eq!((stats.health(), stats.attack(), stats.defense()), (90, 15, 2));
}

#[test]
fn ascending_is_a_noop_on_the_first_floor() {
    let mut session = arena_session();
    let before = session.snapshot_hash();
    assert_eq!(session.ascend(), None);
    assert_eq!(session.snapshot_hash(), before);

    assert_eq!(session.descend(), 2);
    assert_eq!(session.descend(), 3);
    assert_eq!(session.ascend(), Some(2));
    assert_eq!(session.progress().deepest_floor, 3);
}

#[test]
fn collected_items_vanish_from_the_drawn_frame() {
    let mut session = arena_session();
    let start = session.player().tile();
    let mut bare = RecordingCanvas::default();
    session.draw(&mut bare, ScreenOffset::default());

    let gold = add_item(&mut session, ItemKind::Gold, start.offset(3, 3));
    let mut with_item = RecordingCanvas::default();
    session.draw(&mut with_item, ScreenOffset::default());
    assert!(with_item.calls.len() > bare.calls.len());

    assert!(session.collect_item(gold));
    let mut after = RecordingCanvas::default();
    session.draw(&mut after, ScreenOffset::default());
    assert_eq!(after.calls, bare.calls);
}

#[test]
fn identical_seeds_and_inputs_hash_identically() {
    let script = [
        InputSnapshot::holding(Key::KeyD),
        InputSnapshot::holding(Key::KeyS),
        InputSnapshot::idle().with_pressed(Key::Space),
        InputSnapshot::holding(Key::KeyA),
        InputSnapshot::holding(Key::KeyW),
    ];
    let run = |seed: u64| {
        let config = SessionConfig { seed, ..SessionConfig::default() };
        let mut session = Session::new(config, TemplateCatalog::builtin(), SessionHooks::new())
            .expect("stock config is valid");
        session.on_enter();
        for tick in 0..240 {
            session.update(1000.0 / 60.0, &script[tick % script.len()]);
        }
        session.snapshot_hash()
    };
    assert_eq!(run(7), run(7));
    assert_ne!(run(7), run(8));
}
