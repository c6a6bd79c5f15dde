use super::*;
use crate::domain::params::NeighborSearch;
use crate::domain::presets::Material;
use crate::domain::shapes::ShapeKind;

fn small_params() -> SimulationParams {
    SimulationParams {
        bounds_min: Vec3::splat(-1.0),
        bounds_max: Vec3::splat(1.0),
        ..SimulationParams::default()
    }
}

#[test]
fn new_world_fills_render_buffers() {
    let params = small_params();
    let sim = Simulation::new(64, &params, 7);

    assert_eq!(sim.particle_count(), 64);
    assert_eq!(sim.positions_buffer().len(), 64 * 3);
    assert_eq!(sim.velocities_buffer().len(), 64 * 3);
    assert!(sim.body_transforms_buffer().is_empty());
    assert_eq!(sim.positions_buffer()[0], sim.field().positions()[0].x);
}

#[test]
fn step_advances_frame_and_reports_counts() {
    let params = small_params();
    let mut sim = Simulation::new(27, &params, 3);
    sim.spawn_body(Shape::default_for(ShapeKind::Sphere), Material::Wood.density(), 0.0, 0.0, 0.5, &params);

    let report = sim.step(&params);
    assert_eq!(sim.frame(), 1);
    assert!(report.elapsed_ms >= 0.0);
    assert_eq!(report.stats.particle_count(), 27);
    assert_eq!(report.stats.body_count(), 1);
    assert_eq!(sim.last_stats(), report.stats);
}

#[test]
fn detailed_perf_fills_pass_timings() {
    let params = small_params();
    let mut sim = Simulation::new(27, &params, 3);
    sim.enable_perf_detailed(true);
    let report = sim.step(&params);
    assert!(report.stats.passes_ms() >= 0.0);
    assert!(report.stats.passes_ms() <= report.elapsed_ms + 1e-6);
}

#[test]
fn detailed_and_plain_steps_produce_identical_state() {
    let params = small_params();
    let mut plain = Simulation::new(50, &params, 11);
    let mut detailed = Simulation::new(50, &params, 11);
    detailed.enable_perf_detailed(true);

    for _ in 0..5 {
        plain.step(&params);
        detailed.step(&params);
    }
    assert_eq!(plain.field().positions(), detailed.field().positions());
    assert_eq!(plain.field().velocities(), detailed.field().velocities());
}

#[test]
fn reset_reseeds_field_and_keeps_bodies() {
    let params = small_params();
    let mut sim = Simulation::new(10, &params, 1);
    let id = sim.spawn_body(Shape::default_for(ShapeKind::Cube), 2700.0, 0.0, 0.0, 0.5, &params);
    sim.step(&params);

    sim.reset(20, &params, 5);
    assert_eq!(sim.particle_count(), 20);
    assert_eq!(sim.frame(), 0);
    assert_eq!(sim.seed(), 5);
    assert!(sim.body(id).is_some());
    assert_eq!(sim.field().positions(), seed_block(20, &params, 5).as_slice());
}

#[test]
fn spawned_body_starts_under_the_ceiling() {
    let params = SimulationParams::default();
    let mut sim = Simulation::new(0, &params, 1);
    let id = sim.spawn_body(Shape::default_for(ShapeKind::Cube), 600.0, 1.0, -2.0, 1.0, &params);

    let body = sim.body(id).expect("spawned");
    assert_eq!(body.position.x, 1.0);
    assert_eq!(body.position.z, -2.0);
    assert!((body.position.y - (params.bounds_max.y - 0.5)).abs() < 1e-5);
    assert_eq!(body.velocity, Vec3::ZERO);
}

#[test]
fn spawn_outside_domain_is_pulled_in() {
    let params = SimulationParams::default();
    let mut sim = Simulation::new(0, &params, 1);
    let id = sim.spawn_body(Shape::default_for(ShapeKind::Sphere), 600.0, 40.0, 0.0, 1.0, &params);
    assert!((sim.body(id).map(|b| b.position.x).unwrap_or_default() - 4.5).abs() < 1e-5);
}

#[test]
fn body_commands() {
    let params = SimulationParams::default();
    let mut sim = Simulation::new(0, &params, 1);
    let a = sim.spawn_body(Shape::default_for(ShapeKind::Torus), 1200.0, -2.0, 0.0, 1.0, &params);
    let b = sim.spawn_body(Shape::default_for(ShapeKind::Cone), 1200.0, 2.0, 0.0, 1.0, &params);

    sim.set_body_base_rotation(b, Vec3::new(0.0, 1.0, 0.0)).expect("body exists");
    assert_eq!(sim.body(b).map(|body| body.base_rotation.y), Some(1.0));
    assert_eq!(sim.set_body_base_rotation(99, Vec3::ZERO), Err(EngineError::BodyNotFound(99)));

    sim.sync_render_buffers();
    assert_eq!(sim.body_transforms_buffer().len(), 2 * BODY_TRANSFORM_STRIDE);
    assert_eq!(sim.body_transforms_buffer()[BODY_TRANSFORM_STRIDE + 4], 1.0);
    assert_eq!(sim.body_transforms_buffer()[BODY_TRANSFORM_STRIDE + 7], ShapeKind::Cone as u8 as f32);

    assert_eq!(sim.remove_body(a).map(|body| body.id), Ok(a));
    assert_eq!(sim.body_count(), 1);
    sim.clear_bodies();
    assert_eq!(sim.body_count(), 0);
}

#[test]
fn check_finite_flags_first_bad_particle() {
    let params = small_params();
    let mut sim = Simulation::new(4, &params, 1);
    assert_eq!(sim.check_finite(), Ok(()));

    sim.field_mut().velocities_mut()[2].y = f32::NAN;
    assert_eq!(
        sim.check_finite(),
        Err(EngineError::NonFinite { what: "velocity", index: 2 })
    );
}

#[test]
fn check_finite_covers_bodies() {
    let params = SimulationParams::default();
    let mut sim = Simulation::new(0, &params, 1);
    let mut body = RigidBody::new(Shape::default_for(ShapeKind::Sphere), Vec3::ZERO, 1000.0);
    body.position.x = f32::INFINITY;
    sim.add_body(body);
    assert_eq!(
        sim.check_finite(),
        Err(EngineError::NonFinite { what: "body position", index: 0 })
    );
}

#[test]
fn facade_keeps_params_between_steps() {
    let mut world = FluidWorld::new(8, 2);
    world.set_gravity(0.0);
    world.set_spatial_hash(true);
    world.load_params_json(r#"{"viscosity": 1.5}"#.to_string()).expect("valid json");

    // Loading replaces the whole value; unspecified fields fall back to defaults.
    assert_eq!(world.params().viscosity, 1.5);
    assert_eq!(world.params().gravity, -9.8);
    assert_eq!(world.params().neighbor_search, NeighborSearch::BruteForce);

    let saved = world.params_json().expect("params serialize");
    world.set_viscosity(9.0);
    world.load_params_json(saved).expect("own output loads");
    assert_eq!(world.params().viscosity, 1.5);

    world.apply_fluid_preset("honey".to_string()).expect("known preset");
    assert_eq!(world.params().rest_density, 1420.0);

    world.step().expect("finite");
    assert_eq!(world.frame(), 1);
    assert_eq!(world.positions_len(), 8 * 3);

    let id = world.spawn_body("plank".to_string(), "wood".to_string(), 0.0, 0.0, 1.0).expect("known names");
    assert_eq!(world.body_count(), 1);
    world.step().expect("finite");
    assert_eq!(world.body_transforms_len(), BODY_TRANSFORM_STRIDE);
    world.remove_body(id).expect("body exists");
    assert_eq!(world.body_count(), 0);
}
