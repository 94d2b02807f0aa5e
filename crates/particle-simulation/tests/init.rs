use particle_physics::{type_color, Result};
use particle_simulation::{IntegrationMode, Simulation, SimulationConfig, SimulationParams};

#[test]
fn seeded_runs_are_bit_for_bit_reproducible() -> Result<()> {
    let mut a = Simulation::init(300, 6, Some(2024))?;
    let mut b = Simulation::init(300, 6, Some(2024))?;
    assert_eq!(a.matrix(), b.matrix());
    assert_eq!(a.store().types(), b.store().types());

    for _ in 0..25 {
        a.step();
        b.step();
    }

    assert_eq!(a.position_buffer(), b.position_buffer());
    assert_eq!(a.color_buffer(), b.color_buffer());
    Ok(())
}

#[test]
fn different_seeds_diverge() -> Result<()> {
    let a = Simulation::init(50, 4, Some(1))?;
    let b = Simulation::init(50, 4, Some(2))?;
    assert_ne!(a.position_buffer(), b.position_buffer());
    Ok(())
}

#[test]
fn colors_depend_only_on_type() -> Result<()> {
    let sim = Simulation::init(400, 5, Some(99))?;
    let colors = sim.color_buffer();
    let types = sim.store().types();

    for (i, &ty) in types.iter().enumerate() {
        assert_eq!(&colors[i * 3..i * 3 + 3], &type_color(ty as usize, 5)[..]);
        if ty == 0 {
            let rgb = &colors[i * 3..i * 3 + 3];
            let muted_red = [0.75_f32, 0.25, 0.25];
            assert!(
                rgb.iter().zip(muted_red).all(|(c, w)| (c - w).abs() < 1e-5),
                "{rgb:?}"
            );
        }
    }
    for i in 0..types.len() {
        for j in 0..types.len() {
            let same_color = colors[i * 3..i * 3 + 3] == colors[j * 3..j * 3 + 3];
            assert_eq!(types[i] == types[j], same_color);
        }
    }
    Ok(())
}

#[test]
fn colors_are_fixed_across_steps() -> Result<()> {
    let mut sim = Simulation::init(100, 3, Some(5))?;
    let before = sim.color_buffer().to_vec();
    for _ in 0..10 {
        sim.step();
    }
    assert_eq!(sim.color_buffer(), &before[..]);
    Ok(())
}

#[test]
fn particles_stay_within_wrap_bounds() -> Result<()> {
    for integration in [IntegrationMode::Aliased, IntegrationMode::Independent] {
        let config = SimulationConfig {
            particle_count: 400,
            type_count: 6,
            seed: Some(31),
            params: SimulationParams {
                integration,
                ..Default::default()
            },
        };
        let mut sim = Simulation::new(&config)?;
        for _ in 0..30 {
            sim.step();
        }

        let wrap = sim.params().wrap;
        assert_eq!(sim.position_buffer().len(), 400 * 3);
        assert!(sim
            .position_buffer()
            .iter()
            .all(|&c| c.is_finite() && c >= wrap.lower && c <= wrap.upper));
        assert_eq!(sim.frame(), 30);
    }
    Ok(())
}

#[test]
fn aliased_and_independent_runs_differ() -> Result<()> {
    let aliased = SimulationConfig {
        particle_count: 200,
        type_count: 4,
        seed: Some(8),
        ..Default::default()
    };
    let independent = SimulationConfig {
        params: SimulationParams {
            integration: IntegrationMode::Independent,
            ..Default::default()
        },
        ..aliased.clone()
    };

    let mut a = Simulation::new(&aliased)?;
    let mut b = Simulation::new(&independent)?;
    assert_eq!(a.position_buffer(), b.position_buffer());

    a.step();
    b.step();
    assert_ne!(a.position_buffer(), b.position_buffer());
    Ok(())
}

#[test]
fn byte_views_match_float_buffers() -> Result<()> {
    let sim = Simulation::init(10, 2, Some(4))?;
    assert_eq!(sim.position_bytes().len(), sim.position_buffer().len() * 4);
    assert_eq!(sim.color_bytes().len(), sim.color_buffer().len() * 4);
    Ok(())
}

#[test]
fn stats_track_the_cloud() -> Result<()> {
    let mut sim = Simulation::init(200, 3, Some(12))?;
    sim.step();
    let stats = sim.stats();
    assert_eq!(stats.frame, 1);
    assert!(stats.extent() > 0.0 && stats.extent() <= 1.0);
    assert!(stats.centroid.abs().max_element() < 0.5);
    Ok(())
}
