use criterion::{criterion_group, criterion_main, Criterion};
use hearth::game::World;
use hearth::raws;

pub fn scenario_benchmark(c: &mut Criterion) {
    // init logger
    pretty_env_logger::init();

    let scenario = match raws::load_default_scenario() {
        Ok(it) => it,
        Err(err) => panic!("{}", err),
    };

    c.bench_function("clearing", |b| {
        b.iter(|| {
            let mut world = World::new();
            if let Err(err) = scenario.run(&mut world) {
                panic!("{}", err);
            }
            world
        })
    });
}

criterion_group!(benches, scenario_benchmark);
criterion_main!(benches);
