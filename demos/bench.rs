use benchmarking::measure_function_with_times;
use std::time::Duration;

use quake_map_brushes::qmap::{parse, Brush, Entity, GoEmitter, Writes};

fn generated_map(brush_count: usize) -> Vec<u8> {
    let mut entity = Entity::new();
    entity
        .edict
        .insert(String::from("classname"), String::from("worldspawn"));

    for i in 0..brush_count {
        let min = [i as f64 * 32.0, -16.0, -8.5];
        let max = [min[0] + 32.0, 16.0, 8.5];
        entity.brushes.push(Brush::cuboid(min, max, "WIZMET1_2", 0.5));
    }

    let mut bytes = Vec::new();
    entity.write_to(&mut bytes).unwrap();
    bytes
}

fn measure_parse(bytes: &[u8]) -> Duration {
    let bytes = bytes.to_vec();

    let results = measure_function_with_times(10, move |measurer| {
        measurer.measure(|| {
            let entity = parse(&bytes[..]).unwrap();
            let _ = GoEmitter::default().emit_to_string(&entity.brushes);
        });
    })
    .unwrap();

    results.elapsed()
}

fn main() {
    for brush_count in [10, 1_000, 10_000] {
        let bytes = generated_map(brush_count);
        println!(
            "Took {:?} to parse {} brushes ({} bytes)",
            measure_parse(&bytes),
            brush_count,
            bytes.len()
        );
    }
}
