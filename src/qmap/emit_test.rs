use crate::qmap;
use qmap::emit::{EmitConfig, GoEmitter};
use qmap::parser::parse_brushes;
use qmap::repr::Brush;

const SIMPLE_MAP: &str = "{\n\"classname\" \"worldspawn\"\n{\n( 0 0 0 ) ( 0 1 0 ) ( 1 0 0 ) STONE 0 0 0 1 1\n}\n}\n";

#[test]
fn emit_default_layout() {
    let brushes = parse_brushes(SIMPLE_MAP.as_bytes()).unwrap();
    let expected = "[]Brush {\n    \
        Brush{Planes: []Plane{\n        \
        Plane{X1: 0.000000, Y1: 0.000000, Z1: 0.000000, \
        X2: 0.000000, Y2: 1.000000, Z2: 0.000000, \
        X3: 1.000000, Y3: 0.000000, Z3: 0.000000, \
        Texture: \"STONE\", Xoffset: 0.000000, Yoffset: 0.000000, \
        Rotation: 0.000000, Xscale: 1.000000, Yscale: 1.000000},\n    \
        }},\n\
        }\n";

    assert_eq!(GoEmitter::default().emit_to_string(&brushes), expected);
}

#[test]
fn emit_negative_and_fractional() {
    let input = "{\n{\n( -16 0.5 0 ) ( 0 1 0 ) ( 1 0 0 ) *lava1 -8 0 -0 1.25 1\n}\n}\n";
    let brushes = parse_brushes(input.as_bytes()).unwrap();
    let text = GoEmitter::default().emit_to_string(&brushes);

    assert!(text.contains("Plane{X1: -16.000000, Y1: 0.500000, Z1: 0.000000,"));
    assert!(text.contains("Texture: \"*lava1\", Xoffset: -8.000000,"));
    assert!(text.contains("Rotation: -0.000000, Xscale: 1.250000,"));
}

#[test]
fn emit_no_brushes() {
    assert_eq!(GoEmitter::default().emit_to_string(&[]), "[]Brush {\n}\n");
}

#[test]
fn emit_empty_brush() {
    let text = GoEmitter::default().emit_to_string(&[Brush::default()]);
    assert_eq!(text, "[]Brush {\n    Brush{Planes: []Plane{\n    }},\n}\n");
}

#[test]
fn emit_with_config() {
    let emitter = GoEmitter::new(EmitConfig {
        type_prefix: String::from("quakemap."),
        precision: 2,
    });
    let brushes = parse_brushes(SIMPLE_MAP.as_bytes()).unwrap();
    let text = emitter.emit_to_string(&brushes);

    assert!(text.starts_with("[]quakemap.Brush {\n"));
    assert!(text.contains("quakemap.Brush{Planes: []quakemap.Plane{"));
    assert!(text.contains("quakemap.Plane{X1: 0.00, Y1: 0.00,"));
    assert!(text.contains("Yscale: 1.00},"));
    assert_eq!(emitter.config().precision, 2);
}

#[test]
fn emit_brush_per_block() {
    let brushes = vec![
        Brush::cuboid([0.0; 3], [8.0; 3], "A", 1.0),
        Brush::cuboid([8.0; 3], [16.0; 3], "B", 1.0),
    ];
    let text = GoEmitter::default().emit_to_string(&brushes);

    assert_eq!(text.matches("Brush{Planes:").count(), 2);
    assert_eq!(text.matches("Plane{X1:").count(), 12);
}
