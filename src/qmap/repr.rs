use std::io;

use hashbrown::HashMap;

pub type Point = [f64; 3];
pub type Vec3 = [f64; 3];
pub type Vec2 = [f64; 2];

/// Three points on the plane, wound so the normal faces out of the brush
pub type HalfSpace = [Point; 3];

pub type Edict = HashMap<String, String>;

const EMPTY_TEXTURE: &str = "__TB_empty";

pub trait Writes<W: io::Write> {
    fn write_to(&self, writer: &mut W) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    pub offset: Vec2,
    pub rotation: f64,
    pub scale: Vec2,
}

/// One bounding face of a brush
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub half_space: HalfSpace,
    pub texture: String,
    pub alignment: Alignment,
}

impl Plane {
    pub fn x1(&self) -> f64 {
        self.half_space[0][0]
    }

    pub fn y1(&self) -> f64 {
        self.half_space[0][1]
    }

    pub fn z1(&self) -> f64 {
        self.half_space[0][2]
    }

    pub fn x2(&self) -> f64 {
        self.half_space[1][0]
    }

    pub fn y2(&self) -> f64 {
        self.half_space[1][1]
    }

    pub fn z2(&self) -> f64 {
        self.half_space[1][2]
    }

    pub fn x3(&self) -> f64 {
        self.half_space[2][0]
    }

    pub fn y3(&self) -> f64 {
        self.half_space[2][1]
    }

    pub fn z3(&self) -> f64 {
        self.half_space[2][2]
    }

    pub fn x_offset(&self) -> f64 {
        self.alignment.offset[0]
    }

    pub fn y_offset(&self) -> f64 {
        self.alignment.offset[1]
    }

    /// Texture rotation in degrees
    pub fn rotation(&self) -> f64 {
        self.alignment.rotation
    }

    pub fn x_scale(&self) -> f64 {
        self.alignment.scale[0]
    }

    pub fn y_scale(&self) -> f64 {
        self.alignment.scale[1]
    }

    fn map_points(&self, f: impl Fn(Point) -> Point) -> Plane {
        Plane {
            half_space: self.half_space.map(f),
            texture: self.texture.clone(),
            alignment: self.alignment,
        }
    }
}

impl<W: io::Write> Writes<W> for Plane {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        for pt in &self.half_space {
            write!(writer, "( {} {} {} ) ", pt[0], pt[1], pt[2])?;
        }

        let texture = if self.texture.is_empty() {
            EMPTY_TEXTURE
        } else {
            &self.texture
        };

        write!(
            writer,
            "{} {} {} {} {} {}",
            texture,
            self.alignment.offset[0],
            self.alignment.offset[1],
            self.alignment.rotation,
            self.alignment.scale[0],
            self.alignment.scale[1]
        )
    }
}

/// Convex solid bounded by its planes, kept in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Brush {
    pub planes: Vec<Plane>,
}

impl Brush {
    pub fn new(planes: Vec<Plane>) -> Brush {
        Brush { planes }
    }

    /// Six-sided axis-aligned box spanning two opposite corners, every face
    /// carrying the same texture
    pub fn cuboid(min: Point, max: Point, texture: &str, scale: f64) -> Brush {
        let [x1, y1, z1] = min;
        let [x2, y2, z2] = max;

        let face = |half_space: HalfSpace, x_scale: f64| Plane {
            half_space,
            texture: texture.to_string(),
            alignment: Alignment {
                offset: [0.0, 0.0],
                rotation: 0.0,
                scale: [x_scale, scale],
            },
        };

        Brush::new(vec![
            // south
            face([[x1, y1, z1], [x1, y1, z1 + 1.0], [x1 + 1.0, y1, z1]], scale),
            // north
            face([[x1, y2, z1], [x1 + 1.0, y2, z1], [x1, y2, z1 + 1.0]], -scale),
            // west
            face([[x1, y1, z1], [x1, y1 + 1.0, z1], [x1, y1, z1 + 1.0]], -scale),
            // east
            face([[x2, y1, z1], [x2, y1, z1 + 1.0], [x2, y1 + 1.0, z1]], scale),
            // top
            face([[x1, y1, z2], [x1, y1 + 1.0, z2], [x1 + 1.0, y1, z2]], scale),
            // bottom
            face([[x1, y1, z1], [x1 + 1.0, y1, z1], [x1, y1 + 1.0, z1]], scale),
        ])
    }

    /// Span of the defining points along X
    pub fn width(&self) -> f64 {
        extent(self.points(), 0)
    }

    /// Span of the defining points along Y
    pub fn length(&self) -> f64 {
        extent(self.points(), 1)
    }

    /// Span of the defining points along Z
    pub fn height(&self) -> f64 {
        extent(self.points(), 2)
    }

    pub fn translated(&self, offset: Vec3) -> Brush {
        self.map_points(|pt| {
            [pt[0] + offset[0], pt[1] + offset[1], pt[2] + offset[2]]
        })
    }

    /// Scales every point about `focus`
    pub fn scaled(&self, focus: Point, factor: f64) -> Brush {
        self.map_points(|pt| {
            [
                (pt[0] - focus[0]) * factor,
                (pt[1] - focus[1]) * factor,
                (pt[2] - focus[2]) * factor,
            ]
        })
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.planes.iter().flat_map(|plane| plane.half_space.iter())
    }

    fn map_points(&self, f: impl Fn(Point) -> Point + Copy) -> Brush {
        Brush::new(self.planes.iter().map(|p| p.map_points(f)).collect())
    }
}

impl<W: io::Write> Writes<W> for Brush {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"{\n")?;

        for plane in &self.planes {
            plane.write_to(writer)?;
            writer.write_all(b"\n")?;
        }

        writer.write_all(b"}\n")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    pub edict: Edict,
    pub brushes: Vec<Brush>,
}

impl Entity {
    pub fn new() -> Entity {
        Entity::default()
    }

    pub fn classname(&self) -> Option<&str> {
        self.edict.get("classname").map(String::as_str)
    }

    /// Span along Z over every brush of the entity
    pub fn height(&self) -> f64 {
        extent(self.brushes.iter().flat_map(|brush| brush.points()), 2)
    }
}

impl<W: io::Write> Writes<W> for Entity {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"{\n")?;

        let mut keys = self.edict.keys().collect::<Vec<_>>();
        keys.sort();

        for key in keys {
            writeln!(writer, "\"{}\" \"{}\"", key, self.edict[key])?;
        }

        for (idx, brush) in self.brushes.iter().enumerate() {
            writeln!(writer, "// brush {}", idx)?;
            brush.write_to(writer)?;
        }

        writer.write_all(b"}\n")?;
        Ok(())
    }
}

fn extent<'a>(points: impl Iterator<Item = &'a Point>, axis: usize) -> f64 {
    let (min, max) = points.fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), pt| (min.min(pt[axis]), max.max(pt[axis])),
    );

    if min > max {
        0.0
    } else {
        max - min
    }
}
