use std::io;

use crate::qmap::repr::{Brush, Plane};

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Qualifies the `Brush` and `Plane` type names, e.g. `quakemap.`
    pub type_prefix: String,
    /// Digits after the decimal point for every float
    pub precision: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            type_prefix: String::new(),
            precision: 6,
        }
    }
}

/// Writes a brush list as a Go slice literal
#[derive(Debug, Clone, Default)]
pub struct GoEmitter {
    config: EmitConfig,
}

impl GoEmitter {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    pub fn emit<W: io::Write>(
        &self,
        brushes: &[Brush],
        writer: &mut W,
    ) -> io::Result<()> {
        let prefix = &self.config.type_prefix;
        writeln!(writer, "[]{}Brush {{", prefix)?;

        for brush in brushes {
            writeln!(
                writer,
                "{}{}Brush{{Planes: []{}Plane{{",
                INDENT, prefix, prefix
            )?;

            for plane in &brush.planes {
                write!(writer, "{}{}", INDENT, INDENT)?;
                self.emit_plane(plane, writer)?;
                writer.write_all(b",\n")?;
            }

            writeln!(writer, "{}}}}},", INDENT)?;
        }

        writer.write_all(b"}\n")?;
        Ok(())
    }

    pub fn emit_to_string(&self, brushes: &[Brush]) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.emit(brushes, &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    fn emit_plane<W: io::Write>(
        &self,
        plane: &Plane,
        writer: &mut W,
    ) -> io::Result<()> {
        let p = self.config.precision;
        write!(writer, "{}Plane{{", self.config.type_prefix)?;

        for (index, pt) in plane.half_space.iter().enumerate() {
            let n = index + 1;
            write!(
                writer,
                "X{n}: {:.p$}, Y{n}: {:.p$}, Z{n}: {:.p$}, ",
                pt[0], pt[1], pt[2]
            )?;
        }

        write!(
            writer,
            "Texture: \"{}\", Xoffset: {:.p$}, Yoffset: {:.p$}, \
             Rotation: {:.p$}, Xscale: {:.p$}, Yscale: {:.p$}}}",
            plane.texture,
            plane.x_offset(),
            plane.y_offset(),
            plane.rotation(),
            plane.x_scale(),
            plane.y_scale()
        )
    }
}
